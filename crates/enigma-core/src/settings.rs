//! # Settings Module
//!
//! Declarative machine description, validated into an `EnigmaMachine`.
//!
//! Settings are plain serde structures so the application layer can load
//! them from TOML or JSON. `MachineSettings::build` runs every check before
//! any machine exists; a failed build leaves nothing behind.
//!
//! ```toml
//! reflector = "B"
//!
//! [[rotors]]
//! name = "I"
//! ring_setting = 1
//! position = "A"
//! order = 1
//!
//! [plugboard]
//! leads = "HL MO AJ"
//! ```

use crate::alphabet::parse_single;
use crate::catalog::{ReflectorModel, RotorModel, is_custom};
use crate::machine::EnigmaMachine;
use crate::plugboard::Plugboard;
use crate::primitives::{DEFAULT_PLUG_LEADS, MIN_RING_SETTING, MIN_ROTORS};
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::{ConfigError, EnigmaError};
use serde::{Deserialize, Serialize};

// =============================================================================
// ROTOR SETTINGS
// =============================================================================

/// One rotor of the stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RotorSettings {
    /// Catalog name (`"I"`, `"RotorBeta"`, …) or `"Custom"`.
    pub name: String,
    /// Ring setting, 1–26.
    #[serde(default = "default_ring_setting")]
    pub ring_setting: i64,
    /// Initial window letter.
    #[serde(default = "default_position")]
    pub position: String,
    /// Slot in the stack, 1 = leftmost.
    pub order: i64,
    /// Wiring for a custom rotor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapping: Option<String>,
    /// Notch letters for a custom rotor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notches: Option<String>,
}

fn default_ring_setting() -> i64 {
    MIN_RING_SETTING
}

fn default_position() -> String {
    "A".to_string()
}

impl RotorSettings {
    /// Settings for a catalog rotor.
    pub fn catalog(
        name: impl Into<String>,
        ring_setting: i64,
        position: impl Into<String>,
        order: i64,
    ) -> Self {
        Self {
            name: name.into(),
            ring_setting,
            position: position.into(),
            order,
            mapping: None,
            notches: None,
        }
    }

    /// Settings for a custom rotor.
    pub fn custom(
        mapping: impl Into<String>,
        notches: Option<String>,
        ring_setting: i64,
        position: impl Into<String>,
        order: i64,
    ) -> Self {
        Self {
            name: "Custom".to_string(),
            ring_setting,
            position: position.into(),
            order,
            mapping: Some(mapping.into()),
            notches,
        }
    }

    /// Validate and build the rotor.
    pub fn build(&self) -> Result<Rotor, EnigmaError> {
        let rotor = if is_custom(&self.name) {
            let mapping = self
                .mapping
                .as_deref()
                .ok_or_else(|| ConfigError::MissingMapping(self.name.clone()))?;
            Rotor::custom(mapping, self.notches.as_deref())?
        } else {
            let model: RotorModel = self.name.parse()?;
            if self.mapping.is_some() || self.notches.is_some() {
                return Err(ConfigError::CatalogOverride(self.name.clone()).into());
            }
            model.build()?
        };

        let position = parse_single(&self.position, "Initial Position")?;
        Ok(rotor
            .with_ring_setting(self.ring_setting)?
            .with_position(position))
    }
}

// =============================================================================
// REFLECTOR SETTINGS
// =============================================================================

/// The reflector: a catalog name, or a custom wiring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReflectorSettings {
    /// Catalog reflector, e.g. `"B"` or `"ReflectorCThin"`.
    Named(String),
    /// Custom reflector with its own wiring.
    Custom { name: String, mapping: String },
}

impl ReflectorSettings {
    /// Validate and build the reflector.
    pub fn build(&self) -> Result<Reflector, ConfigError> {
        match self {
            Self::Named(name) if is_custom(name) => Err(ConfigError::MissingMapping(name.clone())),
            Self::Named(name) => name.parse::<ReflectorModel>()?.build(),
            Self::Custom { name, mapping } => {
                if !is_custom(name) {
                    // Surface unknown names before complaining about the override.
                    name.parse::<ReflectorModel>()?;
                    return Err(ConfigError::CatalogOverride(name.clone()));
                }
                Reflector::custom(mapping)
            }
        }
    }
}

// =============================================================================
// PLUGBOARD SETTINGS
// =============================================================================

/// Plug leads and capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlugboardSettings {
    /// Whitespace-separated two-letter leads, e.g. `"AB CD"`.
    #[serde(default)]
    pub leads: String,
    /// Maximum number of leads, 0–13.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_capacity() -> usize {
    DEFAULT_PLUG_LEADS
}

impl Default for PlugboardSettings {
    fn default() -> Self {
        Self {
            leads: String::new(),
            capacity: DEFAULT_PLUG_LEADS,
        }
    }
}

impl PlugboardSettings {
    /// Validate and build the plugboard.
    pub fn build(&self) -> Result<Plugboard, EnigmaError> {
        Plugboard::from_spec(&self.leads, self.capacity)
    }
}

// =============================================================================
// MACHINE SETTINGS
// =============================================================================

/// A complete machine description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MachineSettings {
    /// Rotors in any order; `order` places them.
    pub rotors: Vec<RotorSettings>,
    /// The reflector.
    pub reflector: ReflectorSettings,
    /// Plug leads (empty board by default).
    #[serde(default)]
    pub plugboard: PlugboardSettings,
}

impl MachineSettings {
    /// Validate everything and assemble the machine.
    ///
    /// Checks, in order: rotor count, plugboard, each rotor and its order,
    /// reflector.
    pub fn build(&self) -> Result<EnigmaMachine, EnigmaError> {
        let count = self.rotors.len();
        if count < MIN_ROTORS {
            return Err(ConfigError::RotorCount { count }.into());
        }

        let plugboard = self.plugboard.build()?;

        let mut slots: Vec<Option<Rotor>> = vec![None; count];
        for spec in &self.rotors {
            let rotor = spec.build()?;
            let slot = usize::try_from(spec.order)
                .ok()
                .filter(|order| (1..=count).contains(order))
                .ok_or_else(|| ConfigError::RotorOrder {
                    rotor: spec.name.clone(),
                    order: spec.order,
                    max: count,
                })?
                - 1;
            if slots[slot].is_some() {
                return Err(ConfigError::DuplicateRotorOrder {
                    rotor: spec.name.clone(),
                    order: spec.order,
                }
                .into());
            }
            slots[slot] = Some(rotor);
        }
        let rotors: Vec<Rotor> = slots.into_iter().flatten().collect();

        let reflector = self.reflector.build()?;

        Ok(EnigmaMachine::new(rotors, reflector, plugboard)?)
    }
}

// =============================================================================
// TESTS
// =============================================================================
