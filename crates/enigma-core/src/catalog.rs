//! # Catalog Module
//!
//! Historical rotor and reflector wirings.
//!
//! Models are closed enums; names parse case-insensitively, with or without
//! the `Rotor` / `Reflector` prefix (`"III"`, `"RotorIII"`, `"beta"`,
//! `"ReflectorBThin"`).

use crate::alphabet::parse_letters;
use crate::reflector::Reflector;
use crate::rotor::{Rotor, Wiring};
use crate::{ConfigError, EnigmaError};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// ROTOR MODELS
// =============================================================================

/// A rotor from the historical catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RotorModel {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
    Beta,
    Gamma,
}

impl RotorModel {
    /// Every catalog rotor, in catalog order.
    pub const ALL: [Self; 10] = [
        Self::I,
        Self::II,
        Self::III,
        Self::IV,
        Self::V,
        Self::VI,
        Self::VII,
        Self::VIII,
        Self::Beta,
        Self::Gamma,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::I => "I",
            Self::II => "II",
            Self::III => "III",
            Self::IV => "IV",
            Self::V => "V",
            Self::VI => "VI",
            Self::VII => "VII",
            Self::VIII => "VIII",
            Self::Beta => "Beta",
            Self::Gamma => "Gamma",
        }
    }

    /// Wiring as a 26-letter mapping.
    #[must_use]
    pub const fn mapping(self) -> &'static str {
        match self {
            Self::I => "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
            Self::II => "AJDKSIRUXBLHWTMCQGZNPYFVOE",
            Self::III => "BDFHJLCPRTXVZNYEIWGAKMUSQO",
            Self::IV => "ESOVPZJAYQUIRHXLNFTGKDCMWB",
            Self::V => "VZBRGITYUPSDNHLXAWMJQOFECK",
            Self::VI => "JPGVOUMFYQBENHZRDKASXLICTW",
            Self::VII => "NZJHGRCXMYSWBOUFAIVLPEKQDT",
            Self::VIII => "FKQHTLXOCBJSPDZRAMEWNIUYGV",
            Self::Beta => "LEYJVCNIXWPBQMDRTAKZGFUHOS",
            Self::Gamma => "FSOKANUERHMBTIYCWLQPZXVGJD",
        }
    }

    /// Notch letters (empty for the notch-less Beta and Gamma).
    #[must_use]
    pub const fn notches(self) -> &'static str {
        match self {
            Self::I => "Q",
            Self::II => "E",
            Self::III => "V",
            Self::IV => "J",
            Self::V => "Z",
            Self::VI | Self::VII | Self::VIII => "ZM",
            Self::Beta | Self::Gamma => "",
        }
    }

    /// Build a rotor at position `A`, ring setting 1.
    pub fn build(self) -> Result<Rotor, EnigmaError> {
        let wiring = Wiring::parse(self.name(), self.mapping())?;
        let notches = parse_letters(self.notches(), "Notches")?;
        Ok(Rotor::new(self.name(), wiring, notches))
    }
}

impl fmt::Display for RotorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RotorModel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bare = strip_prefix_ignore_case(trimmed, "rotor");
        Self::ALL
            .into_iter()
            .find(|model| model.name().eq_ignore_ascii_case(bare))
            .ok_or_else(|| ConfigError::UnknownRotor(trimmed.to_string()))
    }
}

// =============================================================================
// REFLECTOR MODELS
// =============================================================================

/// A reflector from the historical catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReflectorModel {
    A,
    B,
    C,
    BThin,
    CThin,
}

impl ReflectorModel {
    /// Every catalog reflector, in catalog order.
    pub const ALL: [Self; 5] = [Self::A, Self::B, Self::C, Self::BThin, Self::CThin];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::BThin => "BThin",
            Self::CThin => "CThin",
        }
    }

    /// Wiring as a 26-letter mapping.
    #[must_use]
    pub const fn mapping(self) -> &'static str {
        match self {
            Self::A => "EJMZALYXVBWFCRQUONTSPIKHGD",
            Self::B => "YRUHQSLDPXNGOKMIEBFZCWVJAT",
            Self::C => "FVPJIAOYEDRZXWGCTKUQSBNMHL",
            Self::BThin => "ENKQAUYWJICOPBLMDXZVFTHRGS",
            Self::CThin => "RDOBJNTKVEHMLFCWZAXGYIPSUQ",
        }
    }

    /// Build the reflector.
    pub fn build(self) -> Result<Reflector, ConfigError> {
        Reflector::new(self.name(), Wiring::parse(self.name(), self.mapping())?)
    }
}

impl fmt::Display for ReflectorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReflectorModel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bare = strip_prefix_ignore_case(trimmed, "reflector");
        Self::ALL
            .into_iter()
            .find(|model| model.name().eq_ignore_ascii_case(bare))
            .ok_or_else(|| ConfigError::UnknownReflector(trimmed.to_string()))
    }
}

/// Strip `prefix` from the start of `s`, ignoring ASCII case.
fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> &'a str {
    match s.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => &s[prefix.len()..],
        _ => s,
    }
}

/// Check whether `name` asks for a custom component (`"Custom"`,
/// `"RotorCustom"`, `"ReflectorCustom"`).
#[must_use]
pub fn is_custom(name: &str) -> bool {
    let trimmed = name.trim();
    let bare = strip_prefix_ignore_case(trimmed, "rotor");
    let bare = strip_prefix_ignore_case(bare, "reflector");
    bare.eq_ignore_ascii_case("custom")
}

// =============================================================================
// TESTS
// =============================================================================
