//! # Report Types
//!
//! JSON structures printed in `--json-mode`.

use enigma_core::{EnigmaMachine, ReflectorModel, Rotor, RotorModel, alphabet::render};
use serde::{Deserialize, Serialize};

// =============================================================================
// MACHINE SUMMARY
// =============================================================================

/// One rotor as currently set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotorSummary {
    pub name: String,
    pub ring_setting: i64,
    pub position: char,
    pub notches: String,
}

impl From<&Rotor> for RotorSummary {
    fn from(rotor: &Rotor) -> Self {
        let notches: Vec<_> = rotor.notches().iter().copied().collect();
        Self {
            name: rotor.name().to_string(),
            ring_setting: rotor.ring_setting(),
            position: rotor.position().to_char(),
            notches: render(&notches),
        }
    }
}

/// Machine settings, left to right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSummary {
    pub rotors: Vec<RotorSummary>,
    pub reflector: String,
    pub plugs: Vec<String>,
    pub plug_capacity: usize,
}

impl From<&EnigmaMachine> for MachineSummary {
    fn from(machine: &EnigmaMachine) -> Self {
        Self {
            rotors: machine.rotors().iter().map(RotorSummary::from).collect(),
            reflector: machine.reflector().name().to_string(),
            plugs: machine
                .plugboard()
                .leads()
                .iter()
                .map(ToString::to_string)
                .collect(),
            plug_capacity: machine.plugboard().capacity(),
        }
    }
}

// =============================================================================
// ENCODE REPORT
// =============================================================================

/// Result of `enigma encode`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeReport {
    pub input: String,
    pub output: String,
    pub start_window: String,
    pub end_window: String,
    pub machine: MachineSummary,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trace: Vec<String>,
}

// =============================================================================
// CATALOG REPORT
// =============================================================================

/// A catalog rotor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRotor {
    pub name: String,
    pub wiring: String,
    pub notches: String,
}

/// A catalog reflector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogReflector {
    pub name: String,
    pub wiring: String,
}

/// Everything `enigma catalog` lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogReport {
    pub rotors: Vec<CatalogRotor>,
    pub reflectors: Vec<CatalogReflector>,
}

impl CatalogReport {
    pub fn collect() -> Self {
        Self {
            rotors: RotorModel::ALL
                .iter()
                .map(|m| CatalogRotor {
                    name: m.name().to_string(),
                    wiring: m.mapping().to_string(),
                    notches: m.notches().to_string(),
                })
                .collect(),
            reflectors: ReflectorModel::ALL
                .iter()
                .map(|m| CatalogReflector {
                    name: m.name().to_string(),
                    wiring: m.mapping().to_string(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_every_model() {
        let report = CatalogReport::collect();
        assert_eq!(report.rotors.len(), 10);
        assert_eq!(report.reflectors.len(), 5);
        assert_eq!(report.rotors[0].wiring, "EKMFLGDQVZNTOWYHXUSPAIBRCJ");
    }

    #[test]
    fn empty_trace_is_omitted() {
        let report = EncodeReport {
            input: "A".to_string(),
            output: "U".to_string(),
            start_window: "AAZ".to_string(),
            end_window: "AAA".to_string(),
            machine: MachineSummary {
                rotors: Vec::new(),
                reflector: "B".to_string(),
                plugs: Vec::new(),
                plug_capacity: 10,
            },
            trace: Vec::new(),
        };
        let json = serde_json::to_string(&report).expect("json");
        assert!(!json.contains("trace"));
        assert!(json.contains("\"output\":\"U\""));
    }
}
