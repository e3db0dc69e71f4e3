//! # enigma-core
//!
//! The deterministic Enigma machine - THE MACHINE.
//!
//! This crate simulates the electromechanical signal path of the Enigma
//! rotor cipher letter for letter: plugboard, a stack of three or more
//! rotors with ring settings and notches, a reflector, and the
//! ratchet-and-pawl stepping that produces the double-stepping anomaly.
//!
//! ## Architectural Constraints
//!
//! The core:
//! - Has NO I/O, NO logging, NO async (pure Rust)
//! - Validates whole inputs before mutating anything
//! - Carries no state between key presses except rotor positions
//! - Exposes tracing only through the `TraceSink` side channel
//!
//! ## Example
//!
//! ```
//! use enigma_core::{MachineSettings, ReflectorSettings, RotorSettings, PlugboardSettings};
//!
//! let settings = MachineSettings {
//!     rotors: vec![
//!         RotorSettings::catalog("I", 1, "A", 1),
//!         RotorSettings::catalog("II", 1, "A", 2),
//!         RotorSettings::catalog("III", 1, "A", 3),
//!     ],
//!     reflector: ReflectorSettings::Named("B".to_string()),
//!     plugboard: PlugboardSettings::default(),
//! };
//! let mut machine = settings.build()?;
//! assert_eq!(machine.encode("AAAAA")?, "BDZGO");
//! # Ok::<(), enigma_core::EnigmaError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod alphabet;
pub mod catalog;
pub mod machine;
pub mod plugboard;
pub mod primitives;
pub mod reflector;
pub mod rotor;
pub mod settings;
pub mod stepping;
pub mod trace;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{ConfigError, EnigmaError, InputError, Letter};

// =============================================================================
// RE-EXPORTS: Components
// =============================================================================

pub use catalog::{ReflectorModel, RotorModel};
pub use plugboard::{PlugLead, Plugboard};
pub use reflector::Reflector;
pub use rotor::{Direction, Rotor, RotorKind, Wiring};

// =============================================================================
// RE-EXPORTS: Machine
// =============================================================================

pub use machine::EnigmaMachine;
pub use settings::{MachineSettings, PlugboardSettings, ReflectorSettings, RotorSettings};
pub use stepping::{StepOutcome, step_rotors};
pub use trace::{NoTrace, TraceEvent, TraceLog, TraceSink};
