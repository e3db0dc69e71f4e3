//! # Core Type Definitions
//!
//! This module contains the shared vocabulary of the machine:
//! - The `Letter` newtype (a contact index in the generic alphabet)
//! - Configuration errors (`ConfigError`)
//! - Input format errors (`InputError`)
//! - The umbrella error (`EnigmaError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Use integer arithmetic only (no floating-point)
//! - Implement `Ord` for deterministic ordering in `BTreeSet`
//! - Are `Copy` or cheaply `Clone`, with no interior mutability

use crate::primitives::{
    ALPHABET, ALPHABET_LEN, MAX_NOTCHES, MAX_PLUG_LEADS, MAX_RING_SETTING, MIN_RING_SETTING,
    MIN_ROTORS,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// LETTER
// =============================================================================

/// A single letter of the generic alphabet, stored as its index (0–25).
///
/// A `Letter` is always valid: the only ways to build one are checked
/// conversions and the crate's own wrap arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(pub(crate) u8);

impl Letter {
    /// The first letter of the alphabet.
    pub const A: Self = Self(0);

    /// The last letter of the alphabet.
    pub const Z: Self = Self(25);

    /// Build a letter from its generic-alphabet index.
    ///
    /// Returns `None` if the index is outside `0..26`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        (index < ALPHABET_LEN).then_some(Self(index as u8))
    }

    /// Generic-alphabet index of this letter.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Upper-case character for this letter.
    #[must_use]
    pub const fn to_char(self) -> char {
        ALPHABET[self.0 as usize] as char
    }

    /// The next letter, wrapping from `Z` to `A`.
    ///
    /// This is one ratchet step of a rotor.
    #[must_use]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % ALPHABET_LEN as u8)
    }

    /// Iterate over the whole alphabet in order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..ALPHABET_LEN as u8).map(Self)
    }
}

impl TryFrom<char> for Letter {
    type Error = InputError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_uppercase() as u8 - b'A'))
        } else {
            Err(InputError::NonAlphabetic {
                context: "Letter",
                input: c.to_string(),
            })
        }
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.to_char()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised while assembling a machine.
///
/// Every variant is produced before a usable machine exists; a failed
/// setup never leaves a partially configured machine reachable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Fewer rotors than the machine needs.
    #[error("Invalid rotor count {count}: a machine needs at least {min} rotors", min = MIN_ROTORS)]
    RotorCount { count: usize },

    /// Rotor order outside `1..=max`.
    #[error("Position {order} is invalid for rotor {rotor}: expected 1..={max}")]
    RotorOrder {
        rotor: String,
        order: i64,
        max: usize,
    },

    /// Two rotors claim the same slot.
    #[error("Position {order} is already taken when adding rotor {rotor}")]
    DuplicateRotorOrder { rotor: String, order: i64 },

    /// Rotor name is not in the catalog.
    #[error("{0} is not a valid rotor")]
    UnknownRotor(String),

    /// Reflector name is not in the catalog.
    #[error("{0} is not a valid reflector")]
    UnknownReflector(String),

    /// A custom component was requested without a wiring.
    #[error("Custom component {0} requires a mapping of 26 different letters")]
    MissingMapping(String),

    /// A mapping or notches were given for a catalog component.
    #[error("{0} has a fixed wiring: mapping and notches are only accepted for Custom")]
    CatalogOverride(String),

    /// Wiring string does not have exactly 26 symbols.
    #[error("Mapping for {name} has {length} letters, expected 26")]
    WiringLength { name: String, length: usize },

    /// Wiring string contains something other than a letter.
    #[error("Mapping for {name} contains {symbol:?}, only letters [a-zA-Z] are allowed")]
    WiringSymbol { name: String, symbol: char },

    /// Wiring string repeats a letter.
    #[error("Mapping for {name} repeats letter {letter}")]
    WiringRepeat { name: String, letter: Letter },

    /// Reflector wires a letter to itself.
    #[error("Reflector {name} maps {letter} to itself")]
    ReflectorFixedPoint { name: String, letter: Letter },

    /// Reflector wiring is not self-inverse.
    #[error("Reflector {name} maps {from} to {to} but not {to} back to {from}")]
    ReflectorNotInvolution {
        name: String,
        from: Letter,
        to: Letter,
    },

    /// Too many notches on a custom rotor.
    #[error("Amount of notches ({length}) cannot be greater than {max}", max = MAX_NOTCHES)]
    NotchLength { length: usize },

    /// Notch string repeats a letter.
    #[error("Notches cannot repeat letters ({letter} appears twice)")]
    NotchRepeat { letter: Letter },

    /// Ring setting outside `1..=26`.
    #[error("Ring setting {0} is invalid: expected {min}-{max}", min = MIN_RING_SETTING, max = MAX_RING_SETTING)]
    RingSetting(i64),

    /// Plugboard capacity above the hardware limit.
    #[error("Number of plug leads cannot be greater than {max} (requested {requested})", max = MAX_PLUG_LEADS)]
    PlugboardCapacityLimit { requested: usize },

    /// Plugboard already holds its maximum number of leads.
    #[error("Cannot add {lead}: max number of plug leads has been reached ({capacity})")]
    PlugboardCapacity { lead: String, capacity: usize },

    /// Letter already wired by another lead.
    #[error("{letter} is already assigned to another plug lead")]
    PlugboardConflict { letter: Letter },
}

/// Errors raised for malformed letter input.
///
/// `context` names the component that received the input, e.g.
/// `"PlugLead"` or `"Message"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Input contains a non-letter character.
    #[error("[{context}] {input:?}: input can only take letters [a-zA-Z]")]
    NonAlphabetic {
        context: &'static str,
        input: String,
    },

    /// Input has the wrong number of letters.
    #[error("[{context}] {input:?}: expected {expected} letter(s), found {found}")]
    LetterCount {
        context: &'static str,
        input: String,
        expected: usize,
        found: usize,
    },

    /// Input letters that must differ are the same.
    #[error("[{context}] {input:?}: letters must be different")]
    RepeatedLetter {
        context: &'static str,
        input: String,
    },
}

/// Any error the machine can raise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// Invalid machine configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Invalid letter input.
    #[error(transparent)]
    Input(#[from] InputError),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_from_char_is_case_insensitive() {
        assert_eq!(Letter::try_from('a'), Ok(Letter::A));
        assert_eq!(Letter::try_from('Z'), Ok(Letter::Z));
        assert_eq!(Letter::try_from('q').map(Letter::index), Ok(16));
    }

    #[test]
    fn letter_rejects_non_alphabetic() {
        assert!(matches!(
            Letter::try_from('3'),
            Err(InputError::NonAlphabetic { .. })
        ));
        assert!(Letter::try_from('é').is_err());
    }

    #[test]
    fn letter_next_wraps() {
        assert_eq!(Letter::Z.next(), Letter::A);
        assert_eq!(Letter::A.next().to_char(), 'B');
    }

    #[test]
    fn letter_from_index_bounds() {
        assert_eq!(Letter::from_index(25), Some(Letter::Z));
        assert_eq!(Letter::from_index(26), None);
    }

    #[test]
    fn letter_displays_upper_case() {
        let letter = Letter::try_from('k').expect("letter");
        assert_eq!(char::from(letter), 'K');
        assert_eq!(letter.to_string(), "K");
    }

    #[test]
    fn error_messages_name_offending_value() {
        let err = ConfigError::RingSetting(27);
        assert_eq!(err.to_string(), "Ring setting 27 is invalid: expected 1-26");

        let err = ConfigError::RotorCount { count: 2 };
        assert!(err.to_string().contains("at least 3"));

        let err = EnigmaError::from(InputError::RepeatedLetter {
            context: "PlugLead",
            input: "AA".to_string(),
        });
        assert!(err.to_string().contains("PlugLead"));
    }
}
