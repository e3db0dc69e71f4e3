//! # Rotor Module
//!
//! A rotor is a fixed wiring permutation seen through a rotating frame.
//!
//! Two lookup tables are combined: the generic alphabet (the static
//! coordinate space) and the rotor wiring. The frame offset is
//! `position - ring_setting`; it is added on the way in and subtracted on
//! the way out, so only the wiring permutation survives.

use crate::alphabet::{parse_letters, shift};
use crate::primitives::{ALPHABET_LEN, MAX_NOTCHES, MAX_RING_SETTING, MIN_RING_SETTING};
use crate::{ConfigError, EnigmaError, Letter};
use std::collections::BTreeSet;
use std::fmt;

// =============================================================================
// WIRING
// =============================================================================

/// A permutation of the alphabet, stored with its inverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wiring {
    forward: [Letter; ALPHABET_LEN],
    backward: [Letter; ALPHABET_LEN],
}

impl Wiring {
    /// Parse a 26-letter mapping, e.g. `"EKMFLGDQVZNTOWYHXUSPAIBRCJ"`.
    ///
    /// `name` is only used in error messages. Fails with
    /// `WiringLength`, `WiringSymbol` or `WiringRepeat`.
    pub fn parse(name: &str, mapping: &str) -> Result<Self, ConfigError> {
        let length = mapping.chars().count();
        if length != ALPHABET_LEN {
            return Err(ConfigError::WiringLength {
                name: name.to_string(),
                length,
            });
        }

        let mut forward = [Letter::A; ALPHABET_LEN];
        let mut backward = [Letter::A; ALPHABET_LEN];
        let mut seen = [false; ALPHABET_LEN];

        for (index, symbol) in mapping.chars().enumerate() {
            let letter = Letter::try_from(symbol).map_err(|_| ConfigError::WiringSymbol {
                name: name.to_string(),
                symbol,
            })?;
            if seen[letter.index()] {
                return Err(ConfigError::WiringRepeat {
                    name: name.to_string(),
                    letter,
                });
            }
            seen[letter.index()] = true;
            forward[index] = letter;
            backward[letter.index()] = Letter(index as u8);
        }

        Ok(Self { forward, backward })
    }

    /// The straight-through wiring `A↦A, B↦B, …`.
    #[must_use]
    pub fn identity() -> Self {
        let mut forward = [Letter::A; ALPHABET_LEN];
        for letter in Letter::all() {
            forward[letter.index()] = letter;
        }
        Self {
            forward,
            backward: forward,
        }
    }

    /// Wired symbol at a generic-alphabet contact.
    #[must_use]
    pub fn forward(&self, contact: Letter) -> Letter {
        self.forward[contact.index()]
    }

    /// Generic-alphabet contact whose wired symbol is `symbol`.
    #[must_use]
    pub fn backward(&self, symbol: Letter) -> Letter {
        self.backward[symbol.index()]
    }
}

impl fmt::Display for Wiring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.forward.iter().try_for_each(|l| write!(f, "{}", l))
    }
}

// =============================================================================
// ROTOR KIND & DIRECTION
// =============================================================================

/// Stepping eligibility of a rotor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotorKind {
    /// Carries at least one notch.
    Stepping,
    /// Carries no notch (e.g. Beta, Gamma); never engages a pawl.
    Notchless,
}

/// Direction of travel through a rotor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// From the plugboard towards the reflector (right to left).
    Forward,
    /// From the reflector back to the plugboard (left to right).
    Backward,
}

/// Parse a notch string such as `"Q"` or `"ZM"`.
///
/// An empty string yields an empty notch set.
pub fn parse_notches(notches: &str) -> Result<BTreeSet<Letter>, EnigmaError> {
    let length = notches.chars().count();
    if length > MAX_NOTCHES {
        return Err(ConfigError::NotchLength { length }.into());
    }

    let mut set = BTreeSet::new();
    for letter in parse_letters(notches, "Notches")? {
        if !set.insert(letter) {
            return Err(ConfigError::NotchRepeat { letter }.into());
        }
    }
    Ok(set)
}

// =============================================================================
// ROTOR
// =============================================================================

/// A rotor: wiring, ring setting, rotational position and notches.
///
/// Only `position` changes during operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    name: String,
    wiring: Wiring,
    /// Ring offset, 0-based.
    ring: u8,
    position: Letter,
    initial_position: Letter,
    notches: BTreeSet<Letter>,
}

impl Rotor {
    /// Create a rotor at position `A` with ring setting 1.
    pub fn new(
        name: impl Into<String>,
        wiring: Wiring,
        notches: impl IntoIterator<Item = Letter>,
    ) -> Self {
        Self {
            name: name.into(),
            wiring,
            ring: 0,
            position: Letter::A,
            initial_position: Letter::A,
            notches: notches.into_iter().collect(),
        }
    }

    /// Create a custom rotor from a mapping and an optional notch string.
    ///
    /// Without notches the rotor is notch-less.
    pub fn custom(mapping: &str, notches: Option<&str>) -> Result<Self, EnigmaError> {
        let wiring = Wiring::parse("Custom", mapping)?;
        let notches = parse_notches(notches.unwrap_or_default())?;
        Ok(Self::new("Custom", wiring, notches))
    }

    /// Set the ring setting (1–26, as printed on the ring).
    pub fn with_ring_setting(mut self, ring_setting: i64) -> Result<Self, ConfigError> {
        if !(MIN_RING_SETTING..=MAX_RING_SETTING).contains(&ring_setting) {
            return Err(ConfigError::RingSetting(ring_setting));
        }
        self.ring = (ring_setting - MIN_RING_SETTING) as u8;
        Ok(self)
    }

    /// Set the initial (and current) position.
    #[must_use]
    pub fn with_position(mut self, position: Letter) -> Self {
        self.position = position;
        self.initial_position = position;
        self
    }

    /// Rotor name, e.g. `"III"` or `"Custom"`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rotor wiring.
    #[must_use]
    pub fn wiring(&self) -> &Wiring {
        &self.wiring
    }

    /// Ring setting as configured (1–26).
    #[must_use]
    pub fn ring_setting(&self) -> i64 {
        self.ring as i64 + MIN_RING_SETTING
    }

    /// Current rotational position.
    #[must_use]
    pub const fn position(&self) -> Letter {
        self.position
    }

    /// Notch letters.
    #[must_use]
    pub fn notches(&self) -> &BTreeSet<Letter> {
        &self.notches
    }

    /// Stepping eligibility.
    #[must_use]
    pub fn kind(&self) -> RotorKind {
        if self.notches.is_empty() {
            RotorKind::Notchless
        } else {
            RotorKind::Stepping
        }
    }

    /// Check whether `letter` is one of this rotor's notches.
    #[must_use]
    pub fn has_notch_at(&self, letter: Letter) -> bool {
        self.notches.contains(&letter)
    }

    /// Frame offset `position - ring_setting`, in `-25..=25`.
    #[must_use]
    pub fn offset(&self) -> i32 {
        self.position.index() as i32 - self.ring as i32
    }

    /// Advance one position, wrapping `Z` to `A`.
    pub fn advance(&mut self) {
        self.position = self.position.next();
    }

    /// Move to an arbitrary position.
    pub fn set_position(&mut self, position: Letter) {
        self.position = position;
    }

    /// Return to the configured initial position.
    pub fn reset(&mut self) {
        self.position = self.initial_position;
    }

    /// Substitute a letter travelling in `direction`.
    #[must_use]
    pub fn encode(&self, letter: Letter, direction: Direction) -> Letter {
        let offset = self.offset();
        let contact = shift(letter, offset);
        let wired = match direction {
            Direction::Forward => self.wiring.forward(contact),
            Direction::Backward => self.wiring.backward(contact),
        };
        shift(wired, -offset)
    }

    /// Substitute on the way to the reflector.
    #[must_use]
    pub fn forward(&self, letter: Letter) -> Letter {
        self.encode(letter, Direction::Forward)
    }

    /// Substitute on the way back from the reflector.
    #[must_use]
    pub fn backward(&self, letter: Letter) -> Letter {
        self.encode(letter, Direction::Backward)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ROTOR_I: &str = "EKMFLGDQVZNTOWYHXUSPAIBRCJ";

    fn letter(c: char) -> Letter {
        Letter::try_from(c).expect("letter")
    }

    fn rotor_i() -> Rotor {
        Rotor::new("I", Wiring::parse("I", ROTOR_I).expect("wiring"), [letter('Q')])
    }

    #[test]
    fn wiring_parse_builds_inverse() {
        let wiring = Wiring::parse("I", ROTOR_I).expect("wiring");
        assert_eq!(wiring.forward(letter('A')), letter('E'));
        assert_eq!(wiring.backward(letter('E')), letter('A'));
        assert_eq!(wiring.to_string(), ROTOR_I);
    }

    #[test]
    fn wiring_rejects_wrong_length() {
        assert_eq!(
            Wiring::parse("Custom", "ABC"),
            Err(ConfigError::WiringLength {
                name: "Custom".to_string(),
                length: 3
            })
        );
        assert!(matches!(
            Wiring::parse("Custom", "ABCDEFGHIJKLMNOPQRSTUVWXYZA"),
            Err(ConfigError::WiringLength { length: 27, .. })
        ));
    }

    #[test]
    fn wiring_rejects_repeat() {
        assert_eq!(
            Wiring::parse("Custom", "ABCDEFGHIJKLMNOPQRSTUVWXYA"),
            Err(ConfigError::WiringRepeat {
                name: "Custom".to_string(),
                letter: Letter::A
            })
        );
    }

    #[test]
    fn wiring_rejects_symbols() {
        assert!(matches!(
            Wiring::parse("Custom", "ABCDEFGHIJKLMNOPQRSTUVWXY1"),
            Err(ConfigError::WiringSymbol { symbol: '1', .. })
        ));
    }

    #[test]
    fn wiring_accepts_lower_case() {
        let wiring = Wiring::parse("Custom", &ROTOR_I.to_lowercase()).expect("wiring");
        assert_eq!(wiring.to_string(), ROTOR_I);
    }

    #[test]
    fn forward_at_rest() {
        let rotor = rotor_i();
        assert_eq!(rotor.forward(letter('A')), letter('E'));
        assert_eq!(rotor.backward(letter('E')), letter('A'));
    }

    #[test]
    fn forward_with_position_and_ring() {
        // Position B shifts the entry contact by one.
        let rotor = rotor_i().with_position(letter('B'));
        assert_eq!(rotor.forward(letter('A')), letter('J'));

        // Ring setting B cancels position B.
        let rotor = rotor_i()
            .with_position(letter('B'))
            .with_ring_setting(2)
            .expect("ring");
        assert_eq!(rotor.offset(), 0);
        assert_eq!(rotor.forward(letter('A')), letter('E'));
    }

    #[test]
    fn backward_inverts_forward_in_every_frame() {
        for position in Letter::all() {
            for ring in [1, 7, 26] {
                let rotor = rotor_i()
                    .with_position(position)
                    .with_ring_setting(ring)
                    .expect("ring");
                for x in Letter::all() {
                    assert_eq!(rotor.backward(rotor.forward(x)), x);
                }
            }
        }
    }

    #[test]
    fn identity_rotor_is_transparent() {
        let base = Rotor::new("identity", Wiring::identity(), []);
        for position in Letter::all() {
            for ring in MIN_RING_SETTING..=MAX_RING_SETTING {
                let rotor = base
                    .clone()
                    .with_position(position)
                    .with_ring_setting(ring)
                    .expect("ring");
                for x in Letter::all() {
                    assert_eq!(rotor.forward(x), x);
                    assert_eq!(rotor.backward(x), x);
                }
            }
        }
    }

    #[test]
    fn ring_setting_range() {
        assert!(rotor_i().with_ring_setting(1).is_ok());
        assert!(rotor_i().with_ring_setting(26).is_ok());
        assert_eq!(
            rotor_i().with_ring_setting(0),
            Err(ConfigError::RingSetting(0))
        );
        assert_eq!(
            rotor_i().with_ring_setting(27),
            Err(ConfigError::RingSetting(27))
        );
    }

    #[test]
    fn advance_wraps_and_reset_restores() {
        let mut rotor = rotor_i().with_position(Letter::Z);
        rotor.advance();
        assert_eq!(rotor.position(), Letter::A);
        rotor.reset();
        assert_eq!(rotor.position(), Letter::Z);
    }

    #[test]
    fn kind_follows_notches() {
        assert_eq!(rotor_i().kind(), RotorKind::Stepping);
        let custom = Rotor::custom(ROTOR_I, None).expect("custom");
        assert_eq!(custom.kind(), RotorKind::Notchless);
        let custom = Rotor::custom(ROTOR_I, Some("EZ")).expect("custom");
        assert!(custom.has_notch_at(letter('E')));
        assert!(custom.has_notch_at(letter('Z')));
    }

    #[test]
    fn notch_string_rules() {
        assert!(matches!(
            parse_notches("QQ"),
            Err(EnigmaError::Config(ConfigError::NotchRepeat { .. }))
        ));
        assert!(matches!(
            parse_notches(&"A".repeat(27)),
            Err(EnigmaError::Config(ConfigError::NotchLength { length: 27 }))
        ));
        assert!(matches!(parse_notches("Q!"), Err(EnigmaError::Input(_))));
        assert_eq!(parse_notches("").expect("empty").len(), 0);
    }
}
