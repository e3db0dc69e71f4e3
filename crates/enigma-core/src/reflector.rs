//! # Reflector Module
//!
//! The reflector turns the signal back through the rotor stack. It never
//! rotates and has no ring offset; its wiring must be a fixed-point-free
//! involution, which is what makes the whole machine self-reciprocal.

use crate::ConfigError;
use crate::Letter;
use crate::rotor::Wiring;

/// A non-rotating, self-inverse wiring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    name: String,
    wiring: Wiring,
}

impl Reflector {
    /// Create a reflector, checking that `wiring` pairs every letter with a
    /// different letter.
    ///
    /// Fails with `ReflectorFixedPoint` or `ReflectorNotInvolution`.
    pub fn new(name: impl Into<String>, wiring: Wiring) -> Result<Self, ConfigError> {
        let name = name.into();

        for letter in Letter::all() {
            let partner = wiring.forward(letter);
            if partner == letter {
                return Err(ConfigError::ReflectorFixedPoint { name, letter });
            }
            if wiring.forward(partner) != letter {
                return Err(ConfigError::ReflectorNotInvolution {
                    name,
                    from: letter,
                    to: partner,
                });
            }
        }

        Ok(Self { name, wiring })
    }

    /// Create a custom reflector from a 26-letter mapping.
    pub fn custom(mapping: &str) -> Result<Self, ConfigError> {
        Self::new("Custom", Wiring::parse("Custom", mapping)?)
    }

    /// Reflector name, e.g. `"B"` or `"Custom"`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The reflector wiring.
    #[must_use]
    pub fn wiring(&self) -> &Wiring {
        &self.wiring
    }

    /// Send `letter` back through its paired contact.
    #[must_use]
    pub fn reflect(&self, letter: Letter) -> Letter {
        self.wiring.forward(letter)
    }
}
