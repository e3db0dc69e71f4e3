//! # Machine Module
//!
//! The assembled machine: rotor stack, plugboard and reflector, and the
//! per-key-press cycle
//!
//! ```text
//! Idle → Stepping → PlugIn → RotorsForward → Reflect → RotorsBackward → PlugOut → Idle
//! ```
//!
//! The only state carried from one key press to the next is the rotor
//! positions. Encoding takes `&mut self`; a machine has a single writer.

use crate::alphabet::{parse_letters, parse_single, render};
use crate::plugboard::Plugboard;
use crate::primitives::MIN_ROTORS;
use crate::reflector::Reflector;
use crate::rotor::{Direction, Rotor};
use crate::stepping::{StepOutcome, step_rotors};
use crate::trace::{NoTrace, TraceEvent, TraceSink};
use crate::{ConfigError, EnigmaError, InputError, Letter};
use std::fmt;

/// An Enigma machine ready to encode.
///
/// Rotors are stored left to right; the rightmost rotor is the fast one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnigmaMachine {
    rotors: Vec<Rotor>,
    reflector: Reflector,
    plugboard: Plugboard,
}

impl EnigmaMachine {
    /// Assemble a machine from its parts.
    ///
    /// Returns `ConfigError::RotorCount` with fewer than three rotors.
    pub fn new(
        rotors: Vec<Rotor>,
        reflector: Reflector,
        plugboard: Plugboard,
    ) -> Result<Self, ConfigError> {
        if rotors.len() < MIN_ROTORS {
            return Err(ConfigError::RotorCount {
                count: rotors.len(),
            });
        }
        Ok(Self {
            rotors,
            reflector,
            plugboard,
        })
    }

    // =========================================================================
    // ENCODING
    // =========================================================================

    /// Encode a message.
    ///
    /// The whole message is validated before any rotor moves, so a rejected
    /// message leaves the machine exactly as it was.
    pub fn encode(&mut self, message: &str) -> Result<String, InputError> {
        self.encode_traced(message, &mut NoTrace)
    }

    /// Encode a message, reporting every stage to `sink`.
    pub fn encode_traced(
        &mut self,
        message: &str,
        sink: &mut impl TraceSink,
    ) -> Result<String, InputError> {
        let letters = parse_letters(message, "Message")?;
        let encoded: Vec<Letter> = letters
            .into_iter()
            .map(|letter| self.press_traced(letter, sink))
            .collect();
        Ok(render(&encoded))
    }

    /// Encode exactly one letter given as text, e.g. `"a"`.
    pub fn encode_letter(&mut self, input: &str) -> Result<char, InputError> {
        let letter = parse_single(input, "Element to encode")?;
        Ok(self.press(letter).to_char())
    }

    /// Press one key.
    pub fn press(&mut self, letter: Letter) -> Letter {
        self.press_traced(letter, &mut NoTrace)
    }

    /// Press one key, reporting every stage to `sink`.
    pub fn press_traced(&mut self, letter: Letter, sink: &mut impl TraceSink) -> Letter {
        let tracing = sink.enabled();

        if tracing {
            sink.record(TraceEvent::StepStarted {
                positions: self.positions(),
            });
        }
        let outcome = self.step_rotors();
        if tracing {
            sink.record(TraceEvent::Stepped {
                positions: self.positions(),
                advanced: outcome.advanced,
            });
        }

        let output = self.signal_path(letter, sink, tracing);

        if tracing {
            sink.record(TraceEvent::Encoded {
                input: letter,
                output,
            });
        }
        output
    }

    /// Advance the rotor stack for one key press.
    pub fn step_rotors(&mut self) -> StepOutcome {
        step_rotors(&mut self.rotors)
    }

    /// Plugboard, rotors right to left, reflector, rotors left to right,
    /// plugboard. Reads rotor positions but does not move them.
    fn signal_path(&self, letter: Letter, sink: &mut impl TraceSink, tracing: bool) -> Letter {
        let plugged = self.plugboard.encode(letter);
        if tracing {
            sink.record(TraceEvent::Plugboard {
                input: letter,
                output: plugged,
            });
        }

        let mut signal = plugged;
        for (slot, rotor) in self.rotors.iter().enumerate().rev() {
            signal = pass(rotor, slot, signal, Direction::Forward, sink, tracing);
        }

        let reflected = self.reflector.reflect(signal);
        if tracing {
            sink.record(TraceEvent::Reflector {
                name: self.reflector.name().to_string(),
                input: signal,
                output: reflected,
            });
        }

        signal = reflected;
        for (slot, rotor) in self.rotors.iter().enumerate() {
            signal = pass(rotor, slot, signal, Direction::Backward, sink, tracing);
        }

        let output = self.plugboard.encode(signal);
        if tracing {
            sink.record(TraceEvent::Plugboard {
                input: signal,
                output,
            });
        }
        output
    }

    // =========================================================================
    // STATE
    // =========================================================================

    /// Current rotor positions, left to right.
    #[must_use]
    pub fn positions(&self) -> Vec<Letter> {
        self.rotors.iter().map(Rotor::position).collect()
    }

    /// Current rotor positions as text, e.g. `"ADU"`.
    #[must_use]
    pub fn window(&self) -> String {
        render(&self.positions())
    }

    /// Move every rotor to a new position, one letter per rotor, left to
    /// right (e.g. `"ADU"` for three rotors).
    ///
    /// Nothing moves if the input is rejected.
    pub fn set_positions(&mut self, positions: &str) -> Result<(), EnigmaError> {
        let letters = parse_letters(positions, "Rotor positions")?;
        if letters.len() != self.rotors.len() {
            return Err(InputError::LetterCount {
                context: "Rotor positions",
                input: positions.to_string(),
                expected: self.rotors.len(),
                found: letters.len(),
            }
            .into());
        }
        for (rotor, letter) in self.rotors.iter_mut().zip(letters) {
            rotor.set_position(letter);
        }
        Ok(())
    }

    /// Return every rotor to its configured initial position.
    pub fn reset(&mut self) {
        self.rotors.iter_mut().for_each(Rotor::reset);
    }

    /// Rotor stack, left to right.
    #[must_use]
    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    /// The reflector.
    #[must_use]
    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    /// The plugboard.
    #[must_use]
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }
}

/// One rotor pass, traced if requested.
fn pass(
    rotor: &Rotor,
    slot: usize,
    input: Letter,
    direction: Direction,
    sink: &mut impl TraceSink,
    tracing: bool,
) -> Letter {
    let output = rotor.encode(input, direction);
    if tracing {
        sink.record(TraceEvent::Rotor {
            slot,
            name: rotor.name().to_string(),
            direction,
            position: rotor.position(),
            offset: rotor.offset(),
            input,
            output,
        });
    }
    output
}

impl fmt::Display for EnigmaMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.rotors.iter().map(Rotor::name).collect();
        let rings: Vec<String> = self
            .rotors
            .iter()
            .map(|r| r.ring_setting().to_string())
            .collect();
        write!(
            f,
            "rotors {} | rings {} | window {} | reflector {} | plugs [{}]",
            names.join(" "),
            rings.join(" "),
            self.window(),
            self.reflector.name(),
            self.plugboard
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
