//! # Stepping Module
//!
//! The ratchet-and-pawl rule, including the double-stepping anomaly.
//!
//! Works on the rotor stack as an indexed slice (0 = leftmost). Every notch
//! comparison uses a snapshot of the positions taken before anything moves,
//! and each rotor advances at most once per key press.
//!
//! ## Rule
//!
//! Counting ordinals from the right (1 = rightmost), for ordinals 1 and 2:
//! if the rotor's pre-step letter is one of its notches, and (for ordinal 2)
//! the rotor to its right is not notch-less, the rotor steps and so does the
//! rotor to its left. Finally the rightmost rotor steps if nothing moved it.

use crate::Letter;
use crate::primitives::ENGAGED_PAWLS;
use crate::rotor::{Rotor, RotorKind};

/// What happened to the stack during one key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    /// Positions before stepping, left to right.
    pub snapshot: Vec<Letter>,
    /// Which rotors advanced, left to right.
    pub advanced: Vec<bool>,
}

impl StepOutcome {
    /// Number of rotors that advanced.
    #[must_use]
    pub fn advanced_count(&self) -> usize {
        self.advanced.iter().filter(|&&a| a).count()
    }
}

/// Advance the rotor stack for one key press.
///
/// An empty stack is left untouched.
pub fn step_rotors(rotors: &mut [Rotor]) -> StepOutcome {
    let snapshot: Vec<Letter> = rotors.iter().map(Rotor::position).collect();
    let mut advanced = vec![false; rotors.len()];

    let Some(rightmost) = rotors.len().checked_sub(1) else {
        return StepOutcome { snapshot, advanced };
    };

    for ordinal in 1..=ENGAGED_PAWLS.min(rotors.len()) {
        let slot = rotors.len() - ordinal;

        if !rotors[slot].has_notch_at(snapshot[slot]) {
            continue;
        }
        if ordinal > 1 && rotors[slot + 1].kind() == RotorKind::Notchless {
            continue;
        }

        if !advanced[slot] {
            rotors[slot].advance();
            advanced[slot] = true;
        }

        // Double step: the engaged pawl also turns the rotor to the left.
        if let Some(left) = slot.checked_sub(1) {
            if !advanced[left] {
                rotors[left].advance();
                advanced[left] = true;
            }
        }
    }

    if !advanced[rightmost] {
        rotors[rightmost].advance();
        advanced[rightmost] = true;
    }

    StepOutcome { snapshot, advanced }
}

// =============================================================================
// TESTS
// =============================================================================
