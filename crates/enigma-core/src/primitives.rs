//! # Machine Primitives
//!
//! Hardcoded constants of the simulated hardware.
//!
//! These values are compiled into the binary and are immutable at runtime.
//! They describe the physical machine, not a user preference.

/// The generic alphabet, in contact order.
///
/// Every offset computation uses this ordering as its coordinate space.
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of contacts on a rotor, reflector or plugboard.
pub const ALPHABET_LEN: usize = 26;

/// Highest contact index (`ALPHABET_LEN - 1`).
///
/// The position wrap rule is expressed against this bound.
pub const MAX_POSITION: i32 = 25;

/// Minimum number of rotors a machine needs before it can encode.
pub const MIN_ROTORS: usize = 3;

/// Number of rightmost rotors whose notch can engage a pawl.
///
/// Rotors further left only turn as the recipient of a double step.
pub const ENGAGED_PAWLS: usize = 2;

/// Default number of leads a plugboard accepts.
pub const DEFAULT_PLUG_LEADS: usize = 10;

/// Hard limit on plugboard capacity (13 leads pair up all 26 letters).
pub const MAX_PLUG_LEADS: usize = 13;

/// Maximum number of notches on a custom rotor.
pub const MAX_NOTCHES: usize = 26;

/// Lowest accepted ring setting (1-based, as printed on the ring).
pub const MIN_RING_SETTING: i64 = 1;

/// Highest accepted ring setting.
pub const MAX_RING_SETTING: i64 = 26;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_is_ordered_and_distinct() {
        assert_eq!(ALPHABET.len(), ALPHABET_LEN);
        assert!(ALPHABET.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn max_position_matches_alphabet() {
        assert_eq!(MAX_POSITION as usize, ALPHABET_LEN - 1);
        assert_eq!(MAX_PLUG_LEADS * 2, ALPHABET_LEN);
    }
}
