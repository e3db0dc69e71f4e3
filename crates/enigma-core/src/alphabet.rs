//! # Alphabet and Position Math
//!
//! Wrap-around arithmetic over the 26 contacts, and the explicit input
//! validators every public entrypoint runs before touching machine state.
//!
//! - `wrap` folds an offset contact index back onto the alphabet
//! - `parse_letters` / `parse_single` / `parse_pair` turn user text into
//!   `Letter`s or a typed `InputError`

use crate::primitives::{ALPHABET_LEN, MAX_POSITION};
use crate::{InputError, Letter};

// =============================================================================
// POSITION MATH
// =============================================================================

/// Fold a shifted contact index back into `0..=25`.
///
/// Follows the asymmetric wrap rule, expressed against `MAX_POSITION`:
/// - `0 <= n <= 25` is returned unchanged
/// - `n < 0` becomes `(n mod 25) + 1`
/// - `n > 25` becomes `(n mod 25) - 1`
///
/// Over the shifts a rotor can produce (`-25..=50`) this agrees with
/// `n mod 26`, except at `n = 50` where the rule lands on `-1`. That single
/// value is resolved modulo 26 so a rotor stays a bijection.
#[must_use]
pub fn wrap(n: i32) -> usize {
    let wrapped = if (0..=MAX_POSITION).contains(&n) {
        n
    } else if n < 0 {
        n.rem_euclid(MAX_POSITION) + 1
    } else {
        n.rem_euclid(MAX_POSITION) - 1
    };

    if (0..=MAX_POSITION).contains(&wrapped) {
        wrapped as usize
    } else {
        n.rem_euclid(ALPHABET_LEN as i32) as usize
    }
}

/// Shift a letter by `offset` contacts, wrapping around the alphabet.
#[must_use]
pub fn shift(letter: Letter, offset: i32) -> Letter {
    Letter(wrap(letter.index() as i32 + offset) as u8)
}

// =============================================================================
// INPUT VALIDATION
// =============================================================================

/// Parse a string made only of letters (case-insensitive).
///
/// Returns `InputError::NonAlphabetic` naming the whole input if any
/// character is not in `[a-zA-Z]`.
pub fn parse_letters(input: &str, context: &'static str) -> Result<Vec<Letter>, InputError> {
    input
        .chars()
        .map(|c| {
            Letter::try_from(c).map_err(|_| InputError::NonAlphabetic {
                context,
                input: input.to_string(),
            })
        })
        .collect()
}

/// Parse exactly one letter.
pub fn parse_single(input: &str, context: &'static str) -> Result<Letter, InputError> {
    match parse_letters(input, context)?.as_slice() {
        [letter] => Ok(*letter),
        letters => Err(InputError::LetterCount {
            context,
            input: input.to_string(),
            expected: 1,
            found: letters.len(),
        }),
    }
}

/// Parse exactly two distinct letters.
pub fn parse_pair(input: &str, context: &'static str) -> Result<(Letter, Letter), InputError> {
    match parse_letters(input, context)?.as_slice() {
        [a, b] if a == b => Err(InputError::RepeatedLetter {
            context,
            input: input.to_string(),
        }),
        [a, b] => Ok((*a, *b)),
        letters => Err(InputError::LetterCount {
            context,
            input: input.to_string(),
            expected: 2,
            found: letters.len(),
        }),
    }
}

/// Render letters as an upper-case string.
#[must_use]
pub fn render(letters: &[Letter]) -> String {
    letters.iter().map(|l| l.to_char()).collect()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_in_range_is_identity() {
        for n in 0..=25 {
            assert_eq!(wrap(n), n as usize);
        }
    }

    #[test]
    fn wrap_boundary_values() {
        assert_eq!(wrap(-1), 25);
        assert_eq!(wrap(-25), 1);
        assert_eq!(wrap(26), 0);
        assert_eq!(wrap(28), 2);
        assert_eq!(wrap(49), 23);
    }

    #[test]
    fn wrap_resolves_overflow_modulo_alphabet() {
        // The asymmetric rule alone yields -1 here.
        assert_eq!(wrap(50), 24);
    }

    #[test]
    fn wrap_matches_modulo_over_rotor_domain() {
        for n in -25..=50 {
            assert_eq!(wrap(n), n.rem_euclid(26) as usize, "n = {}", n);
        }
    }

    #[test]
    fn shift_wraps_both_ways() {
        assert_eq!(shift(Letter::A, -1), Letter::Z);
        assert_eq!(shift(Letter::Z, 1), Letter::A);
        assert_eq!(shift(Letter::Z, 25).to_char(), 'Y');
    }

    #[test]
    fn parse_letters_normalizes_case() {
        let letters = parse_letters("aBc", "Message").expect("letters");
        assert_eq!(render(&letters), "ABC");
    }

    #[test]
    fn parse_letters_rejects_symbols() {
        let err = parse_letters("AB C", "Message").expect_err("space");
        assert_eq!(
            err,
            InputError::NonAlphabetic {
                context: "Message",
                input: "AB C".to_string()
            }
        );
    }

    #[test]
    fn parse_single_counts_letters() {
        assert_eq!(parse_single("q", "Element to encode"), Ok(Letter(16)));
        assert!(matches!(
            parse_single("QQ", "Element to encode"),
            Err(InputError::LetterCount {
                expected: 1,
                found: 2,
                ..
            })
        ));
        assert!(matches!(
            parse_single("", "Element to encode"),
            Err(InputError::LetterCount { found: 0, .. })
        ));
    }

    #[test]
    fn parse_pair_rules() {
        assert_eq!(parse_pair("ae", "PlugLead"), Ok((Letter(0), Letter(4))));
        assert!(matches!(
            parse_pair("AA", "PlugLead"),
            Err(InputError::RepeatedLetter { .. })
        ));
        assert!(matches!(
            parse_pair("ABC", "PlugLead"),
            Err(InputError::LetterCount { expected: 2, .. })
        ));
        assert!(matches!(
            parse_pair("A1", "PlugLead"),
            Err(InputError::NonAlphabetic { .. })
        ));
    }
}
