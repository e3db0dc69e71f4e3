//! # Plugboard Module
//!
//! Front-end substitution layer: disjoint letter-pair swaps applied before
//! and after the rotor stack.
//!
//! - A `PlugLead` swaps its two letters and passes everything else through
//! - A `Plugboard` holds up to `capacity` disjoint leads
//! - `Plugboard::encode` is an involution by construction

use crate::alphabet::{parse_pair, parse_single};
use crate::primitives::{ALPHABET_LEN, DEFAULT_PLUG_LEADS, MAX_PLUG_LEADS};
use crate::{ConfigError, EnigmaError, InputError, Letter};
use std::fmt;

// =============================================================================
// PLUG LEAD
// =============================================================================

/// A cable joining two distinct letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlugLead {
    first: Letter,
    second: Letter,
}

impl PlugLead {
    /// Parse a lead from two letters, e.g. `"AE"` or `"ae"`.
    pub fn new(letters: &str) -> Result<Self, InputError> {
        let (first, second) = parse_pair(letters, "PlugLead")?;
        Ok(Self { first, second })
    }

    /// Build a lead from two letters.
    ///
    /// Returns `InputError::RepeatedLetter` if both letters are the same.
    pub fn from_letters(first: Letter, second: Letter) -> Result<Self, InputError> {
        if first == second {
            return Err(InputError::RepeatedLetter {
                context: "PlugLead",
                input: format!("{}{}", first, second),
            });
        }
        Ok(Self { first, second })
    }

    /// The two letters joined by this lead.
    #[must_use]
    pub const fn letters(&self) -> (Letter, Letter) {
        (self.first, self.second)
    }

    /// Swap `letter` if this lead owns it, otherwise pass it through.
    #[must_use]
    pub fn encode(&self, letter: Letter) -> Letter {
        if letter == self.first {
            self.second
        } else if letter == self.second {
            self.first
        } else {
            letter
        }
    }
}

impl fmt::Display for PlugLead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

// =============================================================================
// PLUGBOARD
// =============================================================================

/// A capacity-bounded set of disjoint plug leads.
///
/// Leads are added during configuration; the board is never modified by
/// encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    /// Leads in insertion order.
    leads: Vec<PlugLead>,
    /// Partner of each wired letter, indexed by generic-alphabet index.
    partners: [Option<Letter>; ALPHABET_LEN],
    /// Maximum number of leads.
    capacity: usize,
}

impl Default for Plugboard {
    fn default() -> Self {
        Self {
            leads: Vec::new(),
            partners: [None; ALPHABET_LEN],
            capacity: DEFAULT_PLUG_LEADS,
        }
    }
}

impl Plugboard {
    /// Create an empty board with the default capacity of 10 leads.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty board holding at most `capacity` leads.
    ///
    /// Returns `ConfigError::PlugboardCapacityLimit` above 13.
    pub fn with_capacity(capacity: usize) -> Result<Self, ConfigError> {
        if capacity > MAX_PLUG_LEADS {
            return Err(ConfigError::PlugboardCapacityLimit {
                requested: capacity,
            });
        }
        Ok(Self {
            capacity,
            ..Self::default()
        })
    }

    /// Build a board from a whitespace-separated lead string, e.g. `"AB CD"`.
    ///
    /// An empty or blank string yields an empty board.
    pub fn from_spec(spec: &str, capacity: usize) -> Result<Self, EnigmaError> {
        let mut board = Self::with_capacity(capacity)?;
        for token in spec.split_whitespace() {
            board.add(PlugLead::new(token)?)?;
        }
        Ok(board)
    }

    /// Add a lead.
    ///
    /// Fails without changing the board if it is full
    /// (`PlugboardCapacity`) or if either letter is already wired
    /// (`PlugboardConflict`, naming that letter).
    pub fn add(&mut self, lead: PlugLead) -> Result<(), ConfigError> {
        if self.leads.len() >= self.capacity {
            return Err(ConfigError::PlugboardCapacity {
                lead: lead.to_string(),
                capacity: self.capacity,
            });
        }

        let (first, second) = lead.letters();
        for letter in [first, second] {
            if self.partners[letter.index()].is_some() {
                return Err(ConfigError::PlugboardConflict { letter });
            }
        }

        self.partners[first.index()] = Some(second);
        self.partners[second.index()] = Some(first);
        self.leads.push(lead);
        Ok(())
    }

    /// Swap `letter` through its lead, or pass it through if unwired.
    #[must_use]
    pub fn encode(&self, letter: Letter) -> Letter {
        self.partners[letter.index()].unwrap_or(letter)
    }

    /// Encode a single character, e.g. `'a'` → `'B'` with lead `"AB"`.
    pub fn encode_char(&self, c: char) -> Result<char, InputError> {
        let letter = parse_single(&c.to_string(), "Plugboard")?;
        Ok(self.encode(letter).to_char())
    }

    /// Leads in insertion order.
    #[must_use]
    pub fn leads(&self) -> &[PlugLead] {
        &self.leads
    }

    /// Number of leads currently plugged in.
    #[must_use]
    pub fn len(&self) -> usize {
        self.leads.len()
    }

    /// Check if no leads are plugged in.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    /// Maximum number of leads.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

impl fmt::Display for Plugboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let leads: Vec<String> = self.leads.iter().map(ToString::to_string).collect();
        write!(f, "{}", leads.join(" "))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::try_from(c).expect("letter")
    }

    #[test]
    fn lead_swaps_both_ways() {
        let lead = PlugLead::new("AG").expect("lead");
        assert_eq!(lead.encode(letter('A')), letter('G'));
        assert_eq!(lead.encode(letter('G')), letter('A'));
        assert_eq!(lead.encode(letter('D')), letter('D'));
    }

    #[test]
    fn lead_is_case_insensitive() {
        let lead = PlugLead::new("dh").expect("lead");
        assert_eq!(lead.encode(letter('d')), letter('H'));
        assert_eq!(lead.to_string(), "DH");
    }

    #[test]
    fn lead_rejects_bad_input() {
        assert!(PlugLead::new("AA").is_err());
        assert!(PlugLead::new("A").is_err());
        assert!(PlugLead::new("A-").is_err());
        assert!(PlugLead::from_letters(letter('C'), letter('C')).is_err());
    }

    #[test]
    fn board_encodes_wired_and_unwired() {
        let mut board = Plugboard::new();
        board.add(PlugLead::new("SZ").expect("lead")).expect("add");
        board.add(PlugLead::new("GT").expect("lead")).expect("add");
        board.add(PlugLead::new("DV").expect("lead")).expect("add");
        board.add(PlugLead::new("KU").expect("lead")).expect("add");

        assert_eq!(board.encode(letter('K')), letter('U'));
        assert_eq!(board.encode(letter('A')), letter('A'));
        assert_eq!(board.encode_char('z'), Ok('S'));
        assert_eq!(board.encode_char('a'), Ok('A'));
    }

    #[test]
    fn board_is_involution() {
        let board = Plugboard::from_spec("AB CD EF QZ", 10).expect("board");
        for x in Letter::all() {
            assert_eq!(board.encode(board.encode(x)), x);
        }
    }

    #[test]
    fn conflict_names_letter_and_leaves_board_unchanged() {
        let mut board = Plugboard::from_spec("AB", 10).expect("board");
        let before = board.clone();

        let err = board.add(PlugLead::new("CB").expect("lead")).expect_err("conflict");
        assert_eq!(err, ConfigError::PlugboardConflict { letter: letter('B') });
        assert_eq!(board, before);
        assert_eq!(board.encode(letter('C')), letter('C'));
    }

    #[test]
    fn capacity_is_enforced() {
        let mut board = Plugboard::with_capacity(2).expect("board");
        board.add(PlugLead::new("AB").expect("lead")).expect("first");
        board.add(PlugLead::new("CD").expect("lead")).expect("second");

        let err = board.add(PlugLead::new("EF").expect("lead")).expect_err("full");
        assert!(matches!(err, ConfigError::PlugboardCapacity { capacity: 2, .. }));
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn capacity_limit_is_thirteen() {
        assert!(Plugboard::with_capacity(13).is_ok());
        assert_eq!(
            Plugboard::with_capacity(14),
            Err(ConfigError::PlugboardCapacityLimit { requested: 14 })
        );
    }

    #[test]
    fn zero_capacity_rejects_first_lead() {
        let mut board = Plugboard::with_capacity(0).expect("board");
        assert!(board.add(PlugLead::new("AB").expect("lead")).is_err());
        assert!(board.is_empty());
    }

    #[test]
    fn from_spec_handles_blank_and_bad_tokens() {
        assert!(Plugboard::from_spec("  ", 10).expect("board").is_empty());
        assert!(matches!(
            Plugboard::from_spec("AB C", 10),
            Err(EnigmaError::Input(InputError::LetterCount { .. }))
        ));
        assert!(matches!(
            Plugboard::from_spec("AB BC", 10),
            Err(EnigmaError::Config(ConfigError::PlugboardConflict { .. }))
        ));
        assert_eq!(
            Plugboard::from_spec("hl mo", 10).expect("board").to_string(),
            "HL MO"
        );
    }
}
