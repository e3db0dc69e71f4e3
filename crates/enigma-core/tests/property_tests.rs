//! # Property-Based Tests
//!
//! Reciprocity, determinism and stepping invariants over random settings.

use enigma_core::{
    EnigmaMachine, Letter, MachineSettings, PlugboardSettings, ReflectorModel, ReflectorSettings,
    RotorModel, RotorSettings,
};
use proptest::collection::vec;
use proptest::prelude::*;
use proptest::sample::{select, subsequence};

// =============================================================================
// STRATEGIES
// =============================================================================

fn letter_string(len: impl Into<proptest::collection::SizeRange>) -> impl Strategy<Value = String> {
    vec(0usize..26, len).prop_map(|indices| {
        indices
            .into_iter()
            .filter_map(Letter::from_index)
            .map(Letter::to_char)
            .collect()
    })
}

/// Three distinct catalog rotors with random rings and positions.
fn rotor_stack() -> impl Strategy<Value = Vec<RotorSettings>> {
    (
        subsequence(RotorModel::ALL.to_vec(), 3).prop_shuffle(),
        vec(1i64..=26, 3),
        letter_string(3),
    )
        .prop_map(|(models, rings, positions)| {
            models
                .into_iter()
                .zip(rings)
                .zip(positions.chars())
                .zip(1..)
                .map(|(((model, ring), position), order)| {
                    RotorSettings::catalog(model.name(), ring, position.to_string(), order)
                })
                .collect()
        })
}

/// Up to ten disjoint plug leads.
fn plug_leads() -> impl Strategy<Value = String> {
    (Just((0usize..26).collect::<Vec<_>>()).prop_shuffle(), 0usize..=10).prop_map(
        |(shuffled, count)| {
            shuffled
                .chunks(2)
                .take(count)
                .map(|pair| {
                    pair.iter()
                        .filter_map(|&i| Letter::from_index(i))
                        .map(Letter::to_char)
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join(" ")
        },
    )
}

fn machine_settings() -> impl Strategy<Value = MachineSettings> {
    (
        rotor_stack(),
        select(vec![ReflectorModel::A, ReflectorModel::B, ReflectorModel::C]),
        plug_leads(),
    )
        .prop_map(|(rotors, reflector, leads)| MachineSettings {
            rotors,
            reflector: ReflectorSettings::Named(reflector.name().to_string()),
            plugboard: PlugboardSettings {
                leads,
                capacity: 10,
            },
        })
}

fn build(settings: &MachineSettings) -> EnigmaMachine {
    settings.build().expect("generated settings are valid")
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Encoding the ciphertext from the same start recovers the plaintext.
    #[test]
    fn reciprocity(settings in machine_settings(), message in letter_string(1..120)) {
        let mut machine = build(&settings);
        let cipher = machine.encode(&message).expect("encode");
        machine.reset();
        prop_assert_eq!(machine.encode(&cipher).expect("decode"), message);
    }

    /// No letter encrypts to itself.
    #[test]
    fn no_fixed_points(settings in machine_settings(), message in letter_string(1..120)) {
        let mut machine = build(&settings);
        let cipher = machine.encode(&message).expect("encode");
        for (p, c) in message.chars().zip(cipher.chars()) {
            prop_assert_ne!(p, c);
        }
    }

    /// Identical settings and input give identical output and positions.
    #[test]
    fn determinism(settings in machine_settings(), message in letter_string(0..80)) {
        let mut first = build(&settings);
        let mut second = build(&settings);
        prop_assert_eq!(first.encode(&message), second.encode(&message));
        prop_assert_eq!(first.positions(), second.positions());
    }

    /// Output length equals input length; input case does not matter.
    #[test]
    fn case_insensitive(settings in machine_settings(), message in letter_string(0..80)) {
        let mut upper = build(&settings);
        let mut lower = build(&settings);
        let a = upper.encode(&message).expect("encode");
        let b = lower.encode(&message.to_lowercase()).expect("encode");
        prop_assert_eq!(a.len(), message.len());
        prop_assert_eq!(a, b);
    }

    /// The rightmost rotor advances exactly once per key press.
    #[test]
    fn rightmost_steps_each_press(settings in machine_settings(), presses in 0usize..60) {
        let mut machine = build(&settings);
        let start = machine.positions()[2].index();
        machine.encode(&"A".repeat(presses)).expect("encode");
        prop_assert_eq!(machine.positions()[2].index(), (start + presses) % 26);
    }

    /// The plugboard is an involution for any disjoint lead set.
    #[test]
    fn plugboard_involution(settings in machine_settings()) {
        let machine = build(&settings);
        let board = machine.plugboard();
        for l in Letter::all() {
            prop_assert_eq!(board.encode(board.encode(l)), l);
        }
    }

    /// Each rotor moves at most one position per key press.
    #[test]
    fn rotors_move_at_most_once(settings in machine_settings(), presses in 1usize..60) {
        let mut machine = build(&settings);
        for _ in 0..presses {
            let before = machine.positions();
            let outcome = machine.step_rotors();
            prop_assert_eq!(&outcome.snapshot, &before);
            for ((b, a), moved) in before.iter().zip(machine.positions()).zip(&outcome.advanced) {
                let expected = if *moved { b.next() } else { *b };
                prop_assert_eq!(a, expected);
            }
        }
    }
}
