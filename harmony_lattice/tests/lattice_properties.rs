// Property tests for the lattice codec and symmetric modulo.
//
// Run with:
//   cargo test -p harmony_lattice --test lattice_properties

use harmony_lattice::{Interval, Note, symmod};
use proptest::prelude::*;

// ============================================================================
// Canonical modulo
// ============================================================================

proptest! {
    /// symmod stays in its centered range and agrees with a mod b.
    #[test]
    fn symmod_range_and_congruence(a in -100_000i64..100_000, b in 1i64..64) {
        let r = symmod(a, b);
        let half = b / 2;
        prop_assert!(r >= -half && r <= b - 1 - half, "symmod({a}, {b}) = {r}");
        prop_assert_eq!((a - r).rem_euclid(b), 0);
    }
}

// ============================================================================
// Note codec
// ============================================================================

proptest! {
    /// (n, a, o) -> (x, y) -> (n, a, o) is the identity.
    #[test]
    fn nao_roundtrip(n in -3i32..=3, a in -4i32..=4, o in -10i32..=10) {
        let note = Note::from_nao(n, a, o).unwrap();
        prop_assert_eq!(note.letter_offset(), n);
        prop_assert_eq!(note.accidentals(), a);
        prop_assert_eq!(note.octave(), i64::from(o));
    }

    /// Any name in the grammar survives parse -> print -> parse.
    #[test]
    fn name_roundtrip(name in "[A-G][#b]{0,3}-?[0-9]{1,2}") {
        let note = Note::from_name(&name).unwrap();
        let reparsed = Note::from_name(&note.to_string()).unwrap();
        prop_assert_eq!(reparsed, note);
    }

    /// Decoding never panics, wherever the point sits on the lattice.
    #[test]
    fn decode_total_over_i32(x in any::<i32>(), y in any::<i32>()) {
        let note = Note::new(x, y);
        prop_assert!((-3..=3).contains(&note.letter_offset()));
        let _ = note.accidentals();
        let _ = note.octave();
    }

    /// Octaves anywhere in i32 parse or fail cleanly.
    #[test]
    fn extreme_octaves_never_panic(letter in "[A-G]", o in any::<i32>()) {
        let name = format!("{letter}{o}");
        if let Ok(note) = Note::from_name(&name) {
            prop_assert_eq!(note.octave(), i64::from(o));
        }
    }

    /// Arbitrary strings never panic the parser.
    #[test]
    fn parser_never_panics(name in "\\PC{0,8}") {
        let _ = Note::from_name(&name);
    }
}

// ============================================================================
// Pitch-class equivalence
// ============================================================================

proptest! {
    #[test]
    fn equivalence_is_reflexive_and_symmetric(
        x1 in -50i32..50, y1 in -30i32..30,
        x2 in -50i32..50, y2 in -30i32..30,
    ) {
        let p = Note::new(x1, y1);
        let q = Note::new(x2, y2);
        prop_assert!(p.equivalent_note(p));
        prop_assert_eq!(p.equivalent_note(q), q.equivalent_note(p));
    }

    /// Shifting by any interval whose y is a multiple of 12 keeps the class.
    #[test]
    fn equivalence_survives_twelve_fifth_shifts(
        x in -50i32..50, y in -30i32..30,
        dx in -50i32..50, k in -3i32..=3,
    ) {
        let note = Note::new(x, y);
        let shifted = note + Interval::new(dx, 12 * k);
        prop_assert!(note.equivalent_note(shifted));
    }
}

#[test]
fn interval_between_is_difference_of_notes() {
    let d = Note::from_name("D0").unwrap();
    let a = Note::from_name("A1").unwrap();
    assert_eq!(Interval::between("D0", "A1").unwrap(), a - d);
    assert_eq!(d + Interval::FIFTH, a);
}
