// Lattice model of spelled pitch.
//
// Every pitch is a point (x, y) on an integer lattice. The y axis walks the
// line of fifths (D = 0, A = 1, E = 2, ... and F = -3, Bb = -4, ...), so a
// sharp adds 7 and a flat subtracts 7. The x axis absorbs the octave. Because
// letter and accidental are both recoverable from y, the lattice keeps C# and
// Db apart while still letting intervals be added and subtracted as plain
// integer vectors.
//
// Architecture:
// - lib.rs: canonical (symmetric) modulo, shared by every other module
// - note.rs: `Note`, the (n, a, o) <-> (x, y) codec, note-name parsing
// - interval.rs: `Interval`, named interval constants, interval classes
// - error.rs: `NoteNameError` for the name parser
//
// Used by harmony_markov for chord templates and root motion.

pub mod error;
pub mod interval;
pub mod note;

pub use error::NoteNameError;
pub use interval::Interval;
pub use note::Note;

/// Representative of `a` modulo `b`, centered on zero.
///
/// The result lies in `[-(b / 2), b - 1 - b / 2]`: `-3..=3` for `b = 7`,
/// `-5..=5` for `b = 11`, `-6..=5` for `b = 12`.
///
/// Works in `i64` so callers can scale `i32` coordinates (`11 * y`) without
/// overflow. Panics if `b <= 0`.
pub fn symmod(a: i64, b: i64) -> i64 {
    assert!(b > 0, "symmod: modulus must be positive, got {b}");
    let half = b / 2;
    (a.rem_euclid(b) + half) % b - half
}

/// Nearest-integer quotient of `a / b` for odd `b`.
///
/// With an odd divisor the quotient never lands on a half, so this is exact
/// integer rounding with no float round-trip.
pub fn round_div(a: i64, b: i64) -> i64 {
    debug_assert!(b % 2 != 0, "round_div: divisor must be odd, got {b}");
    (a - symmod(a, b)) / b
}
