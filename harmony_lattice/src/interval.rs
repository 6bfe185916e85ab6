// Intervals: displacement vectors between lattice points.
//
// An interval is the coordinate-wise difference of two notes, so it carries
// spelling just like a note does: an augmented unison (C -> C#) and a minor
// second (C -> Db) are different vectors even though they sound the same.
//
// Two notions of equality are in play:
// - `PartialEq` is exact coordinate equality.
// - `same_class` compares the y coordinate only. Intervals that differ only
//   by whole octaves (x) fall in the same class. Chord-shape matching in
//   harmony_markov uses this looser comparison.

use std::ops::{Add, Neg};

use serde::{Deserialize, Serialize};

use crate::error::NoteNameError;
use crate::note::Note;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub x: i32,
    pub y: i32,
}

impl Interval {
    /// C0 -> C0
    pub const UNISON: Interval = Interval::new(0, 0);
    /// C0 -> C#0
    pub const AUG1: Interval = Interval::new(-11, 7);
    /// C0 -> Db0
    pub const MIN2: Interval = Interval::new(8, -5);
    /// C0 -> Eb0
    pub const MIN3: Interval = Interval::new(5, -3);
    /// C0 -> E0
    pub const MAJ3: Interval = Interval::new(-6, 4);
    /// C0 -> F0
    pub const FOURTH: Interval = Interval::new(2, -1);
    /// C0 -> G0
    pub const FIFTH: Interval = Interval::new(-1, 1);
    /// C0 -> Bb1
    pub const MIN7: Interval = Interval::new(4, -2);
    /// C0 -> B1
    pub const MAJ7: Interval = Interval::new(-7, 5);

    /// Every named interval, in the order used by `named`.
    pub const NAMED: [(&'static str, Interval); 9] = [
        ("unison", Interval::UNISON),
        ("aug1", Interval::AUG1),
        ("min2", Interval::MIN2),
        ("min3", Interval::MIN3),
        ("maj3", Interval::MAJ3),
        ("fourth", Interval::FOURTH),
        ("fifth", Interval::FIFTH),
        ("min7", Interval::MIN7),
        ("maj7", Interval::MAJ7),
    ];

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The interval from the first named note to the second.
    pub fn between(from: &str, to: &str) -> Result<Self, NoteNameError> {
        Ok(Note::from_name(from)?.interval_to(Note::from_name(to)?))
    }

    /// Look up a named interval (`"fifth"`, `"min7"`, ...).
    pub fn named(name: &str) -> Option<Self> {
        Self::NAMED
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, interval)| interval)
    }

    /// Equal up to octave displacement: only the y coordinate is compared.
    pub fn same_class(self, other: Interval) -> bool {
        self.y == other.y
    }
}

impl Add for Interval {
    type Output = Interval;

    fn add(self, other: Interval) -> Interval {
        Interval::new(self.x + other.x, self.y + other.y)
    }
}

impl Neg for Interval {
    type Output = Interval;

    fn neg(self) -> Interval {
        Interval::new(-self.x, -self.y)
    }
}
