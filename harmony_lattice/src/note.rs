// Notes as lattice points, and the name codec.
//
// A note is stored only as its lattice coordinates (x, y). The familiar
// description (letter, accidental count, octave) is the triple (n, a, o):
//
//   n: letter offset from D, -3..=3
//      (A=-3, B=-2, C=-1, D=0, E=1, F=2, G=3)
//   a: accidentals, sharps positive, flats negative
//   o: octave number
//
// Encoding:  x = symmod(-3n, 11) - 11a + o,  y = symmod(2n, 7) + 7a
// Decoding:  n = symmod(11y, 7),  a = round(y / 7),  o = round(11y / 7) + x
//
// The two are exact inverses for every n in -3..=3 and any a, o whose
// coordinates fit in i32, so a note name survives a trip through the lattice
// with its spelling intact. Both directions compute in i64; the octave is
// reported as i64 because x plus the y term can leave the i32 range.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NoteNameError;
use crate::interval::Interval;
use crate::{round_div, symmod};

/// A spelled pitch: a point on the (x, y) lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    pub x: i32,
    pub y: i32,
}

impl Note {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Build a note from letter offset, accidental count and octave.
    ///
    /// Returns `None` when the resulting coordinates do not fit in `i32`.
    pub fn from_nao(n: i32, a: i32, o: i32) -> Option<Self> {
        let (n, a, o) = (i64::from(n), i64::from(a), i64::from(o));
        let x = symmod(-3 * n, 11) - 11 * a + o;
        let y = symmod(2 * n, 7) + 7 * a;
        Some(Self {
            x: i32::try_from(x).ok()?,
            y: i32::try_from(y).ok()?,
        })
    }

    /// Parse a name such as `D0`, `F#1`, `Bb-1` or `E##2`.
    ///
    /// The letter is case-insensitive. Between the letter and the octave only
    /// `#` and `b` are accepted. An octave or accidental run too large for the
    /// lattice coordinates is an `InvalidOctave`.
    pub fn from_name(name: &str) -> Result<Self, NoteNameError> {
        let mut chars = name.char_indices();
        let (_, letter) = chars
            .next()
            .ok_or_else(|| NoteNameError::InvalidNoteName(name.to_string()))?;
        let n = letter_offset(letter)
            .ok_or_else(|| NoteNameError::InvalidNoteName(name.to_string()))?;

        let mut accidentals: i32 = 0;
        let mut octave_start = name.len();
        for (idx, c) in chars {
            match c {
                '#' => accidentals = accidentals.saturating_add(1),
                'b' => accidentals = accidentals.saturating_sub(1),
                '-' | '0'..='9' => {
                    octave_start = idx;
                    break;
                }
                found => {
                    return Err(NoteNameError::InvalidAccidental {
                        name: name.to_string(),
                        found,
                    });
                }
            }
        }

        let octave: i32 = name[octave_start..]
            .parse()
            .map_err(|_| NoteNameError::InvalidOctave(name.to_string()))?;

        Self::from_nao(n, accidentals, octave)
            .ok_or_else(|| NoteNameError::InvalidOctave(name.to_string()))
    }

    /// Letter offset from D, in `-3..=3`.
    pub fn letter_offset(self) -> i32 {
        symmod(11 * i64::from(self.y), 7) as i32
    }

    /// Signed accidental count: sharps positive, flats negative.
    pub fn accidentals(self) -> i32 {
        // |y / 7| always fits.
        round_div(i64::from(self.y), 7) as i32
    }

    /// Octave number. Wider than the coordinates: a note near the edge of
    /// the `i32` lattice can sit in an octave beyond `i32::MAX`.
    pub fn octave(self) -> i64 {
        round_div(11 * i64::from(self.y), 7) + i64::from(self.x)
    }

    /// Letter plus accidentals, without the octave (`F#`, `Bb`, `D`).
    pub fn base_name(self) -> String {
        let letter = char::from(b'D'.wrapping_add_signed(self.letter_offset() as i8));
        let a = self.accidentals();
        let mut name = String::with_capacity(1 + a.unsigned_abs() as usize);
        name.push(letter);
        let accidental = if a > 0 { '#' } else { 'b' };
        for _ in 0..a.unsigned_abs() {
            name.push(accidental);
        }
        name
    }

    /// Move this note by an interval.
    pub fn transpose(self, interval: Interval) -> Self {
        Self::new(self.x + interval.x, self.y + interval.y)
    }

    /// The interval that takes `self` to `other`.
    pub fn interval_to(self, other: Note) -> Interval {
        Interval::new(other.x - self.x, other.y - self.y)
    }

    /// Same pitch class: equal modulo twelve semitones, ignoring octave and
    /// spelling (C# and Db are equivalent).
    pub fn equivalent_note(self, other: Note) -> bool {
        symmod(i64::from(self.y) - i64::from(other.y), 12) == 0
    }
}

/// Map a letter (either case) to its offset from D.
fn letter_offset(letter: char) -> Option<i32> {
    if !letter.is_ascii_alphabetic() {
        return None;
    }
    let offset = letter.to_ascii_uppercase() as i32 - 'D' as i32;
    (-3..=3).contains(&offset).then_some(offset)
}

impl Add<Interval> for Note {
    type Output = Note;

    fn add(self, interval: Interval) -> Note {
        self.transpose(interval)
    }
}

impl Sub for Note {
    type Output = Interval;

    /// `b - a` is the interval from `a` up to `b`.
    fn sub(self, other: Note) -> Interval {
        other.interval_to(self)
    }
}

impl FromStr for Note {
    type Err = NoteNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base_name(), self.octave())
    }
}
