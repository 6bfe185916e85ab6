// Chord templates and chords.
//
// A `ChordTemplate` is a chord shape with no absolute pitch: the intervals of
// its notes above a base note, plus which interval is the bass ("root"
// interval, for inversions) and which sits on top (treble), plus a quality
// label like "min" or "7/3". Applying a template to a concrete note yields a
// `Chord` that remembers the template it came from, so the Markov engine can
// look the chord's shape back up in the transition table.
//
// Shapes are compared with `ChordTemplate::same_shape`, which matches
// intervals by class (y coordinate only), so two templates that differ only
// by octave placement of a note are the same shape.

use std::fmt;
use std::sync::Arc;

use harmony_lattice::{Interval, Note};

use crate::error::{HarmonyError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordTemplate {
    intervals: Vec<Interval>,
    root: Interval,
    treble: Interval,
    quality: String,
}

impl ChordTemplate {
    /// Build a template from note names. The first name is the base; every
    /// other note, and the root and treble, are stored as intervals from it.
    pub fn from_notes(
        names: &[&str],
        root_name: &str,
        treble_name: &str,
        quality: &str,
    ) -> Result<Self> {
        let (base, rest) = names
            .split_first()
            .ok_or_else(|| HarmonyError::EmptyTemplate(quality.to_string()))?;
        let intervals = rest
            .iter()
            .map(|name| Interval::between(base, name))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(ChordTemplate {
            intervals,
            root: Interval::between(base, root_name)?,
            treble: Interval::between(base, treble_name)?,
            quality: quality.to_string(),
        })
    }

    /// Intervals of the non-base notes above the base.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn root_interval(&self) -> Interval {
        self.root
    }

    pub fn treble_interval(&self) -> Interval {
        self.treble
    }

    pub fn quality(&self) -> &str {
        &self.quality
    }

    /// Instantiate this shape with `note` as its base.
    pub fn apply_to_note(self: &Arc<Self>, note: Note) -> Chord {
        let mut notes = Vec::with_capacity(self.intervals.len() + 1);
        notes.push(note);
        notes.extend(self.intervals.iter().map(|&i| note + i));
        Chord {
            template: Arc::clone(self),
            notes,
            root: note,
            bass: note + self.root,
            treble: note + self.treble,
            quality: self.quality.clone(),
        }
    }

    /// Shape equality: same number of intervals, every interval (and the
    /// root and treble intervals) of the same class, same quality label.
    pub fn same_shape(&self, other: &ChordTemplate) -> bool {
        self.intervals.len() == other.intervals.len()
            && self
                .intervals
                .iter()
                .zip(&other.intervals)
                .all(|(a, b)| a.same_class(*b))
            && self.root.same_class(other.root)
            && self.treble.same_class(other.treble)
            && self.quality == other.quality
    }
}

/// A template realized on a concrete base note.
#[derive(Debug, Clone)]
pub struct Chord {
    pub template: Arc<ChordTemplate>,
    /// Base note first, then one note per template interval.
    pub notes: Vec<Note>,
    pub root: Note,
    pub bass: Note,
    pub treble: Note,
    pub quality: String,
}

impl Chord {
    /// Whether this chord was built from a template of the given shape.
    pub fn matches(&self, template: &ChordTemplate) -> bool {
        self.template.same_shape(template)
    }

    /// Like `Display`, with the bass spelled out when it differs from the
    /// root: `D7/3/C F#`.
    pub fn slash_name(&self) -> String {
        let root = self.root.base_name();
        let bass = self.bass.base_name();
        if bass == root {
            self.to_string()
        } else {
            format!("{root}{}/{bass} {}", self.quality, self.treble.base_name())
        }
    }
}

impl fmt::Display for Chord {
    /// `{root}{quality} {treble}`, e.g. `Dmin D` or `Gmaj/3 G`. Inversions
    /// show only through the quality label.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} {}",
            self.root.base_name(),
            self.quality,
            self.treble.base_name()
        )
    }
}
