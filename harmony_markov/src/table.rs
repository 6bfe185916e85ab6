// Transition table: the chord graph the Markov engine walks.
//
// Each `Transition` maps a source template to a list of equally likely
// `Successor`s. A successor names the next template and the `degree` the
// root moves by to reach it. Lookup scans transitions in order and takes
// the first whose source has the current chord's shape; a chord with no
// matching transition is a dead end, which is how walks terminate.
//
// `MinorCadence` is the stock graph: ten templates around a minor-key
// cadence, rooted on D0 and starting from `minor1`. Its only exit is
// `dom3 -> cadence_minor1`, so every walk eventually resolves there.

use std::sync::Arc;

use harmony_lattice::{Interval, Note};

use crate::error::Result;
use crate::markov::Markov;
use crate::template::{Chord, ChordTemplate};

/// One outgoing edge.
#[derive(Debug, Clone)]
pub struct Successor {
    /// Root motion from the current chord to the next one.
    pub degree: Interval,
    pub chord: Arc<ChordTemplate>,
    /// Marks a terminal move. Only consulted when a search opts into
    /// stopping at end markers.
    pub end: bool,
}

impl Successor {
    pub fn new(degree: Interval, chord: &Arc<ChordTemplate>) -> Self {
        Successor {
            degree,
            chord: Arc::clone(chord),
            end: false,
        }
    }

    pub fn end(degree: Interval, chord: &Arc<ChordTemplate>) -> Self {
        Successor {
            end: true,
            ..Successor::new(degree, chord)
        }
    }
}

#[derive(Debug, Clone)]
pub struct Transition {
    pub from: Arc<ChordTemplate>,
    pub to: Vec<Successor>,
}

/// Ordered list of transitions. Order matters: the first matching source
/// wins.
#[derive(Debug, Clone, Default)]
pub struct TransitionTable {
    pub transitions: Vec<Transition>,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, from: &Arc<ChordTemplate>, to: Vec<Successor>) {
        self.transitions.push(Transition {
            from: Arc::clone(from),
            to,
        });
    }

    /// Successors of `chord`: the `to` list of the first transition whose
    /// source has the chord's shape, or an empty slice at a dead end.
    pub fn successors(&self, chord: &Chord) -> &[Successor] {
        self.transitions
            .iter()
            .find(|t| chord.matches(&t.from))
            .map(|t| t.to.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

/// The stock minor-cadence chord graph.
#[derive(Debug, Clone)]
pub struct MinorCadence {
    pub minor1: Arc<ChordTemplate>,
    pub dom3_over7: Arc<ChordTemplate>,
    pub dom5: Arc<ChordTemplate>,
    pub minor3: Arc<ChordTemplate>,
    pub major3: Arc<ChordTemplate>,
    pub major_over3: Arc<ChordTemplate>,
    pub dim7_over5: Arc<ChordTemplate>,
    pub aug6: Arc<ChordTemplate>,
    pub min5_over5: Arc<ChordTemplate>,
    pub dom3: Arc<ChordTemplate>,
    pub cadence_minor1: Arc<ChordTemplate>,
}

impl MinorCadence {
    pub const ROOT: &'static str = "D0";

    pub fn new() -> Result<Self> {
        let t = |names: &[&str], root: &str, treble: &str, quality: &str| {
            ChordTemplate::from_notes(names, root, treble, quality).map(Arc::new)
        };
        Ok(MinorCadence {
            minor1: t(&["D0", "F0", "A1"], "D0", "D1", "min")?,
            dom3_over7: t(&["A0", "C#0", "E0", "G0"], "G-1", "C#1", "7/3")?,
            dom5: t(&["A0", "C#0", "E0", "G0"], "A0", "E1", "7")?,
            minor3: t(&["D0", "F0", "A1"], "D0", "F1", "min")?,
            major3: t(&["D0", "F#0", "A1"], "D0", "F#1", "maj")?,
            major_over3: t(&["D0", "F#0", "A1"], "F#0", "D1", "maj/3")?,
            dim7_over5: t(&["F#-1", "A0", "C0", "Eb0"], "C0", "F#1", "dim7/5")?,
            aug6: t(&["Bb0", "D0", "F0", "G#0"], "Bb0", "G#1", "aug6")?,
            min5_over5: t(&["A0", "C0", "E0"], "E-1", "E1", "min/5")?,
            dom3: t(&["A0", "C#0", "E0", "G0"], "A0", "C#1", "7")?,
            cadence_minor1: t(&["D0", "F0", "A1"], "D0", "D1", "min (END)")?,
        })
    }

    pub fn table(&self) -> TransitionTable {
        let mut table = TransitionTable::new();
        table.push(&self.minor1, vec![Successor::new(Interval::FIFTH, &self.dom5)]);
        table.push(
            &self.dom5,
            vec![
                Successor::new(Interval::FOURTH, &self.minor3),
                Successor::new(Interval::FOURTH, &self.major3),
            ],
        );
        table.push(
            &self.minor3,
            vec![
                Successor::new(Interval::MIN7, &self.dom5),
                Successor::new(Interval::UNISON, &self.dom3_over7),
            ],
        );
        table.push(&self.major3, vec![Successor::new(Interval::MAJ7, &self.dom5)]);
        table.push(
            &self.dom3_over7,
            vec![Successor::new(Interval::FOURTH, &self.major_over3)],
        );
        table.push(
            &self.major_over3,
            vec![
                Successor::new(Interval::AUG1, &self.dim7_over5),
                Successor::new(Interval::MIN3, &self.aug6),
            ],
        );
        table.push(
            &self.dim7_over5,
            vec![Successor::new(Interval::MIN2, &self.major_over3)],
        );
        table.push(&self.aug6, vec![Successor::new(Interval::MAJ3, &self.min5_over5)]);
        table.push(&self.min5_over5, vec![Successor::new(Interval::FIFTH, &self.dom3)]);
        table.push(
            &self.dom3,
            vec![Successor::end(Interval::FOURTH, &self.cadence_minor1)],
        );
        table
    }

    /// Engine rooted on D0, starting from `minor1`.
    pub fn markov(&self) -> Result<Markov> {
        let root = Note::from_name(Self::ROOT)?;
        Ok(Markov::new(root, Arc::clone(&self.minor1), self.table()))
    }
}
