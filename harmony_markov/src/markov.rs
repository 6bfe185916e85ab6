// Markov chord-progression engine and Monte-Carlo shortest-path search.
//
// The engine holds only immutable configuration: the root note, the start
// template, and the transition table. Walk state lives in a `Walk` value
// that each trial builds fresh, so trials cannot leak state into each other.
//
// A walk starts with the start template applied to the root note, then
// repeatedly picks a successor uniformly at random, moves the root by the
// successor's degree, and applies the successor's template there. It ends
// when the current chord's shape has no transition (a dead end).
//
// `shortest_path` runs many independent walks and keeps the shortest one
// whose final root is in the target pitch class. It is an estimate: with too
// few iterations it can miss the true minimum, or find nothing at all.
//
// All randomness comes from the caller's `rand::Rng`, so a seeded generator
// reproduces a search exactly.

use std::sync::Arc;

use harmony_lattice::Note;
use rand::Rng;
use tracing::{debug, trace, warn};

use crate::table::{Successor, TransitionTable};
use crate::template::{Chord, ChordTemplate};

/// Trials per search when the caller doesn't choose.
pub const DEFAULT_ITERATIONS: usize = 100_000;

/// Shortest-path search parameters.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Number of independent walks.
    pub iterations: usize,
    /// Abandon a walk once its path grows past this many chords. `None`
    /// walks until a dead end, however long that takes.
    pub max_walk_len: Option<usize>,
    /// End a walk right after taking a successor marked `end`, instead of
    /// waiting for a dead end.
    pub stop_at_end_marker: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            iterations: DEFAULT_ITERATIONS,
            max_walk_len: None,
            stop_at_end_marker: false,
        }
    }
}

/// The chords visited so far; never empty.
#[derive(Debug, Clone)]
pub struct Walk {
    path: Vec<Chord>,
}

impl Walk {
    fn new(first: Chord) -> Self {
        Walk { path: vec![first] }
    }

    pub fn current(&self) -> &Chord {
        &self.path[self.path.len() - 1]
    }

    pub fn path(&self) -> &[Chord] {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Always false: a walk starts with its first chord and only grows.
    /// Present to pair with `len`.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn into_path(self) -> Vec<Chord> {
        self.path
    }
}

/// Best progression found by a search.
#[derive(Debug, Clone)]
pub struct ShortestPath {
    /// Number of chords, including the starting chord.
    pub length: usize,
    pub path: Vec<Chord>,
}

#[derive(Debug, Clone)]
pub struct Markov {
    root: Note,
    start: Arc<ChordTemplate>,
    table: TransitionTable,
}

impl Markov {
    pub fn new(root: Note, start: Arc<ChordTemplate>, table: TransitionTable) -> Self {
        Markov { root, start, table }
    }

    pub fn root(&self) -> Note {
        self.root
    }

    pub fn start(&self) -> &Arc<ChordTemplate> {
        &self.start
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// A walk holding only the start template on the root note.
    pub fn start_walk(&self) -> Walk {
        Walk::new(self.start.apply_to_note(self.root))
    }

    /// Successors available from the walk's current chord.
    pub fn possibilities(&self, walk: &Walk) -> &[Successor] {
        self.table.successors(walk.current())
    }

    /// Pick one successor uniformly, or `None` at a dead end.
    pub fn sample(&self, walk: &Walk, rng: &mut impl Rng) -> Option<&Successor> {
        let options = self.possibilities(walk);
        if options.is_empty() {
            return None;
        }
        Some(&options[rng.random_range(0..options.len())])
    }

    /// Take one random step. Returns the successor taken, or `None` if the
    /// walk is at a dead end (and is left unchanged).
    pub fn step(&self, walk: &mut Walk, rng: &mut impl Rng) -> Option<&Successor> {
        let successor = self.sample(walk, rng)?;
        let new_root = walk.current().root + successor.degree;
        walk.path.push(successor.chord.apply_to_note(new_root));
        Some(successor)
    }

    /// Take one random step; `false` once the walk cannot continue.
    pub fn next_random(&self, walk: &mut Walk, rng: &mut impl Rng) -> bool {
        self.step(walk, rng).is_some()
    }

    /// Walk from the start until a dead end.
    ///
    /// Does not return if the table has a cycle with no way out.
    pub fn random_walk(&self, rng: &mut impl Rng) -> Walk {
        let mut walk = self.start_walk();
        while self.next_random(&mut walk, rng) {}
        walk
    }

    /// One search trial under `config`. `None` if the walk outgrew
    /// `max_walk_len`.
    fn run_trial(&self, config: &SearchConfig, rng: &mut impl Rng) -> Option<Walk> {
        let mut walk = self.start_walk();
        while let Some(successor) = self.step(&mut walk, rng) {
            if config.max_walk_len.is_some_and(|max| walk.len() > max) {
                return None;
            }
            if config.stop_at_end_marker && successor.end {
                break;
            }
        }
        Some(walk)
    }

    /// Shortest walk (over `iterations` random trials) that ends on a root
    /// in the same pitch class as `target`. `None` if no trial got there.
    pub fn shortest_path(
        &self,
        target: Note,
        iterations: usize,
        rng: &mut impl Rng,
    ) -> Option<ShortestPath> {
        let config = SearchConfig {
            iterations,
            ..Default::default()
        };
        self.shortest_path_with(target, &config, rng)
    }

    pub fn shortest_path_with(
        &self,
        target: Note,
        config: &SearchConfig,
        rng: &mut impl Rng,
    ) -> Option<ShortestPath> {
        let mut best: Option<Walk> = None;
        let mut hits = 0usize;
        let mut abandoned = 0usize;

        for trial in 0..config.iterations {
            let Some(walk) = self.run_trial(config, rng) else {
                abandoned += 1;
                continue;
            };
            if !walk.current().root.equivalent_note(target) {
                continue;
            }
            hits += 1;
            if best.as_ref().is_none_or(|b| walk.len() < b.len()) {
                trace!(trial, length = walk.len(), "shorter path to {}", target.base_name());
                best = Some(walk);
            }
        }

        if config.iterations > 0 && abandoned == config.iterations {
            warn!(
                iterations = config.iterations,
                max_walk_len = ?config.max_walk_len,
                "every walk exceeded the length cap"
            );
        }
        debug!(
            target = %target.base_name(),
            iterations = config.iterations,
            hits,
            abandoned,
            best = ?best.as_ref().map(Walk::len),
            "shortest-path search finished"
        );

        best.map(|walk| ShortestPath {
            length: walk.len(),
            path: walk.into_path(),
        })
    }
}
