// Markov chord-progression generator.
//
// Chords are shapes (templates) realized on lattice-spelled notes from
// harmony_lattice, so every generated progression keeps correct enharmonic
// spelling. A hand-authored graph of templates drives a random walk; a
// Monte-Carlo search over many walks estimates the shortest progression from
// the start chord that resolves onto a given pitch class.
//
// Architecture:
// - template.rs: `ChordTemplate` (shape) and `Chord` (shape on a root)
// - table.rs: transition graph, successor lookup, the stock minor-cadence graph
// - config.rs: JSON chord-graph files -> `Markov`
// - markov.rs: walk state, random stepping, shortest-path search
// - error.rs: `HarmonyError`
// - main.rs: `progressions` CLI, prints the best path for each pitch class
//
// Searches are deterministic given a seeded `rand::Rng`.

pub mod config;
pub mod error;
pub mod markov;
pub mod table;
pub mod template;

pub use config::ProgressionConfig;
pub use error::{HarmonyError, Result};
pub use markov::{DEFAULT_ITERATIONS, Markov, SearchConfig, ShortestPath, Walk};
pub use table::{MinorCadence, Successor, Transition, TransitionTable};
pub use template::{Chord, ChordTemplate};
