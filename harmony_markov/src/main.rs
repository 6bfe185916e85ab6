// Chord progression search: CLI entry point.
//
// For each target pitch class, runs the Monte-Carlo shortest-path search
// and prints the best progression found from the start chord.
//
// Usage:
//   cargo run -p harmony_markov -- [--table FILE] [--iterations N] [--seed N]
//     [--max-walk-len N] [--stop-at-end] [--target NOTE]...
//
// Without --table the stock minor-cadence graph (rooted on D0) is used.
// Without --target, every pitch class on the line of fifths from Gb to F#
// is searched in turn. Set RUST_LOG=harmony_markov=debug for search stats.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use harmony_lattice::Note;
use harmony_markov::{DEFAULT_ITERATIONS, Markov, MinorCadence, ProgressionConfig, SearchConfig};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "progressions", about = "Search chord graphs for short progressions")]
struct Args {
    /// JSON chord-graph file (defaults to the built-in minor cadence).
    #[arg(long)]
    table: Option<PathBuf>,

    /// Random walks per target.
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: usize,

    /// Seed for the walk generator (random if omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Abandon walks longer than this many chords.
    #[arg(long)]
    max_walk_len: Option<usize>,

    /// Stop a walk as soon as it takes an edge marked `end`.
    #[arg(long)]
    stop_at_end: bool,

    /// Target note, e.g. `D0` or `Bb2`; repeatable.
    #[arg(long = "target")]
    targets: Vec<Note>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("harmony_markov=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let markov = load_markov(args.table.as_ref())?;
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, iterations = args.iterations, "starting search");
    let mut rng = Pcg64::seed_from_u64(seed);

    let config = SearchConfig {
        iterations: args.iterations,
        max_walk_len: args.max_walk_len,
        stop_at_end_marker: args.stop_at_end,
    };

    let targets = if args.targets.is_empty() {
        (-6..=6).map(|y| Note::new(0, y)).collect()
    } else {
        args.targets
    };

    for target in targets {
        println!("{}", target.base_name());
        match markov.shortest_path_with(target, &config, &mut rng) {
            Some(found) => {
                println!("Found path with length: {}", found.length);
                let names: Vec<String> = found.path.iter().map(|c| c.to_string()).collect();
                println!("{names:?}");
            }
            None => println!("No path found"),
        }
        println!();
    }

    Ok(())
}

fn load_markov(table: Option<&PathBuf>) -> Result<Markov> {
    match table {
        Some(path) => {
            let config = ProgressionConfig::load(path)
                .with_context(|| format!("loading chord graph {}", path.display()))?;
            info!(path = %path.display(), "using chord graph from file");
            Ok(config.build()?)
        }
        None => Ok(MinorCadence::new()?.markov()?),
    }
}
