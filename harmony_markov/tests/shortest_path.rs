// End-to-end tests for the shortest-path search over the stock chord graph.
//
// The stock graph's only exit is dom3 -> cadence_minor1. Its shortest
// progression has nine chords and is the only one of that length:
// i - V7 - i - V7/3 - IV/3 - aug6 - i/5 - V7 - i, ending back on D. Each walk
// takes it with probability 1/8, so a seeded search of a few thousand walks
// always finds it.

use std::path::Path;

use harmony_lattice::Note;
use harmony_markov::{Markov, MinorCadence, ProgressionConfig, SearchConfig, ShortestPath};
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand_pcg::Pcg64;

const ITERATIONS: usize = 4_000;

fn stock_markov() -> Markov {
    MinorCadence::new().unwrap().markov().unwrap()
}

fn file_markov() -> Markov {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/minor_cadence.json");
    ProgressionConfig::load(&path).unwrap().build().unwrap()
}

fn describe(found: &ShortestPath) -> Vec<(String, String)> {
    found
        .path
        .iter()
        .map(|c| (c.root.to_string(), c.quality.clone()))
        .collect()
}

fn expected_d_minor_path() -> Vec<(String, String)> {
    [
        ("D0", "min"),
        ("A1", "7"),
        ("D1", "min"),
        ("D1", "7/3"),
        ("G1", "maj/3"),
        ("Bb2", "aug6"),
        ("D2", "min/5"),
        ("A3", "7"),
        ("D3", "min (END)"),
    ]
    .iter()
    .map(|(r, q)| (r.to_string(), q.to_string()))
    .collect()
}

#[test]
fn seeded_search_finds_nine_chord_cadence() {
    let cadence = MinorCadence::new().unwrap();
    let markov = cadence.markov().unwrap();
    let mut rng = Pcg64::seed_from_u64(42);

    let found = markov
        .shortest_path(Note::from_name("D0").unwrap(), ITERATIONS, &mut rng)
        .expect("D is reachable");

    assert_eq!(found.length, 9);
    assert_eq!(found.path.len(), found.length);
    assert_eq!(describe(&found), expected_d_minor_path());
    assert!(found.path[8].matches(&cadence.cadence_minor1));
}

#[test]
fn chord_names_of_cadence() {
    let mut rng = Pcg64::seed_from_u64(42);
    let found = stock_markov()
        .shortest_path(Note::new(0, 0), ITERATIONS, &mut rng)
        .unwrap();
    let names: Vec<String> = found.path.iter().map(|c| c.to_string()).collect();
    assert_eq!(
        names,
        vec![
            "Dmin D",
            "A7 E",
            "Dmin F",
            "D7/3 F#",
            "Gmaj/3 G",
            "Bbaug6 G#",
            "Dmin/5 A",
            "A7 C#",
            "Dmin (END) D",
        ]
    );
}

#[test]
fn results_end_in_target_pitch_class() {
    let markov = stock_markov();
    let mut rng = Pcg64::seed_from_u64(2024);
    for y in -6..=6 {
        let target = Note::new(0, y);
        if let Some(found) = markov.shortest_path(target, 1_000, &mut rng) {
            assert_eq!(found.length, found.path.len());
            let last = found.path.last().unwrap();
            assert!(
                last.root.equivalent_note(target),
                "{} does not end on {}",
                last,
                target.base_name()
            );
            assert!(found.length >= 9);
        }
    }
}

#[test]
fn json_graph_matches_builtin_graph() {
    let target = Note::new(0, 0);
    let config = SearchConfig {
        iterations: ITERATIONS,
        ..Default::default()
    };
    let from_code = stock_markov()
        .shortest_path_with(target, &config, &mut Pcg64::seed_from_u64(7))
        .unwrap();
    let from_file = file_markov()
        .shortest_path_with(target, &config, &mut Pcg64::seed_from_u64(7))
        .unwrap();
    assert_eq!(describe(&from_file), describe(&from_code));
}

#[test]
fn identical_seeds_give_identical_walks() {
    let markov = stock_markov();
    let mut a = Pcg64::seed_from_u64(99);
    let mut b = Pcg64::seed_from_u64(99);
    for _ in 0..50 {
        let wa: Vec<String> = markov
            .random_walk(&mut a)
            .path()
            .iter()
            .map(|c| c.to_string())
            .collect();
        let wb: Vec<String> = markov
            .random_walk(&mut b)
            .path()
            .iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(wa, wb);
    }
}

#[test]
fn end_marker_does_not_change_stock_search() {
    // The only end-marked edge in the stock graph leads to its dead end, so
    // stopping at end markers finds the same path.
    let target = Note::new(0, 0);
    let markov = stock_markov();
    let plain = markov
        .shortest_path_with(
            target,
            &SearchConfig {
                iterations: ITERATIONS,
                ..Default::default()
            },
            &mut Pcg64::seed_from_u64(5),
        )
        .unwrap();
    let marked = markov
        .shortest_path_with(
            target,
            &SearchConfig {
                iterations: ITERATIONS,
                stop_at_end_marker: true,
                ..Default::default()
            },
            &mut Pcg64::seed_from_u64(5),
        )
        .unwrap();
    assert_eq!(describe(&marked), describe(&plain));
}
