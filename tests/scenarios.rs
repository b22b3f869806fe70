//! End-to-end annealing runs on the bundled scoring domains.

use std::collections::HashSet;

use u_anneal::islands::{read_islands, Fertility, Island, IslandSelection, IslandSize};
use u_anneal::sa::{AnnealConfig, Annealer, Scorer};
use u_anneal::scoring::WeightedPrefix;

fn ramp() -> Vec<u32> {
    (0..25).map(|i| i * 10).collect()
}

#[test]
fn test_weighted_ramp_default_schedule() {
    let initial = ramp();
    let scorer = WeightedPrefix::default();
    let initial_score = scorer.score(&initial).unwrap();
    assert!((initial_score - 20.0).abs() < 1e-12);

    let config = AnnealConfig::default()
        .with_outer_iterations(100)
        .with_inner_iterations(1000)
        .with_initial_temperature(100.0)
        .with_cooling_rate(0.95)
        .with_seed(42);
    let result = Annealer::new(&initial, scorer.clone(), config)
        .unwrap()
        .run()
        .unwrap();

    let values: HashSet<u32> = result.sequence.iter().copied().collect();
    assert_eq!(values, initial.iter().copied().collect::<HashSet<u32>>());
    assert_eq!(result.sequence.len(), 25);

    let final_score = scorer.score(&result.sequence).unwrap();
    assert!((final_score - result.score).abs() < 1e-9);
    assert!(final_score >= initial_score);
    assert!(final_score <= 556.0 + 1e-9);
    assert!(
        final_score > 500.0,
        "expected the largest values near the front, got {final_score}: {:?}",
        &result.sequence[..3]
    );
    assert!((result.best_score - 556.0).abs() < 1e-9);
    assert_eq!(result.iterations, 100_000);
}

#[test]
fn test_caller_sequence_untouched() {
    let initial = ramp();
    let snapshot = initial.clone();
    let config = AnnealConfig::default()
        .with_outer_iterations(10)
        .with_inner_iterations(100)
        .with_seed(1);
    let _ = Annealer::new(&initial, WeightedPrefix::default(), config)
        .unwrap()
        .solve()
        .unwrap();
    assert_eq!(initial, snapshot);
}

#[test]
fn test_zero_iterations_identity() {
    let initial = ramp();
    let config = AnnealConfig::default()
        .with_outer_iterations(0)
        .with_inner_iterations(1000);
    let result = Annealer::new(&initial, WeightedPrefix::default(), config)
        .unwrap()
        .run()
        .unwrap();
    assert_eq!(result.sequence, initial);
    assert!((result.score - 20.0).abs() < 1e-12);
    assert_eq!(result.score_history, vec![result.score]);
}

const ISLANDS: &str = "\
#Name,Mackerel,Lavender,Resin,Olive,Grapes,Flax,Murex Snail,Sandarac,Oyster,Sturgeon,Marble,Iron,Mineral,Gold Ore,Mountains,Rivers,Size
Ponza,,,,,1,,1,,1,,,,,,0,0,M
Capri,,,,,,,,1,,1,,,,1,0,6,M
Ostia,1,,,1,,,,,,,1,,,,8,12,L
Elba,1,1,,,,,,,,,,1,1,,10,2,S
Lipari,,,1,1,,,,,,,1,,1,,6,4,L
Ischia,,1,1,,,1,,,,,,1,,,4,0,XL
";

/// Best achievable score over every ordered choice of `picks` islands.
fn brute_force_best(islands: &[Island], picks: usize) -> f64 {
    fn extend(
        islands: &[Island],
        used: &mut Vec<bool>,
        chosen: &mut Vec<Island>,
        picks: usize,
        best: &mut f64,
    ) {
        if chosen.len() == picks {
            let score = IslandSelection::new(picks).score(chosen).unwrap();
            *best = best.max(score);
            return;
        }
        for i in 0..islands.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            chosen.push(islands[i].clone());
            extend(islands, used, chosen, picks, best);
            chosen.pop();
            used[i] = false;
        }
    }

    let mut best = f64::NEG_INFINITY;
    extend(
        islands,
        &mut vec![false; islands.len()],
        &mut Vec::new(),
        picks,
        &mut best,
    );
    best
}

#[test]
fn test_island_selection_finds_optimum() {
    let islands = read_islands(ISLANDS.as_bytes()).unwrap();
    assert_eq!(islands.len(), 6);

    let picks = 3;
    let scorer = IslandSelection::new(picks);
    let initial_score = scorer.score(&islands).unwrap();
    let optimum = brute_force_best(&islands, picks);

    let config = AnnealConfig::default()
        .with_outer_iterations(60)
        .with_inner_iterations(500)
        .with_seed(7);
    let result = Annealer::new(&islands, scorer, config)
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(result.sequence.len(), islands.len());
    assert!(initial_score < optimum);
    assert!((result.best_score - optimum).abs() < 1e-9);
    assert!(result.score <= optimum + 1e-9);

    let names: HashSet<&str> = result.sequence.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names.len(), 6);
}

#[test]
fn test_island_scores_from_records() {
    let islands = read_islands(ISLANDS.as_bytes()).unwrap();
    let ostia = &islands[2];
    assert_eq!(ostia.size, IslandSize::Large);
    assert_eq!(ostia.score(Fertility::ALL), 235.0);

    // sandarac 90, sturgeon 30, gold 20; rivers 6 + 3 + 3; medium 20
    let capri = &islands[1];
    assert_eq!(capri.name, "Capri");
    assert_eq!(capri.score(Fertility::ALL), 172.0);
}
