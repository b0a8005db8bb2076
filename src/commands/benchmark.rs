//! Benchmark command
//!
//! Solves a batch of random racks drawn from a standard tile bag.

use crate::core::{Rack, Tile};
use crate::solver::{ScoredWord, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::info;

/// Standard English tile distribution (letter, count); 98 letters plus 2 blanks
const TILE_BAG: [(u8, usize); 26] = [
    (b'a', 9),
    (b'b', 2),
    (b'c', 2),
    (b'd', 4),
    (b'e', 12),
    (b'f', 2),
    (b'g', 3),
    (b'h', 2),
    (b'i', 9),
    (b'j', 1),
    (b'k', 1),
    (b'l', 4),
    (b'm', 2),
    (b'n', 6),
    (b'o', 8),
    (b'p', 2),
    (b'q', 1),
    (b'r', 6),
    (b's', 4),
    (b't', 6),
    (b'u', 4),
    (b'v', 2),
    (b'w', 2),
    (b'x', 1),
    (b'y', 2),
    (b'z', 1),
];

const BLANKS_IN_BAG: usize = 2;

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    /// Number of racks to solve
    pub count: usize,
    /// Tiles per rack (at most 100)
    pub rack_size: usize,
    /// Draw from a bag without blanks
    pub no_blanks: bool,
    /// Seed for reproducible racks
    pub seed: Option<u64>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            count: 20,
            rack_size: 7,
            no_blanks: false,
            seed: None,
        }
    }
}

/// Result of solving one benchmark rack
pub struct RackOutcome {
    pub rack: String,
    pub words_found: usize,
    pub best: Option<ScoredWord>,
    pub candidates_checked: usize,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub racks: Vec<RackOutcome>,
    pub total_words: usize,
    pub total_candidates: usize,
    pub average_words: f64,
    pub duration: Duration,
    pub racks_per_second: f64,
}

/// The full tile bag as tiles
#[must_use]
pub fn tile_bag(include_blanks: bool) -> Vec<Tile> {
    let blanks = if include_blanks { BLANKS_IN_BAG } else { 0 };
    TILE_BAG
        .iter()
        .flat_map(|&(letter, count)| std::iter::repeat_n(Tile::Letter(letter), count))
        .chain(std::iter::repeat_n(Tile::Blank, blanks))
        .collect()
}

/// Draw `config.count` racks, each shuffled from a fresh bag
#[must_use]
pub fn draw_racks(config: &BenchmarkConfig) -> Vec<Rack> {
    let mut rng = config
        .seed
        .map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);
    let mut bag = tile_bag(!config.no_blanks);
    let rack_size = config.rack_size.min(bag.len());

    (0..config.count)
        .map(|_| {
            bag.shuffle(&mut rng);
            Rack::from_tiles(bag[..rack_size].to_vec())
        })
        .collect()
}

/// Solve every rack in parallel
pub fn run_benchmark(solver: &Solver, racks: &[Rack]) -> BenchmarkResult {
    info!(racks = racks.len(), "starting benchmark");

    let pb = ProgressBar::new(racks.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let outcomes: Vec<RackOutcome> = racks
        .par_iter()
        .map(|rack| {
            let solution = solver.solve(rack);
            pb.inc(1);
            RackOutcome {
                rack: rack.to_string(),
                words_found: solution.words.len(),
                best: solution.words.into_iter().next(),
                candidates_checked: solution.candidates_checked,
            }
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let total_words: usize = outcomes.iter().map(|o| o.words_found).sum();
    let total_candidates: usize = outcomes.iter().map(|o| o.candidates_checked).sum();
    let count = outcomes.len();

    BenchmarkResult {
        racks: outcomes,
        total_words,
        total_candidates,
        average_words: if count > 0 {
            total_words as f64 / count as f64
        } else {
            0.0
        },
        duration,
        racks_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
