//! Command implementations

pub mod benchmark;
pub mod score;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, draw_racks, run_benchmark};
pub use score::{ScoreBreakdown, score_breakdown};
pub use solve::{RackResult, SolveConfig, solve_rack};
