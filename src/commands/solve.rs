//! Rack solving command
//!
//! Solves a single rack and returns the ranked words with run statistics.

use crate::core::Rack;
use crate::error::SolveResult;
use crate::solver::{CancelToken, ScoredWord, Solver};
use std::time::{Duration, Instant};
use tracing::info;

/// Configuration for solving a rack
pub struct SolveConfig {
    pub rack: String,
    /// Shortest word to report
    pub min_length: usize,
    /// Maximum number of words to keep in the result
    pub limit: Option<usize>,
    /// Stop generating candidates after this long
    pub time_limit: Option<Duration>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(rack: String) -> Self {
        Self {
            rack,
            min_length: 1,
            limit: None,
            time_limit: None,
        }
    }
}

/// Result of solving a rack
pub struct RackResult {
    pub rack: String,
    /// Total words found, before `limit` is applied
    pub total_found: usize,
    pub words: Vec<ScoredWord>,
    pub candidates_checked: usize,
    pub complete: bool,
    pub duration: Duration,
}

/// Solve a rack with the given solver
///
/// # Errors
///
/// Returns an error if the rack contains a character that is neither a letter nor `_`.
pub fn solve_rack(config: SolveConfig, solver: &Solver) -> SolveResult<RackResult> {
    let rack = Rack::new(&config.rack)?;
    let solver = solver.with_min_length(config.min_length);
    let cancel = config
        .time_limit
        .map_or_else(CancelToken::new, CancelToken::with_time_limit);

    info!(rack = %rack, tiles = rack.len(), blanks = rack.blank_count(), "solving rack");

    let start = Instant::now();
    let solution = solver.solve_with(&rack, &cancel);
    let duration = start.elapsed();

    let total_found = solution.words.len();
    let mut words = solution.words;
    if let Some(limit) = config.limit {
        words.truncate(limit);
    }

    Ok(RackResult {
        rack: rack.to_string(),
        total_found,
        words,
        candidates_checked: solution.candidates_checked,
        complete: solution.complete,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterScores;
    use crate::error::SolveError;
    use crate::wordlists::BUILTIN;
    use crate::wordlists::loader::dictionary_from_slice;

    #[test]
    fn solve_rack_succeeds() {
        let dictionary = dictionary_from_slice(BUILTIN);
        let scores = LetterScores::STANDARD;
        let solver = Solver::new(&dictionary, &scores);

        let result = solve_rack(SolveConfig::new("CAT".to_string()), &solver).unwrap();

        assert_eq!(result.rack, "cat");
        assert!(result.complete);
        assert_eq!(result.candidates_checked, 15);
        assert_eq!(result.words[0], ScoredWord::new("cat", 5));
        assert!(result.words.contains(&ScoredWord::new("act", 5)));
        assert!(result.words.contains(&ScoredWord::new("at", 2)));
        assert!(result.words.contains(&ScoredWord::new("ta", 2)));
    }

    #[test]
    fn solve_rack_applies_limit_after_counting() {
        let dictionary = dictionary_from_slice(BUILTIN);
        let scores = LetterScores::STANDARD;
        let solver = Solver::new(&dictionary, &scores);

        let mut config = SolveConfig::new("cat".to_string());
        config.limit = Some(1);
        let result = solve_rack(config, &solver).unwrap();

        assert_eq!(result.words.len(), 1);
        assert!(result.total_found >= 4);
    }

    #[test]
    fn solve_rack_min_length() {
        let dictionary = dictionary_from_slice(BUILTIN);
        let scores = LetterScores::STANDARD;
        let solver = Solver::new(&dictionary, &scores);

        let mut config = SolveConfig::new("stone".to_string());
        config.min_length = 4;
        let result = solve_rack(config, &solver).unwrap();

        assert!(!result.words.is_empty());
        assert!(result.words.iter().all(|w| w.word.len() >= 4));
    }

    #[test]
    fn solve_rack_zero_time_limit_stops_immediately() {
        let dictionary = dictionary_from_slice(BUILTIN);
        let scores = LetterScores::STANDARD;
        let solver = Solver::new(&dictionary, &scores);

        let mut config = SolveConfig::new("retains".to_string());
        config.time_limit = Some(Duration::ZERO);
        let result = solve_rack(config, &solver).unwrap();

        assert!(!result.complete);
        assert!(result.words.is_empty());
    }

    #[test]
    fn solve_invalid_rack_returns_error() {
        let dictionary = dictionary_from_slice(BUILTIN);
        let scores = LetterScores::STANDARD;
        let solver = Solver::new(&dictionary, &scores);

        let result = solve_rack(SolveConfig::new("ab-c".to_string()), &solver);
        assert!(matches!(result, Err(SolveError::Rack(_))));
    }
}
