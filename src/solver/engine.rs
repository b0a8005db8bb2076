//! Main rack solver interface

use super::cancel::CancelToken;
use super::dictionary::Dictionary;
use super::permutations::Permutations;
use super::ranking::{ScoreBoard, ScoredWord};
use crate::core::{LetterScores, Rack};
use tracing::{debug, warn};

/// Outcome of solving one rack
#[derive(Debug, Clone)]
pub struct Solution {
    /// Playable words, highest score first
    pub words: Vec<ScoredWord>,
    /// Number of tile arrangements tested against the dictionary
    pub candidates_checked: usize,
    /// False if the run was cancelled before every arrangement was tested
    pub complete: bool,
}

/// Main rack solver
///
/// Borrows an immutable dictionary and score table, so one solver can serve many racks
/// (including from several threads at once).
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    dictionary: &'a Dictionary,
    scores: &'a LetterScores,
    min_length: usize,
}

impl<'a> Solver<'a> {
    /// Create a new solver
    ///
    /// # Parameters
    /// - `dictionary`: The valid words
    /// - `scores`: Letter values used to score each play
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary, scores: &'a LetterScores) -> Self {
        Self {
            dictionary,
            scores,
            min_length: 1,
        }
    }

    /// Only report words of at least `min_length` letters
    #[must_use]
    pub const fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    #[must_use]
    pub const fn scores(&self) -> &'a LetterScores {
        self.scores
    }

    /// Find every playable word on the rack
    #[must_use]
    pub fn solve(&self, rack: &Rack) -> Solution {
        self.solve_with(rack, &CancelToken::new())
    }

    /// Find every playable word on the rack, stopping early if `cancel` fires
    ///
    /// A cancelled run still returns the words found so far, ranked, with `complete` unset.
    #[must_use]
    pub fn solve_with(&self, rack: &Rack, cancel: &CancelToken) -> Solution {
        let mut board = ScoreBoard::new();
        let mut candidates_checked = 0;
        let mut complete = true;

        let mut candidates = Permutations::new(rack.tiles().to_vec());
        for candidate in candidates.by_ref() {
            if cancel.is_cancelled() {
                complete = false;
                break;
            }
            // Longest first: once below the minimum nothing shorter can qualify
            if candidate.len() < self.min_length {
                break;
            }

            candidates_checked += 1;
            let matches = self.dictionary.matches(&candidate);
            if matches.is_empty() {
                continue;
            }

            // Every expansion of a candidate uses the same tiles, hence the same score
            let score = self.scores.score_tiles(&candidate);
            for word in matches {
                board.record(word, score);
            }
        }

        if complete {
            debug!(
                rack = %rack,
                candidates = candidates_checked,
                words = board.len(),
                "rack solved"
            );
        } else {
            warn!(
                rack = %rack,
                candidates = candidates_checked,
                remaining = candidates.size_hint().0,
                words = board.len(),
                "solve cancelled before all candidates were checked"
            );
        }

        Solution {
            words: board.into_ranked(),
            candidates_checked,
            complete,
        }
    }
}
