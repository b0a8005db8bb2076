//! Rack solving
//!
//! Permutation generation, blank expansion, dictionary matching and ranking.

mod cancel;
mod dictionary;
mod engine;
mod expand;
pub mod permutations;
mod ranking;

pub use cancel::CancelToken;
pub use dictionary::Dictionary;
pub use engine::{Solution, Solver};
pub use expand::Expansions;
pub use permutations::Permutations;
pub use ranking::{ScoreBoard, ScoredWord};

use crate::core::{LetterScores, Rack};
use crate::error::SolveResult;

/// Every dictionary word playable from `rack`, ranked by standard Scrabble score
///
/// The rack is case-insensitive; `_` marks a blank. Equal scores keep the order in which the
/// words were first found (longer words first).
///
/// # Errors
/// Returns `SolveError::Rack` if the rack holds a character that is neither a letter nor `_`.
///
/// # Examples
/// ```
/// use scrabbler::solver::{Dictionary, ScoredWord, solve};
///
/// let dictionary = Dictionary::from_words(["cat", "act", "at", "ta"]);
/// let words = solve("cat", &dictionary).unwrap();
///
/// assert_eq!(words[0], ScoredWord::new("cat", 5));
/// assert_eq!(words.len(), 4);
/// assert!(solve("c@t", &dictionary).is_err());
/// ```
pub fn solve(rack: &str, dictionary: &Dictionary) -> SolveResult<Vec<ScoredWord>> {
    let rack = Rack::new(rack)?;
    let scores = LetterScores::STANDARD;
    Ok(Solver::new(dictionary, &scores).solve(&rack).words)
}
