//! Letter values and word scoring
//!
//! Scores follow the standard English Scrabble tile values. A blank is always worth zero,
//! whatever letter it stands in for.

use super::tile::{Tile, WILDCARD};
use thiserror::Error;

/// Standard English tile values, indexed by `letter - b'a'`
const STANDARD_VALUES: [u32; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, // a-m
    1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10, // n-z
];

/// Error type for scoring characters outside the supported alphabet
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("no score defined for letter {0:?}")]
    UnknownLetter(char),
}

/// Fixed mapping from letter to point value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterScores {
    values: [u32; 26],
}

impl LetterScores {
    /// The standard English Scrabble values
    pub const STANDARD: Self = Self {
        values: STANDARD_VALUES,
    };

    /// Create a table from custom values for `a` through `z`
    #[must_use]
    pub const fn from_values(values: [u32; 26]) -> Self {
        Self { values }
    }

    /// Value of a single character, case-insensitive
    ///
    /// The wildcard is worth zero.
    ///
    /// # Errors
    /// Returns `ScoreError::UnknownLetter` for characters other than letters and the wildcard.
    pub fn value(&self, ch: char) -> Result<u32, ScoreError> {
        if ch == WILDCARD {
            return Ok(0);
        }
        if !ch.is_ascii_alphabetic() {
            return Err(ScoreError::UnknownLetter(ch));
        }
        Ok(self.values[usize::from(ch.to_ascii_lowercase() as u8 - b'a')])
    }

    /// Value of a validated tile
    #[inline]
    #[must_use]
    pub fn tile_value(&self, tile: Tile) -> u32 {
        match tile {
            Tile::Letter(b) => self.values[usize::from(b - b'a')],
            Tile::Blank => 0,
        }
    }

    /// Score a word written as a string
    ///
    /// # Errors
    /// Returns `ScoreError::UnknownLetter` on the first unsupported character.
    ///
    /// # Examples
    /// ```
    /// use scrabbler::core::LetterScores;
    ///
    /// let scores = LetterScores::STANDARD;
    /// assert_eq!(scores.score_word("cat").unwrap(), 5);
    /// assert_eq!(scores.score_word("QUIZ").unwrap(), 22);
    /// assert_eq!(scores.score_word("c_t").unwrap(), 4);
    /// assert!(scores.score_word("c4t").is_err());
    /// ```
    pub fn score_word(&self, word: &str) -> Result<u32, ScoreError> {
        word.chars().map(|c| self.value(c)).sum()
    }

    /// Score the tiles actually played, blanks counting zero
    #[must_use]
    pub fn score_tiles(&self, tiles: &[Tile]) -> u32 {
        tiles.iter().map(|&t| self.tile_value(t)).sum()
    }
}

impl Default for LetterScores {
    fn default() -> Self {
        Self::STANDARD
    }
}
