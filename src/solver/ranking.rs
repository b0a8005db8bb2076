//! Match collection and ranking

use rustc_hash::FxHashMap;
use std::fmt;

/// A playable word with its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    pub word: String,
    pub score: u32,
}

impl ScoredWord {
    #[must_use]
    pub fn new(word: impl Into<String>, score: u32) -> Self {
        Self {
            word: word.into(),
            score,
        }
    }
}

impl fmt::Display for ScoredWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.score, self.word)
    }
}

/// Deduplicating accumulator for matched words
///
/// Each word keeps the slot of its first discovery. When the same word is found again with a
/// higher score (played with fewer blanks), the higher score replaces the old one.
#[derive(Debug, Default)]
pub struct ScoreBoard {
    slots: FxHashMap<String, usize>,
    entries: Vec<ScoredWord>,
}

impl ScoreBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a match
    pub fn record(&mut self, word: String, score: u32) {
        if let Some(&slot) = self.slots.get(&word) {
            let entry = &mut self.entries[slot];
            entry.score = entry.score.max(score);
            return;
        }

        self.slots.insert(word.clone(), self.entries.len());
        self.entries.push(ScoredWord { word, score });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rank by score descending; equal scores keep discovery order
    #[must_use]
    pub fn into_ranked(self) -> Vec<ScoredWord> {
        let mut entries = self.entries;
        // sort_by is stable
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries
    }
}
