//! Dictionary membership
//!
//! The dictionary is a hash set of normalized words so that each candidate lookup is O(1).

use super::expand::Expansions;
use crate::core::Tile;
use rustc_hash::FxHashSet;

/// An immutable set of valid words
///
/// Words are trimmed and lowercased on insertion. Empty entries are skipped.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from any collection of words
    ///
    /// # Examples
    /// ```
    /// use scrabbler::solver::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["Cat ", "act", "", "at"]);
    /// assert_eq!(dictionary.len(), 3);
    /// assert!(dictionary.contains("cat"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words.into_iter().collect()
    }

    /// Exact membership test; expects an already-lowercase word
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Every dictionary word a candidate can spell
    ///
    /// A candidate without blanks matches at most itself. A candidate with blanks is expanded
    /// and each concrete string is tested, so several words may match.
    #[must_use]
    pub fn matches(&self, candidate: &[Tile]) -> Vec<String> {
        if !candidate.iter().any(|t| t.is_blank()) {
            let word: String = candidate.iter().map(|t| t.as_char()).collect();
            return if self.contains(&word) {
                vec![word]
            } else {
                Vec::new()
            };
        }

        Expansions::new(candidate)
            .filter(|word| self.contains(word))
            .collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .filter_map(|word| {
                let normalized = word.as_ref().trim().to_lowercase();
                (!normalized.is_empty()).then_some(normalized)
            })
            .collect();

        Self { words }
    }
}
