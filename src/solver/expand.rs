//! Blank tile expansion
//!
//! Turns a candidate that contains blanks into every concrete string it could spell.

use crate::core::{ALPHABET, Tile};

/// Iterator over the concrete strings a candidate can spell
///
/// Each blank is substituted independently with each of the 26 letters, so a candidate with
/// `k` blanks produces exactly 26^k strings. Substitution works like an odometer with the
/// leftmost blank as the most significant digit, so the output is in lexicographic order.
/// A candidate without blanks produces itself once.
///
/// # Examples
/// ```
/// use scrabbler::core::Rack;
/// use scrabbler::solver::Expansions;
///
/// let rack = Rack::new("c_t").unwrap();
/// let words: Vec<String> = Expansions::new(rack.tiles()).collect();
///
/// assert_eq!(words.len(), 26);
/// assert_eq!(words[0], "cat");
/// assert_eq!(words[25], "czt");
/// ```
#[derive(Debug, Clone)]
pub struct Expansions {
    buffer: Vec<u8>,
    blanks: Vec<usize>,
    digits: Vec<usize>,
    remaining: Option<usize>,
    done: bool,
}

impl Expansions {
    #[must_use]
    pub fn new(tiles: &[Tile]) -> Self {
        let mut blanks = Vec::new();
        let buffer = tiles
            .iter()
            .enumerate()
            .map(|(position, &tile)| match tile {
                Tile::Letter(b) => b,
                Tile::Blank => {
                    blanks.push(position);
                    ALPHABET[0]
                }
            })
            .collect();

        let remaining = u32::try_from(blanks.len())
            .ok()
            .and_then(|k| 26_usize.checked_pow(k));

        Self {
            buffer,
            digits: vec![0; blanks.len()],
            blanks,
            remaining,
            done: false,
        }
    }

    /// Number of blanks being substituted
    #[must_use]
    pub fn blank_count(&self) -> usize {
        self.blanks.len()
    }

    /// Advance the odometer; returns false after the last combination
    fn advance(&mut self) -> bool {
        for slot in (0..self.blanks.len()).rev() {
            let position = self.blanks[slot];
            self.digits[slot] += 1;
            if self.digits[slot] < ALPHABET.len() {
                self.buffer[position] = ALPHABET[self.digits[slot]];
                return true;
            }
            self.digits[slot] = 0;
            self.buffer[position] = ALPHABET[0];
        }
        false
    }

    fn current(&self) -> String {
        self.buffer.iter().map(|&b| char::from(b)).collect()
    }
}

impl Iterator for Expansions {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let word = self.current();
        self.done = !self.advance();
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining = remaining.saturating_sub(1);
        }
        Some(word)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (self.done, self.remaining) {
            (true, _) => (0, Some(0)),
            (false, Some(remaining)) => (remaining, Some(remaining)),
            (false, None) => (usize::MAX, None),
        }
    }
}
