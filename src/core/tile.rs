//! Rack tiles
//!
//! A tile is either a fixed lowercase letter or a blank that can stand in for any letter.

use std::fmt;
use thiserror::Error;

/// Character used to mark a blank tile in rack strings
pub const WILDCARD: char = '_';

/// The 26 letters a blank can stand in for, in substitution order
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// A single rack tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// A fixed letter, stored as a lowercase ASCII byte
    Letter(u8),
    /// A blank (wildcard) tile
    Blank,
}

/// Error type for rack characters that are neither letters nor the wildcard
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileError {
    #[error("invalid rack character {ch:?} at position {position} (expected a-z or '_')")]
    InvalidCharacter { ch: char, position: usize },
}

impl Tile {
    /// Parse one rack character, case-insensitively
    ///
    /// # Errors
    /// Returns `TileError::InvalidCharacter` for anything outside `a-z`, `A-Z` and `_`.
    pub fn from_char(ch: char, position: usize) -> Result<Self, TileError> {
        match ch {
            WILDCARD => Ok(Self::Blank),
            c if c.is_ascii_alphabetic() => Ok(Self::Letter(c.to_ascii_lowercase() as u8)),
            _ => Err(TileError::InvalidCharacter { ch, position }),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_blank(self) -> bool {
        matches!(self, Self::Blank)
    }

    /// The character this tile is written as in a rack string
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Letter(b) => b as char,
            Self::Blank => WILDCARD,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
