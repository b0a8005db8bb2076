//! Rack representation
//!
//! A Rack is the ordered list of tiles a player holds, parsed and validated from a string.

use super::tile::{Tile, TileError};
use std::fmt;
use std::str::FromStr;

/// An ordered sequence of tiles
///
/// Duplicate letters are kept as-is; the solver collapses the duplicate words they produce.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rack {
    tiles: Vec<Tile>,
}

impl Rack {
    /// Parse a rack from a string of letters and wildcards
    ///
    /// Parsing is case-insensitive. An empty string is a valid (empty) rack.
    ///
    /// # Errors
    /// Returns `TileError::InvalidCharacter` naming the first character that is
    /// neither a letter nor the wildcard.
    ///
    /// # Examples
    /// ```
    /// use scrabbler::core::Rack;
    ///
    /// let rack = Rack::new("CaT_").unwrap();
    /// assert_eq!(rack.len(), 4);
    /// assert_eq!(rack.blank_count(), 1);
    /// assert_eq!(rack.to_string(), "cat_");
    ///
    /// assert!(Rack::new("ca7").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, TileError> {
        let tiles = text
            .chars()
            .enumerate()
            .map(|(position, ch)| Tile::from_char(ch, position))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { tiles })
    }

    /// Build a rack from already-validated tiles
    #[must_use]
    pub const fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of blank tiles on the rack
    #[must_use]
    pub fn blank_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_blank()).count()
    }
}

impl FromStr for Rack {
    type Err = TileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.tiles {
            write!(f, "{tile}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rack_creation_valid() {
        let rack = Rack::new("cat").unwrap();
        assert_eq!(
            rack.tiles(),
            &[Tile::Letter(b'c'), Tile::Letter(b'a'), Tile::Letter(b't')]
        );
    }

    #[test]
    fn rack_creation_uppercase_normalized() {
        let rack = Rack::new("CAT").unwrap();
        assert_eq!(rack.to_string(), "cat");
    }

    #[test]
    fn rack_empty_is_valid() {
        let rack = Rack::new("").unwrap();
        assert!(rack.is_empty());
        assert_eq!(rack.blank_count(), 0);
    }

    #[test]
    fn rack_keeps_duplicates() {
        let rack = Rack::new("aab").unwrap();
        assert_eq!(rack.len(), 3);
    }

    #[test]
    fn rack_counts_blanks() {
        let rack = Rack::new("_a_").unwrap();
        assert_eq!(rack.blank_count(), 2);
    }

    #[test]
    fn rack_rejects_first_invalid_character() {
        assert_eq!(
            Rack::new("ab1c2"),
            Err(TileError::InvalidCharacter { ch: '1', position: 2 })
        );
    }

    #[test]
    fn rack_from_str() {
        let rack: Rack = "qi".parse().unwrap();
        assert_eq!(rack.len(), 2);
    }
}
