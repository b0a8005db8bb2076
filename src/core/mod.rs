//! Core domain types for rack solving
//!
//! Tiles, racks and letter values. Everything here is pure and independent of the solver.

mod rack;
mod score;
mod tile;

pub use rack::Rack;
pub use score::{LetterScores, ScoreError};
pub use tile::{ALPHABET, Tile, TileError, WILDCARD};
