//! Scrabble Rack Solver
//!
//! Finds every dictionary word playable from a rack of tiles, blanks included, and ranks
//! the words by score.
//!
//! # Quick Start
//!
//! ```rust
//! use scrabbler::core::{LetterScores, Rack};
//! use scrabbler::solver::{Dictionary, Solver};
//!
//! let dictionary = Dictionary::from_words(["cat", "cot", "cut", "at"]);
//! let scores = LetterScores::STANDARD;
//! let solver = Solver::new(&dictionary, &scores);
//!
//! // `_` is a blank tile: it can be any letter but scores nothing
//! let rack = Rack::new("c_t").unwrap();
//! let solution = solver.solve(&rack);
//! for entry in &solution.words {
//!     println!("{entry}"); // "4 cat", "4 cot", "4 cut"
//! }
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{SolveError, SolveResult};
pub use solver::solve;
