use crate::core::{ScoreError, TileError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("Invalid rack: {0}")]
    Rack(#[from] TileError),

    #[error("Scoring error: {0}")]
    Score(#[from] ScoreError),
}

pub type SolveResult<T> = Result<T, SolveError>;
