use thiserror::Error;

/// Everything that can go wrong while building the inputs or running the search.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum Error {
    #[error("illegal position ({x}, {y}) on a board with {num_cols} columns and {num_rows} rows")]
    OutOfBounds {
        x: usize,
        y: usize,
        num_cols: usize,
        num_rows: usize,
    },

    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    #[error("no word can be formed from the hand and placed on the board")]
    NoLegalPlacement,

    #[error("invalid tile {token:?}: {reason}")]
    InvalidTile { token: String, reason: &'static str },

    #[error("invalid board layout: {0}")]
    InvalidLayout(String),
}

pub type Result<T> = std::result::Result<T, Error>;
