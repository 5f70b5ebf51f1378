//! Loading the input document.
//!
//! The input is a JSON object with three fields:
//! * `board`: the layout of score multipliers, either an array with one string per row
//!     or a single string with one row per line. Multipliers within a row are separated by whitespace.
//! * `tiles`: the hand, as an array of tile tokens like `"A1"` (see [Tile::create]).
//! * `dictionary`: the candidate words.
//!
//! ```json
//! {
//!   "board": ["1 1 2", "1 3 1", "2 1 1"],
//!   "tiles": ["A1", "T1", "E1"],
//!   "dictionary": ["AT", "EAT", "ATE"]
//! }
//! ```
//!
//! The result is printed through the [Display](std::fmt::Display) implementation of [Board].
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::board::{Board, BoardSource};
use crate::dictionary::Dictionary;
use crate::error::{Error, Result};
use crate::hand::Hand;
use crate::opening::BestOpening;
use crate::tile::Tile;

/// A decoded input document.
#[derive(Debug, Clone)]
pub struct Input {
    pub board: Board,
    pub hand: Hand,
    pub dictionary: Dictionary,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid input document: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Input(#[from] Error),
}

#[derive(Deserialize)]
struct Document {
    board: Value,
    tiles: Value,
    dictionary: Vec<String>,
}

impl Input {
    pub fn load(path: impl AsRef<Path>) -> std::result::Result<Input, LoadError> {
        let path = path.as_ref();
        debug!("loading input from {}", path.display());

        let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_owned(),
            source,
        })?;
        Input::from_json(&json)
    }

    pub fn from_json(json: &str) -> std::result::Result<Input, LoadError> {
        let document: Document = serde_json::from_str(json)?;

        let input = Input {
            board: decode_board(&document.board)?,
            hand: decode_hand(&document.tiles)?,
            dictionary: Dictionary::create(document.dictionary),
        };

        debug!(
            "loaded {}x{} board, hand {}, {} words",
            input.board.num_cols(),
            input.board.num_rows(),
            input.hand,
            input.dictionary.len()
        );
        Ok(input)
    }

    pub fn into_opening(self) -> BestOpening {
        BestOpening::new(self.board, self.hand, self.dictionary)
    }
}

fn decode_board(value: &Value) -> Result<Board> {
    match value {
        Value::String(text) => Board::restore(BoardSource::Text(text)),
        Value::Array(rows) => {
            let rows = rows
                .iter()
                .map(|row| {
                    row.as_str()
                        .ok_or_else(|| Error::TypeMismatch(format!("board row must be a string, got {}", row)))
                })
                .collect::<Result<Vec<_>>>()?;
            Board::restore(BoardSource::Rows(rows))
        }
        other => Err(Error::TypeMismatch(format!("cannot restore a board from {}", other))),
    }
}

fn decode_hand(value: &Value) -> Result<Hand> {
    let tokens = value
        .as_array()
        .ok_or_else(|| Error::TypeMismatch(format!("tiles must be an array, got {}", value)))?;

    let mut hand = Hand::new();
    for token in tokens {
        let token = token
            .as_str()
            .ok_or_else(|| Error::TypeMismatch(format!("cannot make a tile from {}", token)))?;
        hand.add(Tile::create(token)?);
    }
    Ok(hand)
}
