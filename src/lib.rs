#![warn(missing_debug_implementations)]

//! Find the best opening move for a rack of letter tiles on a partially empty word game board.
//!
//! The main types are:
//! * [Tile](crate::tile::Tile), a letter together with the score it is worth.
//! * [Hand](crate::hand::Hand), the rack of tiles available to the player.
//! * [Square](crate::square::Square) and [Board](crate::board::Board),
//!     the grid of score multipliers the word is placed on.
//! * [Dictionary](crate::dictionary::Dictionary), the candidate words.
//! * [BestOpening](crate::opening::BestOpening), the search itself.
//!
//! The search first keeps the dictionary words that can be spelled with the hand and fit on the board,
//! then keeps only the words with the highest tile score, and finally tries every horizontal and vertical
//! placement of those words, returning the resulting board with the highest total score.
//!
//! # Examples
//!
//! ```
//! # use scrabble_opening::board::Board;
//! # use scrabble_opening::dictionary::Dictionary;
//! # use scrabble_opening::hand::Hand;
//! # use scrabble_opening::opening::BestOpening;
//! let board = Board::restore_from_text("1 1 1\n1 3 1\n1 1 1").unwrap();
//! let hand = Hand::create(["A1", "T1", "E2"]).unwrap();
//! let dictionary = Dictionary::create(["AT", "EAT", "ATE"]);
//!
//! let opening = BestOpening::new(board, hand, dictionary).find().unwrap();
//! println!("{}", opening.board);
//! assert_eq!(opening.score, 12);
//! ```

pub use error::{Error, Result};

pub mod error;

pub mod tile;
pub mod hand;
pub mod square;
pub mod board;
pub mod dictionary;

pub mod placement;
pub mod opening;

pub mod io;

pub mod util;
