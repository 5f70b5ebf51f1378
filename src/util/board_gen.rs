//! Utilities to generate random search instances, for tests and benchmarks.
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoroshiro64StarStar;

use crate::board::Board;
use crate::dictionary::Dictionary;
use crate::hand::Hand;
use crate::opening::BestOpening;
use crate::square::Square;
use crate::tile::Tile;

pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A deterministic rng, the same `seed` always generates the same instances.
pub fn seeded_rng(seed: u64) -> impl Rng {
    Xoroshiro64StarStar::seed_from_u64(seed)
}

/// An empty board with multipliers picked uniformly from `1..=max_multiplier`.
pub fn random_board(num_rows: usize, num_cols: usize, max_multiplier: u32, rng: &mut impl Rng) -> Board {
    let mut board = Board::new(num_rows, num_cols);
    for y in 0..num_rows {
        for x in 0..num_cols {
            let square = Square::empty(rng.gen_range(1..=max_multiplier));
            board.set_square(x, y, square).unwrap();
        }
    }
    board
}

/// A hand of `size` tiles with letters from `letters` and scores in `0..=max_score`.
pub fn random_hand(size: usize, letters: &str, max_score: u32, rng: &mut impl Rng) -> Hand {
    let letters = letters.chars().collect::<Vec<_>>();
    let mut hand = Hand::new();
    for _ in 0..size {
        let letter = *letters.choose(rng).unwrap();
        hand.add(Tile::new(letter, rng.gen_range(0..=max_score)));
    }
    hand
}

/// `count` words of length `1..=max_len`. About half of them are shuffled draws from `hand` and can be formed,
/// the rest use arbitrary letters from [LETTERS] and usually can't.
pub fn random_dictionary(hand: &Hand, count: usize, max_len: usize, rng: &mut impl Rng) -> Dictionary {
    let all_letters = LETTERS.chars().collect::<Vec<_>>();
    let mut dictionary = Dictionary::new();

    for _ in 0..count {
        let word = if rng.gen_bool(0.5) && !hand.is_empty() {
            let mut letters = hand.tiles().iter().map(|t| t.letter()).collect::<Vec<_>>();
            letters.shuffle(rng);
            let len = rng.gen_range(1..=max_len.min(letters.len()));
            letters[..len].iter().collect::<String>()
        } else {
            let len = rng.gen_range(1..=max_len);
            (0..len).map(|_| *all_letters.choose(rng).unwrap()).collect::<String>()
        };
        dictionary.add_word(word);
    }

    dictionary
}

/// A complete random search instance with a `num_rows x num_cols` board and a 7 tile hand.
pub fn random_opening(num_rows: usize, num_cols: usize, word_count: usize, rng: &mut impl Rng) -> BestOpening {
    let board = random_board(num_rows, num_cols, 3, rng);
    let hand = random_hand(7, "AEIOURSTLN", 10, rng);
    let dictionary = random_dictionary(&hand, word_count, 7, rng);
    BestOpening::new(board, hand, dictionary)
}
