use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::error::Result;
use crate::tile::{AsLetter, Tile};

/// The rack of tiles available to the player.
///
/// Duplicate letters are separate physical tiles, possibly with different scores.
/// Cloning a hand gives a fully independent copy, which is what all speculative checks use
/// so the original hand is never diminished.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Hand {
    tiles: Vec<Tile>,
}

impl Hand {
    pub fn new() -> Self {
        Hand::default()
    }

    /// Build a hand from tile tokens, see [Tile::create].
    pub fn create<S: AsRef<str>>(tokens: impl IntoIterator<Item = S>) -> Result<Hand> {
        let mut hand = Hand::new();
        for token in tokens {
            hand.add(Tile::create(token.as_ref())?);
        }
        Ok(hand)
    }

    pub fn add(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn contains(&self, letter: impl AsLetter) -> bool {
        self.position(letter).is_some()
    }

    /// The first tile with the given letter.
    pub fn find(&self, letter: impl AsLetter) -> Option<Tile> {
        self.position(letter).map(|index| self.tiles[index])
    }

    /// Remove a single tile with the given letter, even if there are more of them.
    pub fn use_tile(&mut self, letter: impl AsLetter) -> Option<Tile> {
        let index = self.position(letter)?;
        Some(self.tiles.remove(index))
    }

    pub fn count(&self, letter: impl AsLetter) -> usize {
        let letter = letter.as_letter();
        self.tiles.iter().filter(|t| t.letter() == letter).count()
    }

    fn position(&self, letter: impl AsLetter) -> Option<usize> {
        let letter = letter.as_letter();
        self.tiles.iter().position(|t| t.letter() == letter)
    }

    /// Whether `word` can be spelled with the tiles in this hand, each tile used at most once.
    pub fn can_form(&self, word: &str) -> bool {
        let mut hand = self.clone();
        word.chars().all(|c| hand.use_tile(c).is_some())
    }

    /// Look up the tile for every letter of `word`. Tiles are found, not removed,
    /// so a repeated letter maps to the same tile each time.
    pub fn tiles_for(&self, word: &str) -> Option<Vec<Tile>> {
        word.chars().map(|c| self.find(c)).collect()
    }

    /// The summed tile score of `word`, `None` if a letter is missing from the hand.
    pub fn word_score(&self, word: &str) -> Option<u64> {
        word.chars().map(|c| self.find(c).map(|t| t.score() as u64)).sum()
    }
}

impl Display for Hand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.tiles.iter().join(", "))
    }
}
