use std::fmt::{Display, Formatter};

use crate::tile::Tile;

/// A single board cell: an optional tile and a fixed score multiplier.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Square {
    tile: Option<Tile>,
    multiplier: u32,
}

impl Default for Square {
    fn default() -> Self {
        Square::empty(1)
    }
}

impl Square {
    pub fn new(tile: Option<Tile>, multiplier: u32) -> Self {
        assert!(multiplier >= 1, "Square multiplier must be positive");
        Square { tile, multiplier }
    }

    pub fn empty(multiplier: u32) -> Self {
        Square::new(None, multiplier)
    }

    pub fn tile(&self) -> Option<Tile> {
        self.tile
    }

    pub fn set_tile(&mut self, tile: Tile) {
        self.tile = Some(tile);
    }

    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    pub fn is_empty(&self) -> bool {
        self.tile.is_none()
    }

    /// An empty square is worth its multiplier, an occupied one the tile score times the multiplier.
    pub fn score(&self) -> u64 {
        match self.tile {
            None => self.multiplier as u64,
            Some(tile) => tile.score() as u64 * self.multiplier as u64,
        }
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.tile {
            None => write!(f, "{}", self.multiplier),
            Some(tile) => write!(f, "{}", tile.letter()),
        }
    }
}
