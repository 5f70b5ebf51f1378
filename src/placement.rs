use std::fmt::{Display, Formatter};
use std::ops::ControlFlow;

use internal_iterator::InternalIterator;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    pub const BOTH: [Direction; 2] = [Direction::Horizontal, Direction::Vertical];

    /// The `(dx, dy)` step between consecutive letters.
    pub fn delta(self) -> (usize, usize) {
        match self {
            Direction::Horizontal => (1, 0),
            Direction::Vertical => (0, 1),
        }
    }
}

/// Where a word goes: the square of its first letter and the direction it continues in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Placement {
    pub direction: Direction,
    pub x: usize,
    pub y: usize,
}

impl Placement {
    pub fn new(direction: Direction, x: usize, y: usize) -> Self {
        Placement { direction, x, y }
    }

    /// The coordinates covered by a word of length `len`.
    pub fn coords(self, len: usize) -> impl Iterator<Item = (usize, usize)> {
        let (dx, dy) = self.direction.delta();
        (0..len).map(move |i| (self.x + i * dx, self.y + i * dy))
    }
}

impl Display for Placement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let dir = match self.direction {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
        };
        write!(f, "{} at ({}, {})", dir, self.x, self.y)
    }
}

/// Every placement of a word with length `len` that fits on a board.
///
/// The order is fixed: first all horizontal placements by row and then by starting column,
/// then all vertical placements by column and then by starting row.
#[derive(Debug, Copy, Clone)]
pub struct Placements {
    num_cols: usize,
    num_rows: usize,
    len: usize,
}

impl Placements {
    pub fn new(num_cols: usize, num_rows: usize, len: usize) -> Self {
        Placements { num_cols, num_rows, len }
    }
}

impl InternalIterator for Placements {
    type Item = Placement;

    fn try_for_each<R, F>(self, mut f: F) -> ControlFlow<R>
    where
        F: FnMut(Self::Item) -> ControlFlow<R>,
    {
        let Placements { num_cols, num_rows, len } = self;

        // horizontal
        if len <= num_cols {
            for y in 0..num_rows {
                for x in 0..=(num_cols - len) {
                    f(Placement::new(Direction::Horizontal, x, y))?;
                }
            }
        }

        // vertical
        if len <= num_rows {
            for x in 0..num_cols {
                for y in 0..=(num_rows - len) {
                    f(Placement::new(Direction::Vertical, x, y))?;
                }
            }
        }

        ControlFlow::Continue(())
    }
}
