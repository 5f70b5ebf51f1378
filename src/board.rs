use std::fmt::{Display, Formatter};

use itertools::Itertools;
use nom::Finish;

use crate::error::{Error, Result};
use crate::placement::Placement;
use crate::square::Square;
use crate::tile::Tile;

/// A fixed size grid of [Square]s, addressed by `(x, y)` with `x` the column and `y` the row.
///
/// Cloning a board gives an independent snapshot that shares nothing with the original.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Board {
    num_rows: usize,
    num_cols: usize,
    squares: Vec<Square>,
}

/// The different shapes a board can be restored from.
#[derive(Debug, Clone)]
pub enum BoardSource<'a> {
    Board(&'a Board),
    /// One string per row, each a whitespace-separated list of multipliers.
    Rows(Vec<&'a str>),
    /// All rows in a single string, separated by newlines.
    Text(&'a str),
}

impl Board {
    /// An empty board where every square has multiplier 1.
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        assert!(num_rows > 0 && num_cols > 0, "Board must have at least one square");
        Board {
            num_rows,
            num_cols,
            squares: vec![Square::default(); num_rows * num_cols],
        }
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if x < self.num_cols && y < self.num_rows {
            Ok(y * self.num_cols + x)
        } else {
            Err(Error::OutOfBounds {
                x,
                y,
                num_cols: self.num_cols,
                num_rows: self.num_rows,
            })
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Result<&Square> {
        let index = self.index(x, y)?;
        Ok(&self.squares[index])
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Result<&mut Square> {
        let index = self.index(x, y)?;
        Ok(&mut self.squares[index])
    }

    /// Replace the square at `(x, y)`, including its multiplier.
    pub fn set_square(&mut self, x: usize, y: usize, square: Square) -> Result<()> {
        *self.get_mut(x, y)? = square;
        Ok(())
    }

    /// Put `tile` on the square at `(x, y)`, keeping its multiplier.
    pub fn set_tile(&mut self, x: usize, y: usize, tile: Tile) -> Result<()> {
        self.get_mut(x, y)?.set_tile(tile);
        Ok(())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Square]> + '_ {
        self.squares.chunks(self.num_cols)
    }

    pub fn columns(&self) -> Vec<Vec<&Square>> {
        (0..self.num_cols)
            .map(|x| (0..self.num_rows).map(|y| &self.squares[y * self.num_cols + x]).collect_vec())
            .collect_vec()
    }

    pub fn score(&self) -> u64 {
        self.squares.iter().map(Square::score).sum()
    }

    /// A snapshot of this board with `tiles` written over the run of squares starting at `placement`.
    pub fn place(&self, placement: Placement, tiles: &[Tile]) -> Result<Board> {
        let mut board = self.clone();
        for ((x, y), &tile) in placement.coords(tiles.len()).zip(tiles) {
            board.set_tile(x, y, tile)?;
        }
        Ok(board)
    }

    pub fn restore(source: BoardSource) -> Result<Board> {
        match source {
            BoardSource::Board(board) => Ok(Board::restore_from_board(board)),
            BoardSource::Rows(rows) => Board::restore_from_rows(&rows),
            BoardSource::Text(text) => Board::restore_from_text(text),
        }
    }

    pub fn restore_from_board(board: &Board) -> Board {
        board.clone()
    }

    /// Build an empty board from rows of multipliers, eg. `["1 1 2", "3 1 1"]`.
    pub fn restore_from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Board> {
        let multipliers: Vec<Vec<u32>> = rows
            .iter()
            .map(|row| {
                let row = row.as_ref();
                parse::row(row)
                    .finish()
                    .map(|(_, values)| values)
                    .map_err(|_| Error::InvalidLayout(format!("cannot parse row {:?}", row)))
            })
            .collect::<Result<_>>()?;

        let num_rows = multipliers.len();
        let num_cols = match multipliers.first() {
            None => return Err(Error::InvalidLayout("no rows".to_owned())),
            Some(first) => first.len(),
        };

        if let Some((y, row)) = multipliers.iter().find_position(|row| row.len() != num_cols) {
            return Err(Error::InvalidLayout(format!(
                "row {} has {} squares, expected {}",
                y,
                row.len(),
                num_cols
            )));
        }
        if multipliers.iter().flatten().any(|&m| m == 0) {
            return Err(Error::InvalidLayout("multipliers must be positive".to_owned()));
        }

        let mut board = Board::new(num_rows, num_cols);
        for (y, row) in multipliers.iter().enumerate() {
            for (x, &multiplier) in row.iter().enumerate() {
                board.set_square(x, y, Square::empty(multiplier))?;
            }
        }
        Ok(board)
    }

    /// Same as [Board::restore_from_rows] with the rows given as lines of a single string.
    /// Blank lines are skipped.
    pub fn restore_from_text(text: &str) -> Result<Board> {
        let rows = text.lines().filter(|line| !line.trim().is_empty()).collect_vec();
        Board::restore_from_rows(&rows)
    }

    /// Every row rendered as its square tokens joined by a single space.
    pub fn to_rows(&self) -> Vec<String> {
        self.rows().map(|row| row.iter().join(" ")).collect_vec()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_rows().join("\n"))
    }
}

mod parse {
    use nom::character::complete::{digit1, space0, space1};
    use nom::combinator::{eof, map_res};
    use nom::multi::separated_list1;
    use nom::sequence::{delimited, terminated};
    use nom::IResult;

    pub fn row(input: &str) -> IResult<&str, Vec<u32>> {
        let multiplier = map_res(digit1, |s: &str| s.parse::<u32>());
        terminated(delimited(space0, separated_list1(space1, multiplier), space0), eof)(input)
    }
}
