use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use nom::Finish;

use crate::error::{Error, Result};

/// A single letter tile, together with the score it is worth.
///
/// Tiles are compared, ordered and hashed by letter only, the score is just carried along.
#[derive(Copy, Clone)]
pub struct Tile {
    letter: char,
    score: u32,
}

impl Tile {
    pub fn new(letter: char, score: u32) -> Self {
        Tile { letter, score }
    }

    /// Parse a tile token like `"A1"` or `"Q10"`: the first character is the letter and the rest is the score.
    ///
    /// The score must be a non-empty decimal number, anything else is rejected instead of being read as zero.
    pub fn create(token: &str) -> Result<Tile> {
        if token.is_empty() {
            return Err(Error::InvalidTile {
                token: token.to_owned(),
                reason: "empty token",
            });
        }

        match parse::tile(token).finish() {
            Ok((_, (letter, score))) => Ok(Tile::new(letter, score)),
            Err(_) => Err(Error::InvalidTile {
                token: token.to_owned(),
                reason: "expected a letter followed by a decimal score",
            }),
        }
    }

    pub fn letter(self) -> char {
        self.letter
    }

    pub fn score(self) -> u32 {
        self.score
    }
}

impl FromStr for Tile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Tile::create(s)
    }
}

/// Anything that identifies a letter: either a bare `char` or a [Tile].
pub trait AsLetter {
    fn as_letter(&self) -> char;
}

impl AsLetter for char {
    fn as_letter(&self) -> char {
        *self
    }
}

impl AsLetter for Tile {
    fn as_letter(&self) -> char {
        self.letter
    }
}

impl<T: AsLetter + ?Sized> AsLetter for &T {
    fn as_letter(&self) -> char {
        (**self).as_letter()
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.letter == other.letter
    }
}

impl Eq for Tile {}

impl PartialOrd for Tile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tile {
    fn cmp(&self, other: &Self) -> Ordering {
        self.letter.cmp(&other.letter)
    }
}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.letter.hash(state)
    }
}

impl Debug for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile('{}', {})", self.letter, self.score)
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.letter, self.score)
    }
}

mod parse {
    use nom::character::complete::{anychar, digit1};
    use nom::combinator::{eof, map_res, verify};
    use nom::sequence::{pair, terminated};
    use nom::IResult;

    pub fn tile(input: &str) -> IResult<&str, (char, u32)> {
        let letter = verify(anychar, |c: &char| !c.is_whitespace());
        let score = map_res(digit1, |s: &str| s.parse::<u32>());

        terminated(pair(letter, score), eof)(input)
    }
}
