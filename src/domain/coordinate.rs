use derive_more::{Display, Error};
use std::fmt;

pub const SIDE: usize = 3;

/// A board position, 0-indexed, both components in `0..SIDE`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveParseError {
    #[display("'{input}' is not a number")]
    NotANumber { input: String },
    #[display("{_0} is not between 1 and 9")]
    OutOfRange(#[error(not(source))] usize),
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Maps a 1-9 keypad index onto the grid: `row=(n-1)/3, col=(n-1)%3`.
    pub fn from_index(n: usize) -> Result<Self, MoveParseError> {
        if !(1..=SIDE * SIDE).contains(&n) {
            return Err(MoveParseError::OutOfRange(n));
        }
        Ok(Self::new((n - 1) / SIDE, (n - 1) % SIDE))
    }

    pub fn parse(input: &str) -> Result<Self, MoveParseError> {
        let trimmed = input.trim();
        let n = trimmed
            .parse::<usize>()
            .map_err(|_| MoveParseError::NotANumber {
                input: trimmed.to_string(),
            })?;
        Self::from_index(n)
    }

    pub fn index(&self) -> usize {
        self.row * SIDE + self.col + 1
    }

    /// All nine positions in row-major order.
    pub fn all() -> impl Iterator<Item = Move> {
        (0..SIDE * SIDE).map(|i| Move::new(i / SIDE, i % SIDE))
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
