use crate::domain::coordinate::{Move, SIDE};
use crate::domain::models::{Cell, Mark};
use derive_more::{Display, Error};
use std::ops::Deref;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    #[display("cell {_0:?} is off the board")]
    OutOfRange(#[error(not(source))] Move),
    #[display("cell {_0:?} is already taken")]
    Occupied(#[error(not(source))] Move),
    #[display("cannot read board from '{_0}'")]
    Malformed(#[error(not(source))] String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; SIDE]; SIDE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(cells: [[Cell; SIDE]; SIDE]) -> Self {
        Self { cells }
    }

    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; SIDE]; SIDE];
    }

    pub fn get(&self, mv: Move) -> Option<Cell> {
        self.cells.get(mv.row)?.get(mv.col).copied()
    }

    pub fn is_empty_at(&self, mv: Move) -> bool {
        matches!(self.get(mv), Some(Cell::Empty))
    }

    /// Writes `mark` into an empty cell. Taken cells are never overwritten.
    pub fn set(&mut self, mv: Move, mark: Mark) -> Result<(), BoardError> {
        match self.get(mv) {
            None => Err(BoardError::OutOfRange(mv)),
            Some(Cell::Taken(_)) => Err(BoardError::Occupied(mv)),
            Some(Cell::Empty) => {
                self.cells[mv.row][mv.col] = Cell::Taken(mark);
                Ok(())
            }
        }
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| !c.is_empty())
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        Move::all().filter(move |&mv| self.is_empty_at(mv))
    }

    pub fn rows(&self) -> &[[Cell; SIDE]; SIDE] {
        &self.cells
    }

    /// Places `mark` on an empty cell for as long as the returned guard lives.
    /// The cell is emptied again when the guard drops, whichever way the
    /// caller leaves its scope. Returns `None` for taken or off-board cells.
    pub fn speculate(&mut self, mv: Move, mark: Mark) -> Option<Speculation<'_>> {
        if !self.is_empty_at(mv) {
            return None;
        }
        self.cells[mv.row][mv.col] = Cell::Taken(mark);
        Some(Speculation { board: self, mv })
    }
}

pub struct Speculation<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        self.board.cells[self.mv.row][self.mv.col] = Cell::Empty;
    }
}

/// Reads nine cells in row-major order: `X`, `O`, and `.`, `_` or `-` for
/// empty. Whitespace, `|` and `/` are skipped.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(SIDE * SIDE);
        for ch in s.chars() {
            let cell = match ch {
                'X' | 'x' => Cell::Taken(Mark::X),
                'O' | 'o' => Cell::Taken(Mark::O),
                '.' | '_' | '-' => Cell::Empty,
                c if c.is_whitespace() || c == '|' || c == '/' => continue,
                _ => return Err(BoardError::Malformed(s.to_string())),
            };
            cells.push(cell);
        }
        if cells.len() != SIDE * SIDE {
            return Err(BoardError::Malformed(s.to_string()));
        }

        let mut board = Board::new();
        for (i, cell) in cells.into_iter().enumerate() {
            board.cells[i / SIDE][i % SIDE] = cell;
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_rejects_taken_cell() {
        let mut board = Board::new();
        board.set(Move::new(0, 1), Mark::X).unwrap();
        assert_eq!(
            board.set(Move::new(0, 1), Mark::O),
            Err(BoardError::Occupied(Move::new(0, 1)))
        );
        assert_eq!(board.get(Move::new(0, 1)), Some(Cell::Taken(Mark::X)));
    }

    #[test]
    fn test_set_rejects_off_board() {
        let mut board = Board::new();
        assert_eq!(
            board.set(Move::new(3, 0), Mark::X),
            Err(BoardError::OutOfRange(Move::new(3, 0)))
        );
        assert_eq!(board.get(Move::new(0, 3)), None);
    }

    #[test]
    fn test_is_full_and_reset() {
        let mut board: Board = "XOX/OXO/OXO".parse().unwrap();
        assert!(board.is_full());
        assert_eq!(board.empty_cells().count(), 0);

        board.reset();
        assert!(!board.is_full());
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_speculation_restores_cell() {
        let mut board: Board = "X../.O./...".parse().unwrap();
        let before = board.clone();
        {
            let trial = board.speculate(Move::new(2, 2), Mark::X).unwrap();
            assert_eq!(trial.get(Move::new(2, 2)), Some(Cell::Taken(Mark::X)));
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_speculation_refuses_taken_cell() {
        let mut board: Board = "X../.../...".parse().unwrap();
        assert!(board.speculate(Move::new(0, 0), Mark::O).is_none());
        assert_eq!(board.get(Move::new(0, 0)), Some(Cell::Taken(Mark::X)));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("XO".parse::<Board>().is_err());
        assert!("XOZ/.../...".parse::<Board>().is_err());
    }
}
