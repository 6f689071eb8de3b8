use crate::domain::board::Board;
use crate::domain::coordinate::{Move, SIDE};
use crate::domain::models::{Cell, Mark};
use std::fmt;

const COLOR_RESET: &str = "\x1b[0m";
const COLOR_X: &str = "\x1b[37m";
const COLOR_O: &str = "\x1b[31m";
const COLOR_DIM: &str = "\x1b[90m";

/// Rows joined by `" | "`, each followed by a rule of dashes. Empty cells
/// show their keypad number so the player knows what to type.
pub struct BoardView<'a> {
    board: &'a Board,
    color: bool,
}

impl<'a> BoardView<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board, color: true }
    }

    pub fn plain(board: &'a Board) -> Self {
        Self {
            board,
            color: false,
        }
    }

    fn paint(&self, f: &mut fmt::Formatter<'_>, color: &str, s: &dyn fmt::Display) -> fmt::Result {
        if self.color {
            write!(f, "{}{}{}", color, s, COLOR_RESET)
        } else {
            write!(f, "{}", s)
        }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.board.rows().iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " | ")?;
                }
                match cell {
                    Cell::Taken(Mark::X) => self.paint(f, COLOR_X, &'X')?,
                    Cell::Taken(Mark::O) => self.paint(f, COLOR_O, &'O')?,
                    Cell::Empty => self.paint(f, COLOR_DIM, &Move::new(r, c).index())?,
                }
            }
            writeln!(f)?;
            writeln!(f, "{}", "-".repeat(SIDE * 3))?;
        }
        Ok(())
    }
}
