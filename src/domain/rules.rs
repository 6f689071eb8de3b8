use crate::domain::board::Board;
use crate::domain::coordinate::Move;
use crate::domain::models::{Cell, Mark};

const fn at(row: usize, col: usize) -> Move {
    Move { row, col }
}

/// The eight winning triples: rows, columns, then both diagonals.
pub const LINES: [[Move; 3]; 8] = [
    [at(0, 0), at(0, 1), at(0, 2)],
    [at(1, 0), at(1, 1), at(1, 2)],
    [at(2, 0), at(2, 1), at(2, 2)],
    [at(0, 0), at(1, 0), at(2, 0)],
    [at(0, 1), at(1, 1), at(2, 1)],
    [at(0, 2), at(1, 2), at(2, 2)],
    [at(0, 0), at(1, 1), at(2, 2)],
    [at(0, 2), at(1, 1), at(2, 0)],
];

pub fn has_won(board: &Board, mark: Mark) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&mv| board.get(mv) == Some(Cell::Taken(mark))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            for mark in [Mark::X, Mark::O] {
                let mut board = Board::new();
                for mv in line {
                    board.set(mv, mark).unwrap();
                }
                assert!(has_won(&board, mark), "{:?} on {:?}", mark, line);
                assert!(!has_won(&board, mark.opponent()), "{:?} on {:?}", mark, line);
            }
        }
    }

    #[test]
    fn test_empty_and_partial_boards() {
        assert!(!has_won(&Board::new(), Mark::X));
        assert!(!has_won(&Board::new(), Mark::O));

        let board: Board = "XX./OO./...".parse().unwrap();
        assert!(!has_won(&board, Mark::X));
        assert!(!has_won(&board, Mark::O));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "XOX/OXO/OXO".parse().unwrap();
        assert!(!has_won(&board, Mark::X));
        assert!(!has_won(&board, Mark::O));
    }
}
