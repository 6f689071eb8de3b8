use crate::domain::board::Board;
use crate::domain::coordinate::Move;
use crate::domain::models::Mark;
use crate::domain::rules::has_won;
use crate::domain::services::PlayerStrategy;
use tracing::debug;

pub mod tie_break;

pub use tie_break::{ScanOrder, Shuffled, TieBreak, TieBreakKind};

const CENTER: Move = Move { row: 1, col: 1 };
const CORNERS: [Move; 4] = [
    Move { row: 0, col: 0 },
    Move { row: 0, col: 2 },
    Move { row: 2, col: 0 },
    Move { row: 2, col: 2 },
];

/// Fixed-priority computer player: win, block, center, corner, anything.
pub struct HeuristicBot {
    tie_break: Box<dyn TieBreak>,
}

impl HeuristicBot {
    pub fn new() -> Self {
        Self::with_tie_break(Box::new(ScanOrder))
    }

    pub fn with_tie_break(tie_break: Box<dyn TieBreak>) -> Self {
        Self { tie_break }
    }

    /// Move for the computer (`O`). Does not commit anything to the board.
    pub fn choose_move(&mut self, board: &mut Board) -> Option<Move> {
        self.choose_move_for(board, Mark::O)
    }

    pub fn choose_move_for(&mut self, board: &mut Board, mark: Mark) -> Option<Move> {
        // Own win is scanned before the block so it always takes precedence.
        for candidate in [mark, mark.opponent()] {
            if let Some(mv) = completes_line(board, candidate) {
                debug!(?mv, line_for = %candidate, "heuristic: line completion");
                return Some(mv);
            }
        }

        if board.is_empty_at(CENTER) {
            debug!("heuristic: center");
            return Some(CENTER);
        }

        let corners: Vec<Move> = CORNERS
            .into_iter()
            .filter(|&mv| board.is_empty_at(mv))
            .collect();
        if let Some(mv) = self.tie_break.pick(&corners) {
            debug!(?mv, "heuristic: corner");
            return Some(mv);
        }

        let remaining: Vec<Move> = board.empty_cells().collect();
        let mv = self.tie_break.pick(&remaining);
        debug!(?mv, "heuristic: first free cell");
        mv
    }
}

impl Default for HeuristicBot {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerStrategy for HeuristicBot {
    fn get_move(&mut self, board: &mut Board, mark: Mark) -> Option<Move> {
        self.choose_move_for(board, mark)
    }
}

/// First empty cell, row-major, where `mark` would complete a line.
fn completes_line(board: &mut Board, mark: Mark) -> Option<Move> {
    Move::all().find(|&mv| {
        board
            .speculate(mv, mark)
            .is_some_and(|trial| has_won(&trial, mark))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_takes_center() {
        let mut b = Board::new();
        assert_eq!(HeuristicBot::new().choose_move(&mut b), Some(Move::new(1, 1)));
        assert_eq!(b, Board::new());
    }

    #[test]
    fn test_win_beats_block() {
        let mut b = board("OO./XX./...");
        let before = b.clone();
        assert_eq!(HeuristicBot::new().choose_move(&mut b), Some(Move::new(0, 2)));
        assert_eq!(b, before);
    }

    #[test]
    fn test_blocks_bottom_row() {
        let mut b = board(".../.../XX.");
        assert_eq!(HeuristicBot::new().choose_move(&mut b), Some(Move::new(2, 2)));
    }

    #[test]
    fn test_corner_after_center_taken() {
        let mut b = board(".../.X./...");
        assert_eq!(HeuristicBot::new().choose_move(&mut b), Some(Move::new(0, 0)));

        let mut b = board("X../.O./...");
        assert_eq!(HeuristicBot::new().choose_move(&mut b), Some(Move::new(0, 2)));
    }

    #[test]
    fn test_edge_when_corners_gone() {
        let mut b = board("XOX/.X./OXO");
        assert_eq!(HeuristicBot::new().choose_move(&mut b), Some(Move::new(1, 0)));
    }

    #[test]
    fn test_full_board_yields_none() {
        let mut b = board("XOX/OXO/OXO");
        assert_eq!(HeuristicBot::new().choose_move(&mut b), None);
    }

    #[test]
    fn test_plays_for_given_mark() {
        let mut b = board("XX./OO./...");
        let mut bot = HeuristicBot::new();
        assert_eq!(bot.get_move(&mut b, Mark::X), Some(Move::new(0, 2)));
        assert_eq!(bot.get_move(&mut b, Mark::O), Some(Move::new(1, 2)));
    }
}
