use crate::domain::board::{Board, BoardError};
use crate::domain::coordinate::Move;
use crate::domain::models::{GameResult, Mark};
use crate::domain::rules::has_won;
use crate::domain::services::{GameFrontend, PlayerStrategy};
use derive_more::{Display, Error, From};
use std::io;
use tracing::{debug, info, instrument};

pub const HUMAN: Mark = Mark::X;
pub const COMPUTER: Mark = Mark::O;

#[derive(Debug, Display, Error, From)]
pub enum GameError {
    #[display("input closed before the game finished")]
    #[from(skip)]
    InputClosed,
    #[display("console I/O failed: {_0}")]
    Io(io::Error),
    #[display("illegal move: {_0}")]
    Board(BoardError),
    #[display("computer found no free cell")]
    #[from(skip)]
    NoMoveAvailable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    AwaitingPlayerMove,
    PlayerMoved,
    AwaitingComputerMove,
    ComputerMoved,
    Finished(GameResult),
}

/// Runs one human-vs-computer game. The human plays `X` and always moves
/// first; the board belongs to the service for the length of a game.
pub struct GameService<'a> {
    board: Board,
    computer: Box<dyn PlayerStrategy + 'a>,
    phase: GamePhase,
}

impl<'a> GameService<'a> {
    pub fn new(computer: Box<dyn PlayerStrategy + 'a>) -> Self {
        GameService {
            board: Board::new(),
            computer,
            phase: GamePhase::AwaitingPlayerMove,
        }
    }

    /// Continues from a prepared position with the human to move.
    pub fn from_position(board: Board, computer: Box<dyn PlayerStrategy + 'a>) -> Self {
        GameService {
            board,
            computer,
            phase: GamePhase::AwaitingPlayerMove,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> Option<GameResult> {
        match self.phase {
            GamePhase::Finished(result) => Some(result),
            _ => None,
        }
    }

    /// Plays a fresh game to completion.
    #[instrument(skip_all)]
    pub fn play_game(
        &mut self,
        frontend: &mut dyn GameFrontend,
    ) -> Result<GameResult, GameError> {
        self.board.reset();
        self.phase = GamePhase::AwaitingPlayerMove;
        self.play_out(frontend)
    }

    /// Plays on from the current board without resetting it.
    pub fn play_out(&mut self, frontend: &mut dyn GameFrontend) -> Result<GameResult, GameError> {
        frontend.display(&self.board)?;

        let result = loop {
            if let Some(result) = self.is_game_over() {
                break result;
            }
            self.perform_next_step(frontend)?;
        };

        info!(?result, score = result.score(), "game finished");
        frontend.announce(result)?;
        Ok(result)
    }

    /// Advances the state machine by one transition.
    pub fn perform_next_step(
        &mut self,
        frontend: &mut dyn GameFrontend,
    ) -> Result<GamePhase, GameError> {
        let next = match self.phase {
            GamePhase::AwaitingPlayerMove => {
                let mv = self.read_player_move(frontend)?;
                self.board.set(mv, HUMAN)?;
                debug!(?mv, "player moved");
                frontend.display(&self.board)?;
                GamePhase::PlayerMoved
            }
            GamePhase::PlayerMoved => self.settle(HUMAN, GamePhase::AwaitingComputerMove),
            GamePhase::AwaitingComputerMove => {
                let mv = self
                    .computer
                    .get_move(&mut self.board, COMPUTER)
                    .ok_or(GameError::NoMoveAvailable)?;
                self.board.set(mv, COMPUTER)?;
                debug!(?mv, "computer moved");
                frontend.display(&self.board)?;
                GamePhase::ComputerMoved
            }
            GamePhase::ComputerMoved => self.settle(COMPUTER, GamePhase::AwaitingPlayerMove),
            finished @ GamePhase::Finished(_) => finished,
        };
        self.phase = next;
        Ok(next)
    }

    fn settle(&self, mover: Mark, next: GamePhase) -> GamePhase {
        if has_won(&self.board, mover) {
            GamePhase::Finished(if mover == HUMAN {
                GameResult::PlayerWin
            } else {
                GameResult::ComputerWin
            })
        } else if self.board.is_full() {
            GamePhase::Finished(GameResult::Draw)
        } else {
            next
        }
    }

    /// Re-prompts until the frontend supplies a free cell. Only a closed or
    /// failing input stream ends the wait.
    fn read_player_move(&self, frontend: &mut dyn GameFrontend) -> Result<Move, GameError> {
        loop {
            let Some(raw) = frontend.prompt_move()? else {
                return Err(GameError::InputClosed);
            };
            match Move::parse(&raw) {
                Ok(mv) if self.board.is_empty_at(mv) => return Ok(mv),
                Ok(mv) => frontend.reject(&format!("square {} is already taken", mv.index()))?,
                Err(e) => frontend.reject(&e.to_string())?,
            }
        }
    }
}
