use crate::domain::board::Board;
use crate::domain::coordinate::Move;
use crate::domain::models::{GameResult, Mark};
use derive_more::{Display, Error, From};
use std::collections::BTreeMap;
use std::io;

/// Leaderboard points. Wider than a game result so stored totals never overflow.
pub type Score = i64;
pub type Scores = BTreeMap<String, Score>;

#[derive(Debug, Display, Error, From)]
pub enum ScoreStoreError {
    #[display("leaderboard I/O failed: {_0}")]
    Io(io::Error),
    #[display("leaderboard encoding failed: {_0}")]
    #[from(skip)]
    Encoding(#[error(not(source))] String),
}

/// Picks a move for `mark`. The board is lent mutably for trial placements
/// and must be handed back exactly as received.
pub trait PlayerStrategy {
    fn get_move(&mut self, board: &mut Board, mark: Mark) -> Option<Move>;
}

/// Everything the game loop needs from whoever is sitting at the console.
pub trait GameFrontend {
    fn display(&mut self, board: &Board) -> io::Result<()>;

    /// Raw text of the next move. `Ok(None)` once input is exhausted.
    fn prompt_move(&mut self) -> io::Result<Option<String>>;

    fn reject(&mut self, reason: &str) -> io::Result<()>;

    fn announce(&mut self, result: GameResult) -> io::Result<()>;
}

pub trait ScoreStore {
    /// Missing or unreadable stores yield an empty map.
    fn load_scores(&self) -> Scores;

    /// Replaces the stored leaderboard with `scores`.
    fn save_scores(&self, scores: &Scores) -> Result<(), ScoreStoreError>;

    /// Sets `name` to `score`, replacing any earlier entry for that name.
    fn record(&self, name: &str, score: Score) -> Result<Scores, ScoreStoreError> {
        let mut scores = self.load_scores();
        scores.insert(name.to_string(), score);
        self.save_scores(&scores)?;
        Ok(scores)
    }
}
