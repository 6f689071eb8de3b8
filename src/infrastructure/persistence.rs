use crate::domain::services::{ScoreStore, ScoreStoreError, Scores};
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::{debug, instrument, warn};

pub const DEFAULT_LEADERBOARD: &str = "leaderboard.txt";

/// Leaderboard kept as one flat JSON object of `name -> score`.
#[derive(Clone, Debug)]
pub struct JsonLeaderboard {
    path: PathBuf,
}

impl JsonLeaderboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreStore for JsonLeaderboard {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load_scores(&self) -> Scores {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no leaderboard yet");
                return Scores::new();
            }
            Err(e) => {
                warn!(error = %e, "leaderboard unreadable, starting empty");
                return Scores::new();
            }
        };

        match serde_json::from_str::<Scores>(&contents) {
            Ok(scores) => scores,
            Err(e) => {
                warn!(error = %e, "leaderboard malformed, starting empty");
                Scores::new()
            }
        }
    }

    #[instrument(skip(self, scores), fields(path = %self.path.display(), entries = scores.len()))]
    fn save_scores(&self, scores: &Scores) -> Result<(), ScoreStoreError> {
        let json = serde_json::to_string(scores)
            .map_err(|e| ScoreStoreError::Encoding(e.to_string()))?;
        fs::write(&self.path, json)?;
        debug!("leaderboard written");
        Ok(())
    }
}
