use crate::infrastructure::ai::TieBreakKind;
use crate::infrastructure::persistence::DEFAULT_LEADERBOARD;
use derive_more::{Display, Error, From};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_CONFIG_PATH: &str = "Config.toml";

#[derive(Debug, Display, Error, From)]
pub enum ConfigError {
    #[display("failed to read config: {_0}")]
    Io(io::Error),
    #[display("failed to parse config: {_0}")]
    Toml(toml::de::Error),
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub leaderboard: LeaderboardConfig,
    pub heuristic: HeuristicConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LeaderboardConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct HeuristicConfig {
    pub tie_break: TieBreakKind,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset.
    pub filter: String,
}

impl AppConfig {
    /// Reads `path` if it exists, falls back to defaults otherwise, then
    /// applies `NOUGHTS_*` environment overrides.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents = fs::read_to_string(path)?;
            toml::from_str(&contents)?
        } else {
            Self::default()
        };

        config.merge_env();
        Ok(config)
    }

    /// Logs the effective settings. Call once a subscriber is installed.
    pub fn log_summary(&self) {
        debug!(
            leaderboard = %self.leaderboard.path.display(),
            tie_break = ?self.heuristic.tie_break,
            log_filter = %self.logging.filter,
            "configuration loaded"
        );
    }

    fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("NOUGHTS_LEADERBOARD_PATH") {
            if !val.trim().is_empty() {
                self.leaderboard.path = PathBuf::from(val);
            }
        }
        if let Ok(val) = std::env::var("NOUGHTS_TIE_BREAK") {
            if let Ok(parsed) = val.parse() {
                self.heuristic.tie_break = parsed;
            }
        }
        if let Ok(val) = std::env::var("NOUGHTS_LOG_FILTER") {
            if !val.trim().is_empty() {
                self.logging.filter = val;
            }
        }
    }
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LEADERBOARD),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}
