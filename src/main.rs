use anyhow::{Context, Result};
use clap::Parser;
use noughts::application::game_service::GameService;
use noughts::config::{AppConfig, DEFAULT_CONFIG_PATH};
use noughts::infrastructure::ai::{HeuristicBot, TieBreakKind};
use noughts::infrastructure::console::ConsoleFrontend;
use noughts::infrastructure::persistence::JsonLeaderboard;
use noughts::interface::console::ConsoleInterface;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Noughts and crosses against a fixed-priority computer player
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(version)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Leaderboard file, overrides the configured path
    #[arg(long)]
    leaderboard: Option<PathBuf>,

    /// How the computer chooses between equally good cells (scan or shuffled)
    #[arg(long)]
    tie_break: Option<TieBreakKind>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(path) = cli.leaderboard {
        config.leaderboard.path = path;
    }
    if let Some(tie_break) = cli.tie_break {
        config.heuristic.tie_break = tie_break;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with_writer(std::io::stderr)
        .init();
    config.log_summary();

    let bot = HeuristicBot::with_tie_break(config.heuristic.tie_break.build());
    let game = GameService::new(Box::new(bot));
    let store = JsonLeaderboard::new(&config.leaderboard.path);

    let mut interface = ConsoleInterface::new(ConsoleFrontend::stdio(), game, Box::new(store));
    interface.run()?;

    info!("session ended");
    Ok(())
}
