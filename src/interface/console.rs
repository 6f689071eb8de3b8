use crate::application::game_service::{GameError, GameService};
use crate::domain::services::{Score, ScoreStore};
use crate::infrastructure::console::ConsoleFrontend;
use std::io::{BufRead, Write};
use tracing::{info, warn};

const MENU: &str = "\
1 - Play the game
2 - Save your last score to the leaderboard
3 - Load and display the leaderboard
q - End the program";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Choice {
    Play,
    Save,
    Show,
    Quit,
}

impl Choice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Choice::Play),
            "2" => Some(Choice::Save),
            "3" => Some(Choice::Show),
            "q" | "Q" => Some(Choice::Quit),
            _ => None,
        }
    }
}

/// The menu shell around games and the leaderboard.
pub struct ConsoleInterface<'a, R, W> {
    console: ConsoleFrontend<R, W>,
    game: GameService<'a>,
    store: Box<dyn ScoreStore + 'a>,
    last_score: Option<Score>,
}

impl<'a, R: BufRead, W: Write> ConsoleInterface<'a, R, W> {
    pub fn new(
        console: ConsoleFrontend<R, W>,
        game: GameService<'a>,
        store: Box<dyn ScoreStore + 'a>,
    ) -> Self {
        Self {
            console,
            game,
            store,
            last_score: None,
        }
    }

    pub fn last_score(&self) -> Option<Score> {
        self.last_score
    }

    pub fn into_console(self) -> ConsoleFrontend<R, W> {
        self.console
    }

    /// Runs the menu until the user quits or input ends.
    pub fn run(&mut self) -> Result<(), GameError> {
        self.console.say("Welcome to Noughts and Crosses!")?;

        loop {
            self.console.say(MENU)?;
            let Some(line) = self.console.ask("Enter your choice: ")? else {
                return Ok(());
            };

            match Choice::parse(&line) {
                Some(Choice::Play) => match self.game.play_game(&mut self.console) {
                    Ok(result) => self.last_score = Some(result.score()),
                    Err(GameError::InputClosed) => return Ok(()),
                    Err(e) => return Err(e),
                },
                Some(Choice::Save) => {
                    if !self.save_score()? {
                        return Ok(());
                    }
                }
                Some(Choice::Show) => self.show_leaderboard()?,
                Some(Choice::Quit) => {
                    self.console.say("Goodbye!")?;
                    return Ok(());
                }
                None => self.console.say("Please choose 1, 2, 3 or q.")?,
            }
        }
    }

    /// Returns `false` if input ended while asking for a name.
    fn save_score(&mut self) -> Result<bool, GameError> {
        let Some(score) = self.last_score else {
            self.console.say("Play a game first.")?;
            return Ok(true);
        };

        let Some(name) = self.console.ask("Enter your name: ")? else {
            return Ok(false);
        };
        if name.is_empty() {
            self.console.say("A name is needed to save a score.")?;
            return Ok(true);
        }

        match self.store.record(&name, score) {
            Ok(_) => {
                info!(%name, score, "score saved");
                self.console.say(&format!("Saved {} for {}.", score, name))?;
            }
            Err(e) => {
                warn!(error = %e, "could not save leaderboard");
                self.console.say(&format!("Could not save the score: {}", e))?;
            }
        }
        Ok(true)
    }

    fn show_leaderboard(&mut self) -> Result<(), GameError> {
        let scores = self.store.load_scores();
        if scores.is_empty() {
            self.console.say("No scores saved yet.")?;
        }
        for (name, score) in &scores {
            self.console.say(&format!("{}: {}", name, score))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_parsing() {
        assert_eq!(Choice::parse("1\n"), Some(Choice::Play));
        assert_eq!(Choice::parse(" 2"), Some(Choice::Save));
        assert_eq!(Choice::parse("3"), Some(Choice::Show));
        assert_eq!(Choice::parse("Q"), Some(Choice::Quit));
        assert_eq!(Choice::parse("4"), None);
        assert_eq!(Choice::parse(""), None);
    }
}
