use crate::domain::board::Board;
use crate::domain::models::GameResult;
use crate::domain::services::GameFrontend;
use crate::infrastructure::display::BoardView;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

/// Line-oriented terminal I/O. Generic over reader and writer so whole
/// sessions can be scripted in tests.
pub struct ConsoleFrontend<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl ConsoleFrontend<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleFrontend<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            color: true,
        }
    }

    pub fn without_color(mut self) -> Self {
        self.color = false;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `prompt` and reads one line. `Ok(None)` at end of input.
    /// Bytes that are not UTF-8 are replaced, so garbage still reaches the
    /// caller as text to be rejected.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }
}

impl<R: BufRead, W: Write> GameFrontend for ConsoleFrontend<R, W> {
    fn display(&mut self, board: &Board) -> io::Result<()> {
        let view = if self.color {
            BoardView::new(board)
        } else {
            BoardView::plain(board)
        };
        write!(self.output, "{}", view)
    }

    fn prompt_move(&mut self) -> io::Result<Option<String>> {
        self.ask("Enter your move (1-9): ")
    }

    fn reject(&mut self, reason: &str) -> io::Result<()> {
        writeln!(self.output, "Invalid move: {}", reason)
    }

    fn announce(&mut self, result: GameResult) -> io::Result<()> {
        let text = match result {
            GameResult::PlayerWin => "Player X wins!",
            GameResult::ComputerWin => "Computer wins!",
            GameResult::Draw => "It's a draw!",
        };
        writeln!(self.output, "{}", text)
    }
}
