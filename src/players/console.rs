//! Human player that types moves at the console.

use super::{PlayError, Player};
use crate::coordinates::parse_coordinates;
use noughts_core::{GameError, GameState, Mark, Move};
use std::io::{BufRead, StdinLock, Stdout, Write};
use tracing::{debug, instrument};

/// Human player reading `A1`-style coordinates from a line-based input.
pub struct ConsolePlayer<R, W> {
    mark: Mark,
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    /// Creates a console player over arbitrary input and output streams.
    pub fn new(mark: Mark, input: R, output: W) -> Self {
        Self {
            mark,
            name: format!("Human ({mark})"),
            input,
            output,
        }
    }

    fn read_line(&mut self) -> Result<String, PlayError> {
        write!(self.output, "{}'s move: ", self.mark)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PlayError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}

impl ConsolePlayer<StdinLock<'static>, Stdout> {
    /// Creates a console player on stdin and stdout.
    pub fn stdio(mark: Mark) -> Self {
        Self::new(mark, std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Player for ConsolePlayer<R, W> {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }

    /// Prompts until an empty cell is entered.
    ///
    /// Returns `None` without prompting if the game is already over.
    #[instrument(skip_all, fields(mark = %self.mark))]
    fn get_move(&mut self, state: &GameState) -> Result<Option<Move>, PlayError> {
        while !state.game_over() {
            let line = self.read_line()?;
            let position = match parse_coordinates(&line) {
                Ok(position) => position,
                Err(err) => {
                    debug!(error = %err, "Rejected coordinates");
                    writeln!(self.output, "Please provide coordinates in the form of A1 or 1A")?;
                    continue;
                }
            };

            match state.make_move_to(position.to_index()) {
                Ok(mv) => {
                    debug!(position = %position, "Human chose position");
                    return Ok(Some(mv));
                }
                Err(GameError::Move(err)) => {
                    debug!(error = %err, "Rejected move");
                    writeln!(self.output, "That cell is already occupied.")?;
                }
                Err(err) => return Err(err.into()),
            }
        }
        Ok(None)
    }
}
