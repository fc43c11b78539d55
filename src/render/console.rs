//! Terminal rendering of the board.

use super::Renderer;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use noughts_core::GameState;
use std::io::{Stdout, Write};

/// Clears the terminal and draws the board with grid labels.
///
/// The cells of a winning line blink.
pub struct ConsoleRenderer<W> {
    output: W,
}

impl<W: Write> ConsoleRenderer<W> {
    /// Creates a renderer writing to `output`.
    pub fn new(output: W) -> Self {
        Self { output }
    }
}

impl ConsoleRenderer<Stdout> {
    /// Creates a renderer writing to stdout.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn render(&mut self, state: &GameState) -> std::io::Result<()> {
        queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;

        let winning = state.winning_cells();
        let cells: Vec<String> = state
            .board()
            .cells()
            .iter()
            .enumerate()
            .map(|(index, cell)| {
                let symbol = cell.symbol().to_string();
                if winning.contains(&index) {
                    symbol.slow_blink().to_string()
                } else {
                    symbol
                }
            })
            .collect();

        write_grid(&mut self.output, &cells)?;

        if let Some(winner) = state.winner() {
            writeln!(self.output, "{winner} wins \u{1F389}")?;
        } else if state.tie() {
            writeln!(self.output, "No one wins this time \u{1F610}")?;
        }
        self.output.flush()
    }
}

fn write_grid<W: Write>(out: &mut W, cells: &[String]) -> std::io::Result<()> {
    writeln!(out, "     A   B   C")?;
    writeln!(out, "   ------------")?;
    for row in 0..3 {
        let [a, b, c] = [&cells[3 * row], &cells[3 * row + 1], &cells[3 * row + 2]];
        writeln!(out, "{} ┆  {} │ {} │ {}", row + 1, a, b, c)?;
        if row < 2 {
            writeln!(out, "  ┆ ───┼───┼───")?;
        }
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_core::Mark;

    fn render(cells: &str, starting_mark: Mark) -> String {
        let state = GameState::new(cells.parse().unwrap(), starting_mark).unwrap();
        let mut renderer = ConsoleRenderer::new(Vec::new());
        renderer.render(&state).unwrap();
        String::from_utf8(renderer.output).unwrap()
    }

    #[test]
    fn test_draws_grid() {
        let text = render("XXOXO  O ", Mark::Cross);
        assert!(text.contains("     A   B   C"));
        assert!(text.contains("1 ┆  X │ X │ O"));
        assert!(text.contains("2 ┆  X │ O │  "));
        assert!(text.contains("3 ┆    │ O │  "));
        assert!(!text.contains("wins"));
    }

    #[test]
    fn test_announces_winner() {
        let text = render("XXX O O  ", Mark::Cross);
        assert!(text.contains("X wins"));
        // Winning cells carry the blink escape code.
        assert!(text.contains("\u{1b}[5m"));
    }

    #[test]
    fn test_announces_tie() {
        let text = render("XOXXOOOXX", Mark::Cross);
        assert!(text.contains("No one wins this time"));
        assert!(!text.contains("\u{1b}[5m"));
    }
}
