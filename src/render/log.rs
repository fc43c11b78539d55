//! Headless rendering through tracing events.

use super::Renderer;
use noughts_core::GameState;
use tracing::info;

/// Renders each state as an `info` event, for unattended games.
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: usize,
}

impl LogRenderer {
    /// Creates a log renderer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, state: &GameState) -> std::io::Result<()> {
        self.frames += 1;
        let cells = state.board().to_string();
        info!(
            frame = self.frames,
            top = &cells[0..3],
            middle = &cells[3..6],
            bottom = &cells[6..9],
            "Board"
        );

        if let Some(winner) = state.winner() {
            info!(%winner, cells = ?state.winning_cells(), "Game won");
        } else if state.tie() {
            info!("Game tied");
        } else {
            info!(next = %state.current_mark(), "Awaiting move");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_core::Mark;

    #[test]
    fn test_counts_frames() {
        let mut renderer = LogRenderer::new();
        let state = GameState::start(Mark::Cross);
        renderer.render(&state).unwrap();
        renderer.render(&state).unwrap();
        assert_eq!(renderer.frames, 2);
    }
}
