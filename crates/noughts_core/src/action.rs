//! First-class move records.
//!
//! A move is a transition, not a side effect: it carries the state before
//! and after a mark was placed. Moves are only produced by
//! [`GameState`](super::GameState), so every move describes a legal
//! transition.

use super::{GameState, Mark, Position};
use serde::Serialize;

/// A move in tic-tac-toe: a mark placed in one cell, with the states
/// on either side of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    mark: Mark,
    cell_index: usize,
    before_state: GameState,
    after_state: GameState,
}

impl Move {
    pub(crate) fn new(
        mark: Mark,
        cell_index: usize,
        before_state: GameState,
        after_state: GameState,
    ) -> Self {
        Self {
            mark,
            cell_index,
            before_state,
            after_state,
        }
    }

    /// Returns the mark placed by this move.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the board index (0-8) of this move.
    pub fn cell_index(&self) -> usize {
        self.cell_index
    }

    /// Returns the named position of this move.
    pub fn position(&self) -> Position {
        Position::ALL[self.cell_index]
    }

    /// Returns the state the move was made from.
    pub fn before_state(&self) -> &GameState {
        &self.before_state
    }

    /// Returns the state the move leads to.
    pub fn after_state(&self) -> &GameState {
        &self.after_state
    }

    /// Consumes the move, keeping the resulting state.
    pub fn into_after_state(self) -> GameState {
        self.after_state
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {} ({})",
            self.mark,
            self.position().label(),
            self.position().coordinates()
        )
    }
}
