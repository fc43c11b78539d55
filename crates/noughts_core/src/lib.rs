//! Pure tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Cell`] and the immutable [`Board`]
//! - **State**: [`GameState`], a validated board plus starting mark, from
//!   which turn order, winner, tie and legal moves are derived
//! - **Moves**: [`Move`], a before/after transition record
//! - **Search**: [`find_best_move`], exhaustive minimax
//!
//! # Example
//!
//! ```
//! use noughts_core::{find_best_move, GameState, Mark};
//!
//! let state = GameState::start(Mark::Cross);
//! let opening = state.make_move_to(4)?;
//! let reply = find_best_move(opening.after_state())?.expect("game is not over");
//! assert_eq!(reply.mark(), Mark::Naught);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod error;
mod minimax;
mod position;
pub mod rules;
mod state;
mod types;

pub use action::Move;
pub use error::{BoardError, GameError, MoveError, ScoreError, StateError};
pub use minimax::{find_best_move, minimax};
pub use position::Position;
pub use rules::Win;
pub use state::{GameState, Score};
pub use types::{Board, CELL_COUNT, Cell, Mark};
