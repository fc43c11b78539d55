//! Exhaustive minimax search.
//!
//! The search walks the full remaining game tree with no pruning, depth
//! limit or transposition table. Tic-tac-toe is small enough (at most 9!
//! move sequences from an empty board) that this is affordable, and the
//! result is exact: a player following [`find_best_move`] never loses.

use super::action::Move;
use super::error::ScoreError;
use super::state::{GameState, Score};
use super::types::Mark;
use tracing::{debug, instrument};

/// Finds the best move for the mark due to play.
///
/// Every legal move is scored with [`minimax`] from the current mark's point
/// of view. The highest score wins; among equal scores the move with the
/// lowest cell index is kept. Returns `None` when there is no legal move.
#[instrument(skip(state), fields(board = %state.board(), mark = %state.current_mark()))]
pub fn find_best_move(state: &GameState) -> Result<Option<Move>, ScoreError> {
    let maximizer = state.current_mark();
    let mut best: Option<(Score, Move)> = None;

    for candidate in state.possible_moves() {
        let score = minimax(&candidate, maximizer, false)?;
        debug!(cell = candidate.cell_index(), score, "Scored candidate");
        match &best {
            Some((best_score, _)) if *best_score >= score => {}
            _ => best = Some((score, candidate)),
        }
    }

    if let Some((score, mv)) = &best {
        debug!(cell = mv.cell_index(), score, "Best move found");
    }
    Ok(best.map(|(_, mv)| mv))
}

/// Scores `mv` for `maximizer` by searching every continuation.
///
/// `choose_highest_score` says whose ply follows `mv`: `true` takes the
/// maximum over the replies, `false` the minimum. The flag flips every ply.
/// Finished positions score 1, 0 or -1 via
/// [`GameState::evaluate_score`].
pub fn minimax(mv: &Move, maximizer: Mark, choose_highest_score: bool) -> Result<Score, ScoreError> {
    let after = mv.after_state();
    if after.game_over() {
        return after.evaluate_score(maximizer);
    }

    let mut best: Option<Score> = None;
    for reply in after.possible_moves() {
        let score = minimax(&reply, maximizer, !choose_highest_score)?;
        best = Some(match best {
            None => score,
            Some(current) if choose_highest_score => current.max(score),
            Some(current) => current.min(score),
        });
    }

    // A state that is not over always has at least one reply.
    best.ok_or(ScoreError)
}
