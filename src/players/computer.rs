//! Computer players.
//!
//! Both players wait a fixed delay before answering so a human can follow
//! the game. Randomness comes from a seedable ChaCha generator, so a fixed
//! seed replays the same game.

use super::{PlayError, Player};
use derive_new::new;
use noughts_core::{GameState, Mark, Move, find_best_move};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;
use tracing::{debug, instrument};

/// Builds the move generator: deterministic with a seed, from OS entropy without.
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn think(delay: Duration) {
    if !delay.is_zero() {
        std::thread::sleep(delay);
    }
}

/// Computer player choosing uniformly among the legal moves.
#[derive(Debug, new)]
pub struct RandomPlayer {
    mark: Mark,
    delay: Duration,
    rng: ChaCha8Rng,
}

impl Player for RandomPlayer {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        "Random"
    }

    #[instrument(skip_all, fields(mark = %self.mark))]
    fn get_move(&mut self, state: &GameState) -> Result<Option<Move>, PlayError> {
        think(self.delay);
        let mv = state.random_move(&mut self.rng);
        debug!(choice = ?mv.as_ref().map(Move::cell_index), "Random player chose");
        Ok(mv)
    }
}

/// Computer player that never loses.
///
/// Opens at random on an empty board, since the search alone would always
/// pick the same opening. Every later move comes from
/// [`find_best_move`].
#[derive(Debug, new)]
pub struct MinimaxPlayer {
    mark: Mark,
    delay: Duration,
    rng: ChaCha8Rng,
}

impl Player for MinimaxPlayer {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        "Minimax"
    }

    #[instrument(skip_all, fields(mark = %self.mark))]
    fn get_move(&mut self, state: &GameState) -> Result<Option<Move>, PlayError> {
        think(self.delay);
        if state.game_not_started() {
            debug!("Opening at random");
            return Ok(state.random_move(&mut self.rng));
        }
        let mv = find_best_move(state)?;
        debug!(choice = ?mv.as_ref().map(Move::cell_index), "Minimax player chose");
        Ok(mv)
    }
}
