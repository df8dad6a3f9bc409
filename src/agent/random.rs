use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::MoveSuggester;
use crate::error::SuggestError;
use crate::game_repr::{Move, Position};

/// Picks uniformly among the legal moves, promotions counted per piece.
pub struct RandomSuggester {
    rng: StdRng,
}

impl RandomSuggester {
    /// Seeded from the OS.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Same seed, same sequence of suggestions for the same positions.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSuggester {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSuggester for RandomSuggester {
    fn suggest(&mut self, position: &Position) -> Result<Move, SuggestError> {
        let moves = position.legal_moves();
        let choice = moves.choose(&mut self.rng).copied().ok_or(SuggestError::NoMove)?;
        debug!("random pick {} out of {} moves", choice, moves.len());
        Ok(choice)
    }

    fn name(&self) -> &str {
        "random"
    }
}
