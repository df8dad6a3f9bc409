//! Move suggestion collaborators.
//!
//! A suggester is anything that can look at a position and name a move for
//! the side to move. The rules engine never depends on one; the command
//! interpreter asks a suggester and then submits the answer through
//! `Position::attempt_move` like any other move, so a bad suggestion is
//! rejected the same way a bad typed move is.
//!
//! # Implementations
//!
//! - [`StockfishSuggester`] talks UCI to an external engine process.
//! - [`RandomSuggester`] picks a uniformly random legal move, optionally
//!   from a fixed seed so games can be replayed.
//!
//! # Synchronous Design
//!
//! `suggest()` blocks until an answer is available. For Stockfish this is
//! bounded by the configured `movetime`.

mod random;
mod stockfish;

pub use random::*;
pub use stockfish::*;

use crate::error::SuggestError;
use crate::game_repr::{Move, Position};

/// Something that can propose a move for the side to move.
pub trait MoveSuggester {
    /// Propose a move for `position.side_to_move()`.
    ///
    /// The move is not guaranteed to be legal; callers validate it.
    fn suggest(&mut self, position: &Position) -> Result<Move, SuggestError>;

    /// Adjust playing strength where the suggester has one. Levels run
    /// from 1 to 20.
    fn set_difficulty(&mut self, _level: u8) {}

    /// Display name for messages.
    fn name(&self) -> &str {
        "suggester"
    }
}
