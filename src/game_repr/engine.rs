//! Entry points for playing a game: start one, then feed it moves.
//!
//! `Position::attempt_move` is the single way a game advances. It either
//! rejects the move with a [`MoveError`] and leaves the position untouched,
//! or applies it and updates the completion state for the side now to move.

use log::{debug, info};

use super::*;
use crate::error::MoveError;

/// Fresh game from a layout.
pub fn new_game(layout: Layout) -> Position {
    Position::new_game(layout)
}

/// Value-style variant of [`Position::attempt_move`]: returns the new
/// position and leaves `position` as it was.
pub fn attempt_move(position: &Position, mv: Move) -> Result<Position, MoveError> {
    let mut next = position.clone();
    next.attempt_move(mv)?;
    Ok(next)
}

impl Position {
    /// Validate `mv` against the rules and commit it.
    ///
    /// Checks run in a fixed order: game over, turn, shape, promotion, king
    /// safety. A rejected move leaves `self` unchanged.
    pub fn attempt_move(&mut self, mv: Move) -> Result<(), MoveError> {
        if self.completion.is_done() {
            return Err(MoveError::GameOver {
                completion: self.completion,
            });
        }

        let to_move = self.side_to_move();
        if mv.piece.side != to_move {
            return Err(MoveError::WrongTurn {
                side: mv.piece.side,
                to_move,
            });
        }

        self.validate(&mv)?;

        self.apply_unconditional(mv);
        debug!("{} plays {}{}", to_move, mv, self.check_annotation());

        self.settle_completion();
        Ok(())
    }

    /// Settle the game if the side now to move is mated or stalemated.
    pub(crate) fn settle_completion(&mut self) {
        let side = self.side_to_move();
        let mover = side.other();
        if self.has_any_legal_move(side) {
            return;
        }
        self.completion = if self.in_check(side) {
            Completion::Win { winner: mover }
        } else {
            Completion::Draw {
                reason: DrawReason::Stalemate,
            }
        };
        info!("game over after {}: {}", mover, self.completion);
    }
}
