use super::super::tables::KNIGHT_TARGETS;
use super::super::{Piece, Position, SquareSet};

impl Position {
    pub(crate) fn knight_seeing(&self, piece: Piece) -> SquareSet {
        self.leaper_targets(piece, &KNIGHT_TARGETS)
    }
}
