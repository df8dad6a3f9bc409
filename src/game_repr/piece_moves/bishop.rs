use super::super::{Piece, Position, SquareSet};
use super::BISHOP_DIRECTIONS;

impl Position {
    pub(crate) fn bishop_seeing(&self, piece: Piece) -> SquareSet {
        self.slide(piece, &BISHOP_DIRECTIONS)
    }
}
