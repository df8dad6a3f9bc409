use super::super::{Piece, Position, SquareSet};
use super::ROOK_DIRECTIONS;

impl Position {
    pub(crate) fn rook_seeing(&self, piece: Piece) -> SquareSet {
        self.slide(piece, &ROOK_DIRECTIONS)
    }
}
