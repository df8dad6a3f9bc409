use super::super::{Piece, Position, SquareSet};
use super::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};

impl Position {
    // queen = rook + bishop
    pub(crate) fn queen_seeing(&self, piece: Piece) -> SquareSet {
        SquareSet::from_mask(
            self.slide(piece, &ROOK_DIRECTIONS).mask() | self.slide(piece, &BISHOP_DIRECTIONS).mask(),
        )
    }
}
