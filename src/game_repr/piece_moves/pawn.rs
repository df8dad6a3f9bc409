use super::super::tables::pawn_captures;
use super::super::{Piece, Position, SquareSet};

impl Position {
    pub(crate) fn pawn_seeing(&self, piece: Piece) -> SquareSet {
        let side = piece.side;
        let mut targets = SquareSet::EMPTY;

        // pushes
        if let Some(one) = piece.square.offset(0, side.forward()) {
            if self.board[one.index()].is_none() {
                targets.insert(one);
                if piece.square.rank() == side.pawn_start_rank() {
                    if let Some(two) = one.offset(0, side.forward()) {
                        if self.board[two.index()].is_none() {
                            targets.insert(two);
                        }
                    }
                }
            }
        }

        // captures, including en passant for the side that can take it
        let enemies = self.occupancy(side.other());
        let mut capturable = enemies;
        if let Some(ep) = self.en_passant {
            if ep.rank() == side.en_passant_capture_rank() {
                capturable |= 1u64 << ep.index();
            }
        }
        let diagonals = pawn_captures(side, piece.square.index()) & capturable;

        SquareSet::from_mask(targets.mask() | diagonals)
    }

    /// Both forward diagonals, empty or not, unless an own piece stands there.
    pub(crate) fn pawn_attacks(&self, piece: Piece) -> SquareSet {
        SquareSet::from_mask(pawn_captures(piece.side, piece.square.index()) & !self.occupancy(piece.side))
    }
}
