use super::super::tables::KING_TARGETS;
use super::super::{CastleSide, Piece, Position, SquareSet};

impl Position {
    /// The eight surrounding squares, minus own pieces.
    pub(crate) fn king_steps(&self, piece: Piece) -> SquareSet {
        self.leaper_targets(piece, &KING_TARGETS)
    }

    pub(crate) fn king_seeing(&self, piece: Piece) -> SquareSet {
        let mut targets = self.king_steps(piece);

        if piece.square != CastleSide::king_home(piece.side) {
            return targets;
        }

        // Path, rook and check conditions are left to the legality filter.
        for wing in CastleSide::BOTH {
            if !self.castling.get(piece.side, wing) {
                continue;
            }
            if let Some(target) = piece.square.offset(wing.king_target_file() - CastleSide::KING_HOME_FILE, 0) {
                if !self.board[target.index()].is(piece.side) {
                    targets.insert(target);
                }
            }
        }

        targets
    }
}
