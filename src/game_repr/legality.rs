use log::trace;
use smallvec::SmallVec;

use super::*;
use crate::error::MoveError;

impl Position {
    /// Whether `mv` may be played here, ignoring whose turn it is and
    /// whether the game has ended.
    ///
    /// Never mutates `self`; every probe runs on a throwaway copy.
    pub fn is_legal(&self, mv: &Move) -> bool {
        self.validate(mv).is_ok()
    }

    /// Shape, promotion and king-safety checks for `mv`, in that order.
    pub(crate) fn validate(&self, mv: &Move) -> Result<(), MoveError> {
        let piece = mv.piece;
        let target = mv.target;
        let shape_invalid = MoveError::ShapeInvalid { piece, target };

        if piece.is_none() || !piece.square.is_on_board() || !target.is_on_board() {
            return Err(shape_invalid);
        }
        let on_board = self.board[piece.square.index()];
        if !on_board.same_identity(&piece) || on_board.is_none() {
            return Err(shape_invalid);
        }
        if !self.seeing(piece).contains(target) {
            return Err(shape_invalid);
        }

        let castle = mv.castle_side();
        if let Some(wing) = castle {
            if !self.castling_path_clear(piece.side, wing) {
                return Err(shape_invalid);
            }
        }

        let reaches_last_rank = piece.kind == PieceKind::Pawn && target.rank() == piece.side.promotion_rank();
        let promotion_ok = if reaches_last_rank {
            mv.promotion.is_promotion_choice()
        } else {
            mv.promotion == PieceKind::None
        };
        if !promotion_ok {
            return Err(MoveError::PromotionInvalid {
                piece,
                target,
                promotion: mv.promotion,
            });
        }

        let safe = match castle {
            Some(wing) => self.castling_is_safe(piece, wing),
            None => self.leaves_king_safe(mv),
        };
        if !safe {
            trace!("{} rejected: king would be attacked", mv);
            return Err(MoveError::InCheck { piece, target });
        }

        Ok(())
    }

    /// Right set, rook at home and nothing standing between king and rook.
    fn castling_path_clear(&self, side: Side, wing: CastleSide) -> bool {
        if !self.castling.get(side, wing) {
            return false;
        }
        let rook = self.board[wing.rook_home(side).index()];
        if !(rook.kind == PieceKind::Rook && rook.is(side)) {
            return false;
        }
        let rank = side.home_rank();
        wing.between_files().iter().all(|&file| {
            Square::new(file, rank)
                .map(|square| self.board[square.index()].is_none())
                .unwrap_or(false)
        })
    }

    /// Not in check now, and neither the transit square nor the
    /// destination is attacked. Each is probed on its own copy.
    fn castling_is_safe(&self, king: Piece, wing: CastleSide) -> bool {
        if self.in_check(king.side) {
            return false;
        }
        let Some(transit) = Square::new(wing.rook_target_file(), king.square.rank()) else {
            return false;
        };
        let Some(destination) = Square::new(wing.king_target_file(), king.square.rank()) else {
            return false;
        };

        let mut through = self.probe();
        through.apply_board(&Move::new(king, transit));
        if through.in_check(king.side) {
            return false;
        }

        let mut landed = self.probe();
        landed.apply_board(&Move::new(king, destination));
        !landed.in_check(king.side)
    }

    fn leaves_king_safe(&self, mv: &Move) -> bool {
        let mut copy = self.probe();
        copy.apply_board(mv);
        !copy.in_check(mv.piece.side)
    }

    /// Squares `piece` can legally move to.
    pub fn legal_targets(&self, piece: Piece) -> SquareSet {
        self.seeing(piece)
            .iter()
            .filter(|&target| self.is_legal(&Self::probe_move(piece, target)))
            .collect()
    }

    /// Every legal move for the side to move, with each promotion expanded
    /// into its four choices.
    pub fn legal_moves(&self) -> Vec<Move> {
        let side = self.side_to_move();
        let mut moves = Vec::with_capacity(48);
        for piece in self.pieces_of(side) {
            moves.extend(self.legal_moves_of(piece));
        }
        moves
    }

    /// Legal moves of a single piece, promotions expanded.
    pub fn legal_moves_of(&self, piece: Piece) -> SmallVec<[Move; 32]> {
        let mut moves = SmallVec::new();
        for target in self.legal_targets(piece) {
            if Self::is_promotion_square(piece, target) {
                for kind in PieceKind::PROMOTIONS {
                    moves.push(Move::with_promotion(piece, target, kind));
                }
            } else {
                moves.push(Move::new(piece, target));
            }
        }
        moves
    }

    fn is_promotion_square(piece: Piece, target: Square) -> bool {
        piece.kind == PieceKind::Pawn && target.rank() == piece.side.promotion_rank()
    }

    /// A representative move for a legality probe. The promotion choice
    /// never affects king safety, so queen stands in for all of them.
    pub(crate) fn probe_move(piece: Piece, target: Square) -> Move {
        if Self::is_promotion_square(piece, target) {
            Move::with_promotion(piece, target, PieceKind::Queen)
        } else {
            Move::new(piece, target)
        }
    }
}
