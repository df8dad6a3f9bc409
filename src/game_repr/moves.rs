use std::fmt;

use super::{CastleSide, Piece, PieceKind, Square};

/// A move request: which piece (with its source square) goes where, and
/// what it promotes to.
///
/// A `Move` carries no state of its own and only means something against
/// the position it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub piece: Piece,
    pub target: Square,
    pub promotion: PieceKind,
}

impl Move {
    pub fn new(piece: Piece, target: Square) -> Move {
        Move {
            piece,
            target,
            promotion: PieceKind::None,
        }
    }

    pub fn with_promotion(piece: Piece, target: Square, promotion: PieceKind) -> Move {
        Move {
            piece,
            target,
            promotion,
        }
    }

    #[inline]
    pub fn from(&self) -> Square {
        self.piece.square
    }

    #[inline]
    pub fn file_delta(&self) -> i8 {
        self.target.file() - self.piece.square.file()
    }

    #[inline]
    pub fn rank_delta(&self) -> i8 {
        self.target.rank() - self.piece.square.rank()
    }

    /// Castle wing if this is a king moving two files.
    pub fn castle_side(&self) -> Option<CastleSide> {
        if self.piece.kind != PieceKind::King || self.rank_delta() != 0 {
            return None;
        }
        CastleSide::from_king_delta(self.file_delta())
    }

    pub fn is_double_pawn_push(&self) -> bool {
        self.piece.kind == PieceKind::Pawn && self.rank_delta().abs() == 2
    }
}

/// Coordinate form: `e2e4`, `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.piece.square, self.target)?;
        if let Some(letter) = self.promotion.letter() {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}
