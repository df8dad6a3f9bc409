//! Pseudo-legal geometry, one file per piece kind.
//!
//! Nothing here knows about check. `seeing` is everything a piece could
//! move to on this board; the legality filter narrows it down.

mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;

use super::{Piece, PieceKind, Position, Side, Square, SquareSet};

pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl Position {
    /// Destination squares of `piece` ignoring whether its own king would
    /// be left in check. Includes castling destinations for a king on its
    /// home square with the matching right still set.
    pub fn seeing(&self, piece: Piece) -> SquareSet {
        if !piece.square.is_on_board() {
            return SquareSet::EMPTY;
        }
        match piece.kind {
            PieceKind::None => SquareSet::EMPTY,
            PieceKind::Pawn => self.pawn_seeing(piece),
            PieceKind::Knight => self.knight_seeing(piece),
            PieceKind::Bishop => self.bishop_seeing(piece),
            PieceKind::Rook => self.rook_seeing(piece),
            PieceKind::Queen => self.queen_seeing(piece),
            PieceKind::King => self.king_seeing(piece),
        }
    }

    /// Squares `piece` attacks. Same as `seeing` except pawns only attack
    /// diagonally and kings never attack by castling.
    pub fn attacks(&self, piece: Piece) -> SquareSet {
        if !piece.square.is_on_board() {
            return SquareSet::EMPTY;
        }
        match piece.kind {
            PieceKind::None => SquareSet::EMPTY,
            PieceKind::Pawn => self.pawn_attacks(piece),
            PieceKind::Knight => self.knight_seeing(piece),
            PieceKind::Bishop => self.bishop_seeing(piece),
            PieceKind::Rook => self.rook_seeing(piece),
            PieceKind::Queen => self.queen_seeing(piece),
            PieceKind::King => self.king_steps(piece),
        }
    }

    /// Mask of squares holding a piece of `side`.
    pub(crate) fn occupancy(&self, side: Side) -> u64 {
        self.board
            .iter()
            .enumerate()
            .filter(|(_, piece)| piece.is(side))
            .fold(0u64, |mask, (idx, _)| mask | 1u64 << idx)
    }

    /// Leaper mask with the mover's own pieces removed.
    pub(crate) fn leaper_targets(&self, piece: Piece, table: &[u64; 64]) -> SquareSet {
        SquareSet::from_mask(table[piece.square.index()] & !self.occupancy(piece.side))
    }

    /// Ray cast from the piece along each direction. A ray stops at the
    /// first occupied square, which is included only if it holds an enemy.
    pub(crate) fn slide(&self, piece: Piece, directions: &[(i8, i8)]) -> SquareSet {
        let mut targets = SquareSet::EMPTY;
        for &(df, dr) in directions {
            let mut current: Square = piece.square;
            while let Some(next) = current.offset(df, dr) {
                let occupant = self.board[next.index()];
                if occupant.is_none() {
                    targets.insert(next);
                    current = next;
                    continue;
                }
                if occupant.side != piece.side {
                    targets.insert(next);
                }
                break;
            }
        }
        targets
    }
}
