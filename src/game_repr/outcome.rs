use log::info;

use super::piece_moves::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use super::tables::{pawn_captures, KING_TARGETS, KNIGHT_TARGETS};
use super::*;

/// Halfmove clock value at which the fifty-move rule applies. The clock
/// counts single plies, so the draw opens after fifty of them.
pub const FIFTY_MOVE_PLIES: u32 = 50;

/// Occurrences of one position needed for a repetition draw.
pub const REPETITION_LIMIT: usize = 3;

impl Position {
    pub fn king_square(&self, side: Side) -> Option<Square> {
        self.board
            .iter()
            .find(|piece| piece.kind == PieceKind::King && piece.is(side))
            .map(|piece| piece.square)
    }

    /// True if any piece of `by` attacks `square`.
    ///
    /// Looks outward from `square` instead of asking every enemy piece for
    /// its attack set; the answer is the same.
    pub fn is_square_attacked(&self, square: Square, by: Side) -> bool {
        if !square.is_on_board() {
            return false;
        }
        let idx = square.index();
        let holds = |mask: u64, kinds: &[PieceKind]| {
            SquareSet::from_mask(mask).iter().any(|from| {
                let piece = self.board[from.index()];
                piece.is(by) && kinds.contains(&piece.kind)
            })
        };

        // a pawn of `by` hits `square` from where a pawn of the other side
        // standing on `square` would capture
        holds(KNIGHT_TARGETS[idx], &[PieceKind::Knight])
            || holds(KING_TARGETS[idx], &[PieceKind::King])
            || holds(pawn_captures(by.other(), idx), &[PieceKind::Pawn])
            || self.ray_hits(square, &ROOK_DIRECTIONS, by, &[PieceKind::Rook, PieceKind::Queen])
            || self.ray_hits(square, &BISHOP_DIRECTIONS, by, &[PieceKind::Bishop, PieceKind::Queen])
    }

    /// Whether the first piece met along any direction is one of `kinds` of `by`.
    fn ray_hits(&self, square: Square, directions: &[(i8, i8)], by: Side, kinds: &[PieceKind]) -> bool {
        directions.iter().any(|&(df, dr)| {
            let mut current = square;
            while let Some(next) = current.offset(df, dr) {
                let piece = self.board[next.index()];
                if !piece.is_none() {
                    return piece.is(by) && kinds.contains(&piece.kind);
                }
                current = next;
            }
            false
        })
    }

    /// A side with no king on the board is never in check.
    pub fn in_check(&self, side: Side) -> bool {
        match self.king_square(side) {
            Some(king) => self.is_square_attacked(king, side.other()),
            None => false,
        }
    }

    /// Stops at the first legal move found.
    pub fn has_any_legal_move(&self, side: Side) -> bool {
        self.pieces_of(side).into_iter().any(|piece| {
            self.seeing(piece)
                .iter()
                .any(|target| self.is_legal(&Self::probe_move(piece, target)))
        })
    }

    pub fn is_checkmate(&self, side: Side) -> bool {
        self.in_check(side) && !self.has_any_legal_move(side)
    }

    pub fn is_stalemate(&self, side: Side) -> bool {
        !self.in_check(side) && !self.has_any_legal_move(side)
    }

    // ===========================
    // Draws
    // ===========================

    /// The first draw condition that currently holds for the side to move.
    ///
    /// Checked in the order insufficient material, repetition, fifty moves.
    /// A finished game, or a checkmated side to move, has none.
    pub fn draw_eligibility(&self) -> Option<DrawReason> {
        if self.completion.is_done() || self.is_checkmate(self.side_to_move()) {
            return None;
        }
        if self.has_insufficient_material() {
            return Some(DrawReason::InsufficientMaterial);
        }
        if self.repetitions.latest_count() >= REPETITION_LIMIT {
            return Some(DrawReason::ThreefoldRepetition);
        }
        if self.halfmove_clock >= FIFTY_MOVE_PLIES {
            return Some(DrawReason::FiftyMoves);
        }
        None
    }

    pub fn can_draw(&self) -> bool {
        self.draw_eligibility().is_some()
    }

    /// Neither side can ever deliver mate: bare kings, one minor piece
    /// against a bare king, or only bishops that all stand on one color.
    pub fn has_insufficient_material(&self) -> bool {
        let mut minors = 0;
        let mut knights = 0;
        let mut light_bishops = 0;
        let mut dark_bishops = 0;

        for piece in self.board.iter() {
            match piece.kind {
                PieceKind::None | PieceKind::King => {}
                PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
                PieceKind::Knight => {
                    minors += 1;
                    knights += 1;
                }
                PieceKind::Bishop => {
                    minors += 1;
                    match piece.square.color() {
                        SquareColor::Light => light_bishops += 1,
                        SquareColor::Dark => dark_bishops += 1,
                    }
                }
            }
        }

        if minors <= 1 {
            return true;
        }
        knights == 0 && (light_bishops == 0 || dark_bishops == 0)
    }

    /// Ends the game as a draw if one can be claimed right now.
    pub fn claim_draw(&mut self) -> Option<DrawReason> {
        let reason = self.draw_eligibility()?;
        self.completion = Completion::Draw { reason };
        info!("draw claimed by {}: {}", self.side_to_move(), reason);
        Some(reason)
    }

    /// Suffix for the move just played: `#` for mate, `+` for check.
    pub fn check_annotation(&self) -> &'static str {
        let side = self.side_to_move();
        if !self.in_check(side) {
            ""
        } else if self.has_any_legal_move(side) {
            "+"
        } else {
            "#"
        }
    }
}
