use log::trace;

use super::repetition::PositionKey;
use super::*;

impl Position {
    /// Board-level effects of `mv`: en-passant removal, placement and
    /// promotion, the castling rook hop, rights and the en-passant target.
    ///
    /// Returns the captured piece, if any, with its square reset to
    /// `Square::OFF_BOARD`. Counters, history and repetition data are left
    /// alone, so legality probes can call this on a cheap copy.
    pub(crate) fn apply_board(&mut self, mv: &Move) -> Option<Piece> {
        let from = mv.from();
        let target = mv.target;
        let mover = self.board[from.index()];

        let mut captured = self.piece_at(target);

        // en passant: the taken pawn sits on the target file, origin rank
        if mover.kind == PieceKind::Pawn && captured.is_none() && mv.file_delta() != 0 {
            if let Some(behind) = Square::new(target.file(), from.rank()) {
                captured = self.piece_at(behind);
                self.clear(behind);
            }
        }

        let kind = if mv.promotion == PieceKind::None {
            mover.kind
        } else {
            mv.promotion
        };
        self.put(kind, mover.side, target);
        self.clear(from);

        if mover.kind == PieceKind::King {
            if let Some(wing) = mv.castle_side() {
                let rook_from = wing.rook_home(mover.side);
                if let Some(rook_to) = Square::new(wing.rook_target_file(), from.rank()) {
                    let rook = self.board[rook_from.index()];
                    self.put(rook.kind, rook.side, rook_to);
                    self.clear(rook_from);
                }
            }
        }

        self.castling.clear_for_square(from);
        self.castling.clear_for_square(target);

        self.en_passant = if mv.is_double_pawn_push() {
            Square::new(from.file(), from.rank() + mover.side.forward())
        } else {
            None
        };

        captured.map(|piece| Piece::new(piece.kind, piece.side, Square::OFF_BOARD))
    }

    /// Commit `mv` with no validation at all. Callers are expected to have
    /// checked legality first; `attempt_move` does.
    pub fn apply_unconditional(&mut self, mv: Move) {
        let is_pawn = self.board[mv.from().index()].kind == PieceKind::Pawn;
        let captured = self.apply_board(&mv);
        let irreversible = is_pawn || captured.is_some();

        if irreversible {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }

        self.history.push(mv);
        if let Some(piece) = captured {
            self.captured.push(piece);
        }
        self.ply += 1;

        if irreversible {
            self.repetitions.reset();
        } else {
            self.repetitions.record(PositionKey::of(self));
        }

        trace!(
            "applied {} (halfmove clock {}, {} repeat(s))",
            mv,
            self.halfmove_clock,
            self.repetitions.latest_count()
        );
    }
}
