use super::{CastlingRights, PieceKind, Position, Side, Square};

/// What makes two positions "the same" for threefold repetition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PositionKey {
    /// Per square: 0 empty, otherwise kind code + 8 for Black.
    board: [u8; 64],
    castling: CastlingRights,
    en_passant: Option<Square>,
    side_to_move: Side,
}

impl PositionKey {
    pub fn of(position: &Position) -> Self {
        let mut board = [0u8; 64];
        for (idx, piece) in position.board.iter().enumerate() {
            let kind_code = match piece.kind {
                PieceKind::None => continue,
                PieceKind::Pawn => 1,
                PieceKind::Rook => 2,
                PieceKind::Knight => 3,
                PieceKind::Bishop => 4,
                PieceKind::Queen => 5,
                PieceKind::King => 6,
            };
            board[idx] = match piece.side {
                Side::White => kind_code,
                Side::Black => kind_code + 8,
            };
        }

        Self {
            board,
            castling: position.castling,
            en_passant: position.en_passant,
            side_to_move: position.side_to_move(),
        }
    }
}

/// Positions reached since the last capture or pawn move.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepetitionTracker {
    seen: Vec<PositionKey>,
}

impl RepetitionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, key: PositionKey) {
        self.seen.push(key);
    }

    pub fn reset(&mut self) {
        self.seen.clear();
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// How many times the most recently recorded position has been recorded.
    pub fn latest_count(&self) -> usize {
        match self.seen.last() {
            Some(latest) => self.seen.iter().filter(|key| *key == latest).count(),
            None => 0,
        }
    }
}
