use std::fmt;

use smallvec::SmallVec;

use super::repetition::RepetitionTracker;
use super::*;

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME REPRESENTATION
 */

/// Why a game ended drawn, or could be claimed drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawReason {
    Stalemate,
    FiftyMoves,
    ThreefoldRepetition,
    InsufficientMaterial,
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DrawReason::Stalemate => "stalemate",
            DrawReason::FiftyMoves => "fifty-move rule",
            DrawReason::ThreefoldRepetition => "threefold repetition",
            DrawReason::InsufficientMaterial => "insufficient material",
        })
    }
}

/// Terminal state of a game. Once it leaves `InProgress` it never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Completion {
    #[default]
    InProgress,
    Win { winner: Side },
    Draw { reason: DrawReason },
}

impl Completion {
    pub fn is_done(&self) -> bool {
        !matches!(self, Completion::InProgress)
    }

    pub fn is_draw(&self) -> bool {
        matches!(self, Completion::Draw { .. })
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            Completion::Win { winner } => Some(*winner),
            Completion::InProgress | Completion::Draw { .. } => None,
        }
    }

    /// PGN-style result tag.
    pub fn result_tag(&self) -> &'static str {
        match self {
            Completion::InProgress => "*",
            Completion::Win { winner: Side::White } => "1-0",
            Completion::Win { winner: Side::Black } => "0-1",
            Completion::Draw { .. } => "1/2-1/2",
        }
    }
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Completion::InProgress => f.write_str("in progress"),
            Completion::Win { winner } => write!(f, "{} wins by checkmate", winner),
            Completion::Draw { reason } => write!(f, "draw by {}", reason),
        }
    }
}

/// Starting arrangement for `new_game`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    Standard,
    /// Pieces are placed on their own `square`; White moves first. A
    /// layout where White has no legal move starts already finished.
    Custom(Vec<Piece>),
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Authoritative game state.
///
/// The board is a fixed array of plain `Piece` values, so `clone()` is a
/// full independent copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Mailbox, index = rank * 8 + file
    pub(crate) board: [Piece; 64],
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    /// Plies played; even means White to move
    pub(crate) ply: u32,
    pub(crate) completion: Completion,
    pub(crate) history: Vec<Move>,
    /// Taken pieces in capture order, square = OFF_BOARD
    pub(crate) captured: Vec<Piece>,
    pub(crate) repetitions: RepetitionTracker,
}

impl Default for Position {
    fn default() -> Self {
        Self::new_game(Layout::Standard)
    }
}

impl Position {
    /// Board with no pieces, no castling rights, White to move.
    pub fn empty() -> Self {
        let mut board = [Piece::empty(Square::OFF_BOARD); 64];
        for square in Square::all() {
            board[square.index()] = Piece::empty(square);
        }

        Self {
            board,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            ply: 0,
            completion: Completion::InProgress,
            history: Vec::new(),
            captured: Vec::new(),
            repetitions: RepetitionTracker::new(),
        }
    }

    pub fn new_game(layout: Layout) -> Self {
        let mut position = Self::empty();
        match layout {
            Layout::Standard => {
                for (file, kind) in BACK_RANK.iter().enumerate() {
                    let file = file as i8;
                    for side in [Side::White, Side::Black] {
                        position.put(*kind, side, Self::square_at(file, side.home_rank()));
                        position.put(PieceKind::Pawn, side, Self::square_at(file, side.pawn_start_rank()));
                    }
                }
                position.castling = CastlingRights::ALL;
            }
            Layout::Custom(pieces) => {
                for piece in pieces {
                    if piece.square.is_on_board() && !piece.is_none() {
                        position.put(piece.kind, piece.side, piece.square);
                    }
                }
                position.castling = position.castling_from_placement();
                position.settle_completion();
            }
        }
        position
    }

    fn square_at(file: i8, rank: i8) -> Square {
        Square::from_index(rank as usize * 8 + file as usize)
    }

    /// Rights for every king/rook pair standing on its home squares.
    pub(crate) fn castling_from_placement(&self) -> CastlingRights {
        let mut rights = CastlingRights::NONE;
        for side in [Side::White, Side::Black] {
            let king = self.board[CastleSide::king_home(side).index()];
            if !(king.kind == PieceKind::King && king.is(side)) {
                continue;
            }
            for wing in CastleSide::BOTH {
                let rook = self.board[wing.rook_home(side).index()];
                rights.set(side, wing, rook.kind == PieceKind::Rook && rook.is(side));
            }
        }
        rights
    }

    /// Place a piece, replacing whatever stood there.
    pub(crate) fn put(&mut self, kind: PieceKind, side: Side, square: Square) {
        self.board[square.index()] = Piece::new(kind, side, square);
    }

    pub(crate) fn clear(&mut self, square: Square) {
        self.board[square.index()] = Piece::empty(square);
    }

    /// Copy for legality probing: board state only, no history.
    pub(crate) fn probe(&self) -> Position {
        Position {
            board: self.board,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            ply: self.ply,
            completion: self.completion,
            history: Vec::new(),
            captured: Vec::new(),
            repetitions: RepetitionTracker::new(),
        }
    }

    // ===========================
    // Game State Access (Read-Only)
    // ===========================

    /// The piece on `square`, or `None` if it is empty or off the board.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if !square.is_on_board() {
            return None;
        }
        let piece = self.board[square.index()];
        if piece.is_none() {
            None
        } else {
            Some(piece)
        }
    }

    /// Board entry including empty squares. Off the board everything is empty.
    #[inline]
    pub fn square(&self, square: Square) -> Piece {
        if !square.is_on_board() {
            return Piece::empty(square);
        }
        self.board[square.index()]
    }

    pub fn board(&self) -> &[Piece; 64] {
        &self.board
    }

    /// Pieces of `side` still on the board, a1 first.
    pub fn pieces_of(&self, side: Side) -> SmallVec<[Piece; 16]> {
        self.board.iter().copied().filter(|piece| piece.is(side)).collect()
    }

    /// Pieces of `side` that have been captured, in capture order.
    pub fn captured_of(&self, side: Side) -> SmallVec<[Piece; 16]> {
        self.captured.iter().copied().filter(|piece| piece.side == side).collect()
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        if self.ply % 2 == 0 {
            Side::White
        } else {
            Side::Black
        }
    }

    pub fn fullmove_number(&self) -> u32 {
        self.ply / 2 + 1
    }

    pub fn ply(&self) -> u32 {
        self.ply
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    pub fn completion(&self) -> Completion {
        self.completion
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// Number of times the current position has occurred since the last
    /// capture or pawn move; 0 right after one.
    pub fn repetition_count(&self) -> usize {
        self.repetitions.latest_count()
    }

    /// Move request for the piece standing on `from`.
    pub fn move_from(&self, from: Square, target: Square) -> Option<Move> {
        self.piece_at(from).map(|piece| Move::new(piece, target))
    }
}
