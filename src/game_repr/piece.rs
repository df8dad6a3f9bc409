use std::fmt;

use super::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    None,
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// Kinds a pawn may promote to.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    pub fn is_promotion_choice(self) -> bool {
        match self {
            PieceKind::Rook | PieceKind::Knight | PieceKind::Bishop | PieceKind::Queen => true,
            PieceKind::None | PieceKind::Pawn | PieceKind::King => false,
        }
    }

    /// Lowercase letter used by FEN and coordinate notation; `None` has no letter.
    pub fn letter(self) -> Option<char> {
        match self {
            PieceKind::Pawn => Some('p'),
            PieceKind::Rook => Some('r'),
            PieceKind::Knight => Some('n'),
            PieceKind::Bishop => Some('b'),
            PieceKind::Queen => Some('q'),
            PieceKind::King => Some('k'),
            PieceKind::None => None,
        }
    }

    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'r' => Some(PieceKind::Rook),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::None => "None",
            PieceKind::Pawn => "Pawn",
            PieceKind::Rook => "Rook",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub const fn other(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }

    /// Rank delta of a pawn step.
    pub const fn forward(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    /// Rank holding the king and rooks at the start.
    pub const fn home_rank(self) -> i8 {
        match self {
            Side::White => 0,
            Side::Black => 7,
        }
    }

    pub const fn pawn_start_rank(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => 6,
        }
    }

    pub const fn promotion_rank(self) -> i8 {
        match self {
            Side::White => 7,
            Side::Black => 0,
        }
    }

    /// Rank of the en-passant target square this side may capture into.
    pub const fn en_passant_capture_rank(self) -> i8 {
        match self {
            Side::White => 5,
            Side::Black => 2,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => f.write_str("White"),
            Side::Black => f.write_str("Black"),
        }
    }
}

/// A board entry. `kind == PieceKind::None` is an empty square; its `side` is meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
    pub square: Square,
}

impl Piece {
    pub const fn new(kind: PieceKind, side: Side, square: Square) -> Self {
        Self { kind, side, square }
    }

    pub const fn empty(square: Square) -> Self {
        Self {
            kind: PieceKind::None,
            side: Side::White,
            square,
        }
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        self.kind == PieceKind::None
    }

    /// True for a real piece of `side`.
    #[inline]
    pub fn is(&self, side: Side) -> bool {
        !self.is_none() && self.side == side
    }

    /// Same kind and side, wherever it stands.
    #[inline]
    pub fn same_identity(&self, other: &Piece) -> bool {
        self.kind == other.kind && (self.is_none() || self.side == other.side)
    }

    pub fn symbol(&self) -> char {
        match (self.side, self.kind) {
            (_, PieceKind::None) => ' ',
            (Side::White, PieceKind::Pawn) => '♙',
            (Side::White, PieceKind::Rook) => '♖',
            (Side::White, PieceKind::Knight) => '♘',
            (Side::White, PieceKind::Bishop) => '♗',
            (Side::White, PieceKind::Queen) => '♕',
            (Side::White, PieceKind::King) => '♔',
            (Side::Black, PieceKind::Pawn) => '♟',
            (Side::Black, PieceKind::Rook) => '♜',
            (Side::Black, PieceKind::Knight) => '♞',
            (Side::Black, PieceKind::Bishop) => '♝',
            (Side::Black, PieceKind::Queen) => '♛',
            (Side::Black, PieceKind::King) => '♚',
        }
    }

    /// FEN letter: uppercase for White, lowercase for Black.
    pub fn fen_char(&self) -> Option<char> {
        let letter = self.kind.letter()?;
        match self.side {
            Side::White => Some(letter.to_ascii_uppercase()),
            Side::Black => Some(letter),
        }
    }

    pub fn from_fen_char(c: char, square: Square) -> Option<Self> {
        let kind = PieceKind::from_letter(c)?;
        let side = if c.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        Some(Self { kind, side, square })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return write!(f, "empty {}", self.square);
        }
        write!(f, "{} {} on {}", self.side, self.kind, self.square)
    }
}
