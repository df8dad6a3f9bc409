use std::fmt;
use std::str::FromStr;

use crate::error::NotationError;

/// A board coordinate. File and rank are zero-indexed, so a1 is (0, 0).
///
/// `Square::OFF_BOARD` is the one value outside the 8x8 range; it marks
/// captured pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: i8,
    rank: i8,
}

/// Color of a board square. a1 is dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareColor {
    Light,
    Dark,
}

impl Square {
    pub const OFF_BOARD: Square = Square { file: -1, rank: -1 };

    /// Returns `None` unless both coordinates are in `0..8`.
    pub const fn new(file: i8, rank: i8) -> Option<Square> {
        if file >= 0 && file < 8 && rank >= 0 && rank < 8 {
            Some(Square { file, rank })
        } else {
            None
        }
    }

    /// Square for a mailbox index (`rank * 8 + file`).
    ///
    /// # Panics
    ///
    /// Panics if `idx >= 64`.
    pub const fn from_index(idx: usize) -> Square {
        assert!(idx < 64, "square index out of bounds");
        Square {
            file: (idx % 8) as i8,
            rank: (idx / 8) as i8,
        }
    }

    #[inline]
    pub const fn file(self) -> i8 {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> i8 {
        self.rank
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.file >= 0 && self.file < 8 && self.rank >= 0 && self.rank < 8
    }

    /// Mailbox index of an on-board square.
    #[inline]
    pub const fn index(self) -> usize {
        debug_assert!(self.is_on_board());
        (self.rank as usize) * 8 + self.file as usize
    }

    /// The square `df` files and `dr` ranks away, if it is on the board.
    #[inline]
    pub const fn offset(self, df: i8, dr: i8) -> Option<Square> {
        Square::new(self.file + df, self.rank + dr)
    }

    pub const fn color(self) -> SquareColor {
        if (self.file + self.rank) % 2 == 0 {
            SquareColor::Dark
        } else {
            SquareColor::Light
        }
    }

    /// Iterates a1, b1, ..., h8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_on_board() {
            return write!(f, "-");
        }
        write!(f, "{}{}", (b'a' + self.file as u8) as char, self.rank + 1)
    }
}

impl FromStr for Square {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(NotationError::BadSquare(s.to_string()));
        }
        let file = bytes[0].wrapping_sub(b'a') as i8;
        let rank = bytes[1].wrapping_sub(b'1') as i8;
        Square::new(file, rank).ok_or_else(|| NotationError::BadSquare(s.to_string()))
    }
}

/// Unordered set of on-board squares, one bit per mailbox index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SquareSet(u64);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);

    #[inline]
    pub const fn from_mask(mask: u64) -> SquareSet {
        SquareSet(mask)
    }

    #[inline]
    pub const fn mask(self) -> u64 {
        self.0
    }

    /// Off-board squares are ignored.
    #[inline]
    pub fn insert(&mut self, square: Square) {
        if square.is_on_board() {
            self.0 |= 1u64 << square.index();
        }
    }

    #[inline]
    pub fn remove(&mut self, square: Square) {
        if square.is_on_board() {
            self.0 &= !(1u64 << square.index());
        }
    }

    #[inline]
    pub fn contains(self, square: Square) -> bool {
        square.is_on_board() && self.0 & (1u64 << square.index()) != 0
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> SquareSetIter {
        SquareSetIter(self.0)
    }
}

/// Pops squares lowest index first.
pub struct SquareSetIter(u64);

impl Iterator for SquareSetIter {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        Some(Square::from_index(pop_lsb(&mut self.0)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;

    fn into_iter(self) -> SquareSetIter {
        self.iter()
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::EMPTY;
        for square in iter {
            set.insert(square);
        }
        set
    }
}

/// Pop the least significant bit and return its index
#[inline(always)]
pub fn pop_lsb(bb: &mut u64) -> usize {
    let sq = bb.trailing_zeros() as usize;
    *bb &= *bb - 1;
    sq
}
