use super::{Side, Square};

/// Which wing a castle goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    pub const KING_HOME_FILE: i8 = 4;

    pub const fn rook_home_file(self) -> i8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    pub const fn king_target_file(self) -> i8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    /// Also the square the king passes through.
    pub const fn rook_target_file(self) -> i8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// Castle direction for a king move of `file_delta`, if it is a castle.
    pub const fn from_king_delta(file_delta: i8) -> Option<CastleSide> {
        match file_delta {
            2 => Some(CastleSide::KingSide),
            -2 => Some(CastleSide::QueenSide),
            _ => None,
        }
    }

    pub const fn king_home(side: Side) -> Square {
        Square::from_index((side.home_rank() as usize) * 8 + Self::KING_HOME_FILE as usize)
    }

    pub const fn rook_home(self, side: Side) -> Square {
        Square::from_index((side.home_rank() as usize) * 8 + self.rook_home_file() as usize)
    }

    /// Files strictly between king and rook; all must be empty to castle.
    pub fn between_files(self) -> &'static [i8] {
        match self {
            CastleSide::KingSide => &[5, 6],
            CastleSide::QueenSide => &[1, 2, 3],
        }
    }
}

/// Castling availability. A flag only ever goes from true to false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub white_king_side: bool,
    pub white_queen_side: bool,
    pub black_king_side: bool,
    pub black_queen_side: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        white_king_side: true,
        white_queen_side: true,
        black_king_side: true,
        black_queen_side: true,
    };

    pub const NONE: CastlingRights = CastlingRights {
        white_king_side: false,
        white_queen_side: false,
        black_king_side: false,
        black_queen_side: false,
    };

    pub fn get(&self, side: Side, wing: CastleSide) -> bool {
        match (side, wing) {
            (Side::White, CastleSide::KingSide) => self.white_king_side,
            (Side::White, CastleSide::QueenSide) => self.white_queen_side,
            (Side::Black, CastleSide::KingSide) => self.black_king_side,
            (Side::Black, CastleSide::QueenSide) => self.black_queen_side,
        }
    }

    pub fn set(&mut self, side: Side, wing: CastleSide, value: bool) {
        let flag = match (side, wing) {
            (Side::White, CastleSide::KingSide) => &mut self.white_king_side,
            (Side::White, CastleSide::QueenSide) => &mut self.white_queen_side,
            (Side::Black, CastleSide::KingSide) => &mut self.black_king_side,
            (Side::Black, CastleSide::QueenSide) => &mut self.black_queen_side,
        };
        *flag = value;
    }

    pub fn any(&self, side: Side) -> bool {
        self.get(side, CastleSide::KingSide) || self.get(side, CastleSide::QueenSide)
    }

    /// Drops every right tied to `square` as a king or rook home square.
    pub fn clear_for_square(&mut self, square: Square) {
        for side in [Side::White, Side::Black] {
            if square == CastleSide::king_home(side) {
                self.set(side, CastleSide::KingSide, false);
                self.set(side, CastleSide::QueenSide, false);
            }
            for wing in CastleSide::BOTH {
                if square == wing.rook_home(side) {
                    self.set(side, wing, false);
                }
            }
        }
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::ALL
    }
}
