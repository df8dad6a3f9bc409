use crate::error::NotationError;
use crate::game_repr::{CastleSide, CastlingRights, Piece, Position, Side, Square};

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// Reads a FEN string.
    ///
    /// Only the board field is required. Missing fields default to White to
    /// move, castling rights for every king and rook on their home squares,
    /// no en-passant target, halfmove clock 0 and fullmove 1.
    pub fn from_fen(fen: &str) -> Result<Position, NotationError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.is_empty() {
            return Err(NotationError::EmptyFen);
        }
        if parts.len() > 6 {
            return Err(NotationError::TooManyFields(parts.len()));
        }

        let mut position = Position::empty();
        parse_board(&mut position, parts[0])?;

        let side = match parts.get(1).copied() {
            None | Some("w") => Side::White,
            Some("b") => Side::Black,
            Some(other) => return Err(NotationError::BadSideToMove(other.to_string())),
        };

        position.castling = match parts.get(2).copied() {
            None => position.castling_from_placement(),
            Some(field) => parse_castling(field)?,
        };

        position.en_passant = match parts.get(3).copied() {
            None | Some("-") => None,
            Some(field) => {
                let square: Square = field.parse()?;
                if square.rank() != 2 && square.rank() != 5 {
                    return Err(NotationError::BadSquare(field.to_string()));
                }
                Some(square)
            }
        };

        position.halfmove_clock = parse_counter(parts.get(4).copied(), 0)?;
        let fullmove = parse_counter(parts.get(5).copied(), 1)?.max(1);
        let black_to_move = match side {
            Side::White => 0,
            Side::Black => 1,
        };
        position.ply = (fullmove - 1)
            .checked_mul(2)
            .and_then(|ply| ply.checked_add(black_to_move))
            .ok_or_else(|| NotationError::BadCounter(parts.get(5).copied().unwrap_or_default().to_string()))?;

        position.settle_completion();
        Ok(position)
    }

    /// All six FEN fields.
    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(90);

        for rank in (0..8).rev() {
            let mut empty_run = 0;
            for file in 0..8 {
                let piece = self.board()[rank * 8 + file];
                match piece.fen_char() {
                    Some(c) => {
                        if empty_run > 0 {
                            fen.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        fen.push(c);
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                fen.push_str(&empty_run.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.side_to_move() {
            Side::White => 'w',
            Side::Black => 'b',
        });

        fen.push(' ');
        fen.push_str(&castling_field(self.castling()));

        fen.push(' ');
        match self.en_passant() {
            Some(square) => fen.push_str(&square.to_string()),
            None => fen.push('-'),
        }

        fen.push_str(&format!(" {} {}", self.halfmove_clock(), self.fullmove_number()));
        fen
    }
}

fn parse_board(position: &mut Position, field: &str) -> Result<(), NotationError> {
    let rows: Vec<&str> = field.split('/').collect();
    if rows.len() != 8 {
        return Err(NotationError::BadBoard(format!("expected 8 ranks, got {}", rows.len())));
    }

    // first row is rank 8
    for (row, text) in rows.iter().enumerate() {
        let rank = 7 - row as i8;
        let mut file: i8 = 0;
        for c in text.chars() {
            if let Some(skip) = c.to_digit(10) {
                if !(1..=8).contains(&skip) {
                    return Err(NotationError::BadBoard(format!("bad empty count '{}'", c)));
                }
                file = file.saturating_add(skip as i8);
                continue;
            }
            let square = Square::new(file, rank)
                .ok_or_else(|| NotationError::BadBoard(format!("rank {} is too long", rank + 1)))?;
            let piece = Piece::from_fen_char(c, square)
                .ok_or_else(|| NotationError::BadBoard(format!("unknown piece '{}'", c)))?;
            position.put(piece.kind, piece.side, square);
            file += 1;
        }
        if file != 8 {
            return Err(NotationError::BadBoard(format!(
                "rank {} covers {} files",
                rank + 1,
                file
            )));
        }
    }
    Ok(())
}

fn parse_castling(field: &str) -> Result<CastlingRights, NotationError> {
    let mut rights = CastlingRights::NONE;
    if field == "-" {
        return Ok(rights);
    }
    for c in field.chars() {
        let (side, wing) = match c {
            'K' => (Side::White, CastleSide::KingSide),
            'Q' => (Side::White, CastleSide::QueenSide),
            'k' => (Side::Black, CastleSide::KingSide),
            'q' => (Side::Black, CastleSide::QueenSide),
            _ => return Err(NotationError::BadCastling(field.to_string())),
        };
        rights.set(side, wing, true);
    }
    Ok(rights)
}

fn castling_field(rights: CastlingRights) -> String {
    let mut field = String::with_capacity(4);
    for (flag, c) in [
        (rights.white_king_side, 'K'),
        (rights.white_queen_side, 'Q'),
        (rights.black_king_side, 'k'),
        (rights.black_queen_side, 'q'),
    ] {
        if flag {
            field.push(c);
        }
    }
    if field.is_empty() {
        field.push('-');
    }
    field
}

fn parse_counter(field: Option<&str>, default: u32) -> Result<u32, NotationError> {
    match field {
        None => Ok(default),
        Some(text) => text
            .parse()
            .map_err(|_| NotationError::BadCounter(text.to_string())),
    }
}
