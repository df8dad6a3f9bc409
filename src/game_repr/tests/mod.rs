use super::*;
use crate::error::MoveError;
use crate::notation::parse_coordinate_move;

// ==================== HELPER FUNCTIONS ====================

/// Square from its name, e.g. `sq("e4")`
pub fn sq(name: &str) -> Square {
    name.parse().expect("bad square in test")
}

/// Board with no pieces and no castling rights, White to move
pub fn empty_board() -> Position {
    Position::empty()
}

/// Place a piece on the board and return it
pub fn place_piece(pos: &mut Position, square: &str, kind: PieceKind, side: Side) -> Piece {
    let square = sq(square);
    pos.put(kind, side, square);
    pos.square(square)
}

pub fn set_side_to_move(pos: &mut Position, side: Side) {
    let white_to_move = pos.ply % 2 == 0;
    if white_to_move != (side == Side::White) {
        pos.ply += 1;
    }
}

pub fn fen(text: &str) -> Position {
    Position::from_fen(text).expect("bad FEN in test")
}

/// Try a move in coordinate notation
pub fn try_play(pos: &mut Position, text: &str) -> Result<(), MoveError> {
    let mv = parse_coordinate_move(pos, text).expect("unparsable move in test");
    pos.attempt_move(mv)
}

/// Play moves that must all be accepted
pub fn play(pos: &mut Position, moves: &[&str]) {
    for text in moves {
        if let Err(e) = try_play(pos, text) {
            panic!("{} rejected: {}", text, e);
        }
    }
}

/// Helper function to check if a set holds the named squares
pub fn has_targets(set: SquareSet, names: &[&str]) -> bool {
    names.iter().all(|name| set.contains(sq(name)))
}

pub fn count_of(pos: &Position, side: Side) -> usize {
    pos.pieces_of(side).len()
}

// ==================== TEST MODULES ====================

mod pawn_movement;
mod en_passant;
mod check_detection;
mod perft;
