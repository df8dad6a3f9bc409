use crate::error::NotationError;
use crate::game_repr::{Move, PieceKind, Position, Square};

/// Builds a move request from coordinate notation like `e2e4` or `e7e8q`.
///
/// Only the text is checked here. Whether the move is legal is for
/// `Position::attempt_move` to decide.
pub fn parse_coordinate_move(position: &Position, text: &str) -> Result<Move, NotationError> {
    let text = text.trim();
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(NotationError::BadMove(text.to_string()));
    }

    let from: Square = text[0..2].parse()?;
    let target: Square = text[2..4].parse()?;

    let promotion = match text[4..].chars().next() {
        None => PieceKind::None,
        Some(c) => match PieceKind::from_letter(c) {
            Some(kind) if kind.is_promotion_choice() => kind,
            _ => return Err(NotationError::BadPromotion(c)),
        },
    };

    let piece = position
        .piece_at(from)
        .ok_or(NotationError::NoPieceOnSquare(from))?;
    Ok(Move::with_promotion(piece, target, promotion))
}
