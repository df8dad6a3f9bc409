//! Plain-text board drawing for the terminal.

use crate::game_repr::{Position, Side, Square, SquareColor};

const EMPTY_LIGHT: char = ' ';
const EMPTY_DARK: char = '·';

/// Board as seen by the side to move.
pub fn render_board(position: &Position) -> String {
    render_board_from(position, position.side_to_move())
}

/// Board with `side`'s pieces at the bottom.
pub fn render_board_from(position: &Position, side: Side) -> String {
    let (ranks, files): (Vec<i8>, Vec<i8>) = match side {
        Side::White => ((0..8).rev().collect(), (0..8).collect()),
        Side::Black => ((0..8).collect(), (0..8).rev().collect()),
    };

    let footer: String = files
        .iter()
        .map(|&file| format!("{} ", (b'a' + file as u8) as char))
        .collect();

    let mut out = String::new();
    out.push_str(&format!("   {}\n", footer.trim_end()));
    for &rank in &ranks {
        out.push_str(&format!("{}  ", rank + 1));
        for &file in &files {
            let symbol = match Square::new(file, rank) {
                Some(square) => match position.piece_at(square) {
                    Some(piece) => piece.symbol(),
                    None => match square.color() {
                        SquareColor::Light => EMPTY_LIGHT,
                        SquareColor::Dark => EMPTY_DARK,
                    },
                },
                None => EMPTY_LIGHT,
            };
            out.push(symbol);
            out.push(' ');
        }
        out.push_str(&format!(" {}\n", rank + 1));
    }
    out.push_str(&format!("   {}\n", footer.trim_end()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::Layout;

    #[test]
    fn test_white_view_has_black_on_top() {
        let pos = Position::new_game(Layout::Standard);
        let text = render_board_from(&pos, Side::White);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert!(lines[0].starts_with("   a b"));
        assert!(lines[1].starts_with("8  ♜ ♞ ♝ ♛ ♚"));
        assert!(lines[8].starts_with("1  ♖ ♘ ♗ ♕ ♔"));
    }

    #[test]
    fn test_black_view_is_rotated() {
        let pos = Position::new_game(Layout::Standard);
        let text = render_board_from(&pos, Side::Black);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("   h g"));
        assert!(lines[1].starts_with("1  ♖ ♘ ♗ ♔ ♕"));
        assert!(lines[8].starts_with("8  ♜ ♞ ♝ ♚ ♛"));
    }

    #[test]
    fn test_empty_squares_show_color() {
        let pos = Position::empty();
        let text = render_board(&pos);
        // rank 1 from White's side: a1 dark, b1 light
        let rank_one = text.lines().nth(8).unwrap();
        assert!(rank_one.starts_with("1  · "));
    }
}
