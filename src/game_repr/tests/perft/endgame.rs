use super::*;

// ==================== ENDGAME PERFT TESTS ====================
// Position 3: en passant discovered checks along the fifth rank

const FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

#[test]
fn test_perft_endgame_depth_1() {
    let pos = fen(FEN);
    assert_eq!(pos.perft(1), 14);
}

#[test]
fn test_perft_endgame_depth_2() {
    let pos = fen(FEN);
    assert_eq!(pos.perft(2), 191);
}

#[test]
fn test_perft_endgame_depth_3() {
    let pos = fen(FEN);
    assert_eq!(pos.perft(3), 2812);
}

#[test]
fn test_perft_endgame_depth_4() {
    let pos = fen(FEN);
    assert_eq!(pos.perft(4), 43238);
}
