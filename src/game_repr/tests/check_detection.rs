use super::*;

// ==================== CHECK DETECTION TESTS ====================

#[test]
fn test_rook_check_and_block() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e1", PieceKind::King, Side::White);
    place_piece(&mut pos, "e8", PieceKind::Rook, Side::Black);
    place_piece(&mut pos, "a8", PieceKind::King, Side::Black);
    assert!(pos.in_check(Side::White));
    assert!(!pos.in_check(Side::Black));

    place_piece(&mut pos, "e4", PieceKind::Pawn, Side::White);
    assert!(!pos.in_check(Side::White), "Pawn on e4 blocks the file");
}

#[test]
fn test_knight_check() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e1", PieceKind::King, Side::White);
    place_piece(&mut pos, "d3", PieceKind::Knight, Side::Black);
    assert!(pos.in_check(Side::White));
}

#[test]
fn test_pawn_checks_follow_direction() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e4", PieceKind::King, Side::White);
    place_piece(&mut pos, "d5", PieceKind::Pawn, Side::Black);
    assert!(pos.in_check(Side::White), "Black pawn on d5 attacks e4");

    let mut pos = empty_board();
    place_piece(&mut pos, "e4", PieceKind::King, Side::White);
    place_piece(&mut pos, "d3", PieceKind::Pawn, Side::Black);
    assert!(!pos.in_check(Side::White), "Black pawn on d3 attacks downwards only");

    let mut pos = empty_board();
    place_piece(&mut pos, "e5", PieceKind::King, Side::Black);
    place_piece(&mut pos, "d4", PieceKind::Pawn, Side::White);
    assert!(pos.in_check(Side::Black));
}

#[test]
fn test_pawn_push_square_is_not_attacked() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e3", PieceKind::King, Side::Black);
    place_piece(&mut pos, "e2", PieceKind::Pawn, Side::White);
    assert!(!pos.in_check(Side::Black));
}

#[test]
fn test_no_king_is_never_in_check() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e8", PieceKind::Queen, Side::Black);
    assert_eq!(pos.king_square(Side::White), None);
    assert!(!pos.in_check(Side::White));
}

#[test]
fn test_castling_squares_are_not_attacked() {
    let pos = fen("r3k2r/8/8/8/8/8/8/4K3 b kq - 0 1");
    let king = pos.square(sq("e8"));

    assert!(has_targets(pos.seeing(king), &["c8", "g8"]));
    assert!(!pos.attacks(king).contains(sq("g8")));
    assert!(!pos.attacks(king).contains(sq("c8")));
}

#[test]
fn test_must_answer_check() {
    let mut pos = fen("4k3/8/8/8/8/8/3P4/r3K3 w - - 0 1");
    assert!(pos.in_check(Side::White));

    assert!(matches!(try_play(&mut pos, "d2d3"), Err(MoveError::InCheck { .. })));
    assert!(matches!(try_play(&mut pos, "e1d1"), Err(MoveError::InCheck { .. })));
    assert!(try_play(&mut pos, "e1e2").is_ok());
}

#[test]
fn test_check_annotation() {
    let mut pos = Position::default();
    assert_eq!(pos.check_annotation(), "");

    play(&mut pos, &["e2e4", "f7f6", "d2d4", "g7g5"]);
    let queen = pos.square(sq("d1"));
    let mut checked = pos.clone();
    checked.attempt_move(Move::new(queen, sq("h5"))).unwrap();
    assert_eq!(checked.check_annotation(), "#");

    play(&mut pos, &["f1b5"]);
    assert_eq!(pos.check_annotation(), "");
    play(&mut pos, &["c7c6", "b5c6"]);
    assert_eq!(pos.check_annotation(), "");
    play(&mut pos, &["a7a6", "c6d7"]);
    assert_eq!(pos.check_annotation(), "+");
}
