use super::*;

// ==================== EN PASSANT TESTS ====================

#[test]
fn test_double_push_sets_target_for_one_ply() {
    let mut pos = Position::default();
    play(&mut pos, &["e2e4"]);
    assert_eq!(pos.en_passant(), Some(sq("e3")));

    play(&mut pos, &["g8f6"]);
    assert_eq!(pos.en_passant(), None, "Any other move clears the target");

    play(&mut pos, &["e4e5"]);
    assert_eq!(pos.en_passant(), None, "Single push sets no target");
}

#[test]
fn test_white_en_passant_removes_pushed_pawn() {
    let mut pos = Position::default();
    play(&mut pos, &["e2e4", "a7a6", "e4e5", "d7d5"]);
    assert_eq!(pos.en_passant(), Some(sq("d6")));

    let black_before = count_of(&pos, Side::Black);
    play(&mut pos, &["e5d6"]);

    assert_eq!(pos.piece_at(sq("d5")), None, "Captured pawn must be removed");
    assert_eq!(pos.piece_at(sq("e5")), None);
    let capturer = pos.piece_at(sq("d6")).expect("capturing pawn on d6");
    assert_eq!((capturer.kind, capturer.side), (PieceKind::Pawn, Side::White));
    assert_eq!(count_of(&pos, Side::Black), black_before - 1);
    assert_eq!(pos.captured_of(Side::Black)[0].kind, PieceKind::Pawn);
    assert_eq!(pos.halfmove_clock(), 0);
}

#[test]
fn test_black_en_passant_removes_pushed_pawn() {
    let mut pos = Position::default();
    play(&mut pos, &["a2a3", "e7e5", "a3a4", "e5e4", "d2d4"]);
    assert_eq!(pos.en_passant(), Some(sq("d3")));

    play(&mut pos, &["e4d3"]);
    assert_eq!(pos.piece_at(sq("d4")), None);
    assert_eq!(pos.piece_at(sq("d3")).map(|p| p.side), Some(Side::Black));
    assert_eq!(count_of(&pos, Side::White), 15);
}

#[test]
fn test_en_passant_expires() {
    let mut pos = Position::default();
    play(&mut pos, &["e2e4", "a7a6", "e4e5", "d7d5", "h2h3", "h7h6"]);

    let result = try_play(&mut pos, "e5d6");
    assert!(
        matches!(result, Err(MoveError::ShapeInvalid { .. })),
        "En passant is only available right after the double push, got {:?}",
        result
    );
}

#[test]
fn test_en_passant_exposing_king_is_illegal() {
    // capturing clears both pawns off the fifth rank between king and rook
    let mut pos = fen("8/8/8/K2pP2r/8/8/8/4k3 w - d6 0 1");
    assert!(!pos.in_check(Side::White));

    let result = try_play(&mut pos, "e5d6");
    assert!(matches!(result, Err(MoveError::InCheck { .. })), "got {:?}", result);
    assert_eq!(pos.piece_at(sq("d5")).map(|p| p.kind), Some(PieceKind::Pawn));
}

#[test]
fn test_en_passant_listed_in_legal_moves() {
    let mut pos = Position::default();
    play(&mut pos, &["e2e4", "a7a6", "e4e5", "f7f5"]);

    let pawn = pos.square(sq("e5"));
    let targets = pos.legal_targets(pawn);
    assert!(has_targets(targets, &["e6", "f6"]));
    assert_eq!(targets.len(), 2);
}
