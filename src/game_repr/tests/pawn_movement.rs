use super::*;

// ==================== PAWN MOVEMENT TESTS ====================

#[test]
fn test_pawn_single_and_double_push_from_start() {
    let pos = Position::default();
    let pawn = pos.square(sq("e2"));

    let targets = pos.seeing(pawn);
    assert_eq!(targets.len(), 2);
    assert!(has_targets(targets, &["e3", "e4"]));
}

#[test]
fn test_pawn_blocked_directly() {
    let mut pos = empty_board();
    let pawn = place_piece(&mut pos, "e2", PieceKind::Pawn, Side::White);
    place_piece(&mut pos, "e3", PieceKind::Knight, Side::Black);

    assert!(pos.seeing(pawn).is_empty(), "Blocked pawn can neither push nor jump");
}

#[test]
fn test_pawn_double_push_blocked_on_second_square() {
    let mut pos = empty_board();
    let pawn = place_piece(&mut pos, "e2", PieceKind::Pawn, Side::White);
    place_piece(&mut pos, "e4", PieceKind::Knight, Side::White);

    let targets = pos.seeing(pawn);
    assert_eq!(targets.len(), 1);
    assert!(targets.contains(sq("e3")));
}

#[test]
fn test_pawn_single_push_off_start_rank() {
    let mut pos = empty_board();
    let pawn = place_piece(&mut pos, "e3", PieceKind::Pawn, Side::White);

    let targets = pos.seeing(pawn);
    assert_eq!(targets.len(), 1);
    assert!(targets.contains(sq("e4")));
}

#[test]
fn test_black_pawn_moves_down() {
    let pos = Position::default();
    let pawn = pos.square(sq("d7"));

    let targets = pos.seeing(pawn);
    assert_eq!(targets.len(), 2);
    assert!(has_targets(targets, &["d6", "d5"]));
}

#[test]
fn test_pawn_captures_only_enemies_diagonally() {
    let mut pos = empty_board();
    let pawn = place_piece(&mut pos, "d4", PieceKind::Pawn, Side::White);
    place_piece(&mut pos, "e5", PieceKind::Pawn, Side::Black);
    place_piece(&mut pos, "c5", PieceKind::Pawn, Side::White);

    let targets = pos.seeing(pawn);
    assert_eq!(targets.len(), 2);
    assert!(has_targets(targets, &["d5", "e5"]));
    assert!(!targets.contains(sq("c5")));
}

#[test]
fn test_pawn_cannot_capture_forward() {
    let mut pos = empty_board();
    let pawn = place_piece(&mut pos, "d4", PieceKind::Pawn, Side::White);
    place_piece(&mut pos, "d5", PieceKind::Pawn, Side::Black);

    assert!(pos.seeing(pawn).is_empty());
}

#[test]
fn test_edge_pawns_do_not_wrap() {
    let mut pos = empty_board();
    let a_pawn = place_piece(&mut pos, "a2", PieceKind::Pawn, Side::White);
    let h_pawn = place_piece(&mut pos, "h7", PieceKind::Pawn, Side::Black);
    place_piece(&mut pos, "h2", PieceKind::Rook, Side::Black);
    place_piece(&mut pos, "h3", PieceKind::Rook, Side::Black);
    place_piece(&mut pos, "a7", PieceKind::Rook, Side::White);
    place_piece(&mut pos, "a6", PieceKind::Rook, Side::White);

    let a_targets = pos.seeing(a_pawn);
    assert!(!a_targets.contains(sq("h2")) && !a_targets.contains(sq("h3")));
    assert!(has_targets(a_targets, &["a3", "a4"]));

    let h_targets = pos.seeing(h_pawn);
    assert!(!h_targets.contains(sq("a7")) && !h_targets.contains(sq("a6")));
    assert!(has_targets(h_targets, &["h6", "h5"]));
}

#[test]
fn test_en_passant_square_ignored_by_the_pushing_side() {
    let mut pos = Position::default();
    play(&mut pos, &["e2e4"]);
    assert_eq!(pos.en_passant(), Some(sq("e3")));

    // White's own pawns must not treat e3 as capturable
    let d_pawn = pos.square(sq("d2"));
    let f_pawn = pos.square(sq("f2"));
    assert!(!pos.seeing(d_pawn).contains(sq("e3")));
    assert!(!pos.seeing(f_pawn).contains(sq("e3")));
}

#[test]
fn test_pawn_move_resets_halfmove_clock() {
    let mut pos = fen("4k3/8/8/8/8/8/4P3/4K3 w - - 17 40");
    play(&mut pos, &["e2e3"]);
    assert_eq!(pos.halfmove_clock(), 0);
}
