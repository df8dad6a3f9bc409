use super::*;

// ==================== STARTING POSITION PERFT TESTS ====================

#[test]
fn test_perft_starting_position_depth_1() {
    let pos = Position::default();
    assert_eq!(pos.perft(1), 20);
}

#[test]
fn test_perft_starting_position_depth_2() {
    let pos = Position::default();
    assert_eq!(pos.perft(2), 400);
}

#[test]
fn test_perft_starting_position_depth_3() {
    let pos = Position::default();
    assert_eq!(pos.perft(3), 8902);
}

#[test]
fn test_perft_divide_starting_position() {
    let pos = Position::default();
    let lines = pos.perft_divide(2);
    assert_eq!(lines.len(), 20);
    assert!(lines.iter().all(|(_, nodes)| *nodes == 20));
    assert_eq!(lines.iter().map(|(_, nodes)| nodes).sum::<u64>(), 400);
}
