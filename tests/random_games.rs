//! Seeded random games cross-checked against the `chess` crate.
//!
//! At every ply of every game the legal move list, check status and game
//! completion must match an independent move generator.

use std::str::FromStr;

use chess::{Board, BoardStatus, MoveGen};
use chess_rules::agent::{MoveSuggester, RandomSuggester};
use chess_rules::game_repr::{Completion, DrawReason, Layout, Position};

const GAMES: u64 = 24;
const MAX_PLIES: usize = 200;

fn our_moves(position: &Position) -> Vec<String> {
    let mut moves: Vec<String> = position.legal_moves().iter().map(|mv| mv.to_string()).collect();
    moves.sort();
    moves
}

fn reference_moves(board: &Board) -> Vec<String> {
    let mut moves: Vec<String> = MoveGen::new_legal(board).map(|mv| mv.to_string()).collect();
    moves.sort();
    moves
}

fn reference_board(position: &Position) -> Board {
    let fen = position.to_fen();
    Board::from_str(&fen).unwrap_or_else(|e| panic!("reference rejected {}: {:?}", fen, e))
}

fn play_out(seed: u64) -> Position {
    let mut position = Position::new_game(Layout::Standard);
    let mut suggester = RandomSuggester::with_seed(seed);

    for ply in 0..MAX_PLIES {
        let fen = position.to_fen();
        let board = reference_board(&position);

        assert_eq!(
            our_moves(&position),
            reference_moves(&board),
            "seed {} ply {}: move lists differ in {}",
            seed,
            ply,
            fen
        );
        assert_eq!(
            position.in_check(position.side_to_move()),
            board.checkers().popcnt() > 0,
            "seed {} ply {}: check status differs in {}",
            seed,
            ply,
            fen
        );

        match board.status() {
            BoardStatus::Ongoing => assert!(!position.completion().is_done(), "{}", fen),
            BoardStatus::Checkmate => {
                assert_eq!(
                    position.completion(),
                    Completion::Win {
                        winner: position.side_to_move().other()
                    },
                    "{}",
                    fen
                );
                return position;
            }
            BoardStatus::Stalemate => {
                assert_eq!(
                    position.completion(),
                    Completion::Draw {
                        reason: DrawReason::Stalemate
                    },
                    "{}",
                    fen
                );
                return position;
            }
        }

        let mv = suggester.suggest(&position).expect("ongoing game has a move");
        position
            .attempt_move(mv)
            .unwrap_or_else(|e| panic!("seed {} ply {}: {} rejected: {}", seed, ply, mv, e));
    }
    position
}

#[test]
fn test_random_games_match_reference_generator() {
    for seed in 0..GAMES {
        play_out(seed);
    }
}

#[test]
fn test_random_games_replay_from_seed() {
    let first = play_out(1234);
    let second = play_out(1234);
    assert_eq!(first.to_fen(), second.to_fen());
    assert_eq!(first.history(), second.history());
}

#[test]
fn test_fen_survives_every_ply() {
    let mut position = Position::new_game(Layout::Standard);
    let mut suggester = RandomSuggester::with_seed(99);

    while !position.completion().is_done() && position.ply() < 120 {
        let fen = position.to_fen();
        let reloaded = Position::from_fen(&fen).expect("own FEN parses");
        assert_eq!(reloaded.to_fen(), fen);
        assert_eq!(our_moves(&reloaded), our_moves(&position), "{}", fen);

        let mv = suggester.suggest(&position).expect("ongoing game has a move");
        position.attempt_move(mv).expect("suggested move is legal");
    }
}
