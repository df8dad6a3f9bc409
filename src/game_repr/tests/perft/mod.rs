use super::*;

// ==================== PERFT TESTS ====================
// Node counts from the chessprogramming.org perft results page.

mod complex_promotions;
mod endgame;
mod kiwipete;
mod middle_game;
mod starting_position;
