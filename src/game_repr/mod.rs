mod castling;
mod engine;
mod legality;
mod make_move;
mod moves;
mod outcome;
mod perft;
mod piece;
mod piece_moves;
mod position;
mod square;
pub mod repetition;
pub mod tables;

#[cfg(test)]
mod tests;

pub use castling::*;
pub use engine::*;
pub use moves::*;
pub use outcome::*;
pub use piece::*;
pub use position::*;
pub use square::*;
