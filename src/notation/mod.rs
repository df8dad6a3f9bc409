//! Text formats for positions and moves: FEN and coordinate notation.

mod coordinate;
mod fen;

pub use coordinate::*;
pub use fen::*;
