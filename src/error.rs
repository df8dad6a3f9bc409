//! Error types for the rules engine and its collaborators.
//!
//! Every error here is recoverable: a rejected move or a bad command line
//! leaves the game exactly as it was.

use crate::game_repr::{Completion, Piece, PieceKind, Side, Square};

/// Why `attempt_move` rejected a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The piece is not where it claims to be, cannot reach the target, or
    /// a castling precondition (right, rook, empty path) fails.
    #[error("{piece} cannot move to {target}")]
    ShapeInvalid { piece: Piece, target: Square },

    /// Missing promotion on the last rank, or a promotion where none applies.
    #[error("{piece} moving to {target} cannot promote to {promotion}")]
    PromotionInvalid {
        piece: Piece,
        target: Square,
        promotion: PieceKind,
    },

    /// The move leaves the mover's king attacked, or castles out of,
    /// through or into check.
    #[error("{piece} moving to {target} leaves its king in check")]
    InCheck { piece: Piece, target: Square },

    #[error("it is {to_move}'s turn, not {side}'s")]
    WrongTurn { side: Side, to_move: Side },

    #[error("the game is over ({completion})")]
    GameOver { completion: Completion },
}

/// Errors reading FEN or coordinate notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("'{0}' is not a square")]
    BadSquare(String),

    #[error("empty FEN")]
    EmptyFen,

    #[error("FEN has {0} fields, at most 6 allowed")]
    TooManyFields(usize),

    #[error("bad FEN board: {0}")]
    BadBoard(String),

    #[error("bad side to move '{0}'")]
    BadSideToMove(String),

    #[error("bad castling field '{0}'")]
    BadCastling(String),

    #[error("bad move counter '{0}'")]
    BadCounter(String),

    #[error("'{0}' is not a promotion piece")]
    BadPromotion(char),

    #[error("'{0}' is not a coordinate move")]
    BadMove(String),

    #[error("no piece on {0}")]
    NoPieceOnSquare(Square),
}

/// Errors from a move suggester.
#[derive(Debug, thiserror::Error)]
pub enum SuggestError {
    #[error("could not talk to engine: {0}")]
    Io(#[from] std::io::Error),

    #[error("engine exited without answering")]
    EngineClosed,

    #[error("engine gave no answer within {0:?}")]
    Timeout(std::time::Duration),

    #[error("no legal move to suggest")]
    NoMove,

    #[error("could not read engine reply '{reply}': {source}")]
    BadReply {
        reply: String,
        #[source]
        source: NotationError,
    },
}

/// Invalid session configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a number, got '{value}'")]
    NotANumber { var: &'static str, value: String },

    #[error("difficulty must be between 1 and 20, got {0}")]
    DifficultyOutOfRange(u32),
}
