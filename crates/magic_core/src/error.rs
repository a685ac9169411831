//! Error types shared by the engine crates.

use thiserror::Error;

use crate::types::Color;

/// Why a move was refused by the legality check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("no piece on the source square")]
    NoPiece,
    #[error("the piece belongs to the other side")]
    WrongSide,
    #[error("source and destination are the same square")]
    NullMove,
    #[error("the destination holds a friendly piece")]
    SelfCapture,
    #[error("the piece cannot move that way")]
    Geometry,
    #[error("the path is blocked")]
    Blocked,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A coordinate outside the 16×16 board reached a board operation.
    #[error("square ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("illegal move: {0}")]
    IllegalMove(Rejection),

    /// The bot could not find any legal move for its side.
    #[error("{0} has no legal move")]
    NoLegalMove(Color),

    #[error("the game is already over")]
    GameOver,

    #[error("invalid board layout: {0}")]
    InvalidLayout(String),

    #[error("difficulty {0} is outside 1..=10")]
    InvalidDifficulty(u8),

    #[error("cannot parse square {0:?}")]
    InvalidSquare(String),
}

impl From<Rejection> for CoreError {
    fn from(r: Rejection) -> Self {
        CoreError::IllegalMove(r)
    }
}
