//! Errors used throughout the rules engine.
//!
//! `ChessError` is the single error type returned by the public API. Most
//! rule outcomes (no legal moves, a destination filtered out for self-check,
//! a board without a king) are ordinary control flow and never surface here;
//! the variants below cover malformed input and caller misuse only.

use thiserror::Error;

use crate::game_state::chess_types::{Color, PieceKind, Position};

/// Unified error type for the rules engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Row or column outside `0..=7`.
    #[error("coordinate ({row}, {col}) is outside the 8x8 board")]
    InvalidCoordinate { row: i16, col: i16 },

    /// A square name such as `e4` could not be parsed.
    #[error("invalid square notation: {0:?}")]
    InvalidNotation(String),

    /// A board diagram row had the wrong length or an unknown piece letter.
    #[error("invalid board diagram: {0}")]
    InvalidDiagram(String),

    /// The origin square of a move request is empty.
    #[error("no piece at {0}")]
    NoPieceAtSquare(Position),

    /// The origin square holds a piece of the side that is not to move.
    #[error("piece at {square} belongs to {color}, who is not to move")]
    WrongSideToMove { square: Position, color: Color },

    /// The destination is not in the piece's legal move set.
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Position, to: Position },

    /// Pawns may only promote to a queen, rook, bishop or knight.
    #[error("cannot promote to {0}")]
    InvalidPromotion(PieceKind),

    /// `GameHistory::undo` was called with no moves played.
    #[error("no move to undo")]
    NothingToUndo,
}

/// Result alias for rules engine operations.
pub type ChessResult<T> = Result<T, ChessError>;
