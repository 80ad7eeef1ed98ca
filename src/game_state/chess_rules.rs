//! Canonical chess-rule constants.
//!
//! Static layout literals used to set up the initial board and to locate the
//! king and rooks involved in castling.

use crate::game_state::chess_types::{CastleSide, PieceKind};

/// Back-rank order from column a to column h, identical for both sides.
pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Column of both kings at the start of the game.
pub const KING_HOME_COL: u8 = 4;

/// Pieces offered when a pawn reaches its far rank.
pub const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Standard starting position as a board diagram, row 0 (rank 8) first.
pub const STARTING_DIAGRAM: [&str; 8] = [
    "rnbqkbnr", "pppppppp", "........", "........", "........", "........", "PPPPPPPP",
    "RNBQKBNR",
];

/// Column layout of one castling direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingLane {
    pub side: CastleSide,
    /// Home column of the rook taking part.
    pub rook_from_col: u8,
    /// Column the rook lands on, next to the king.
    pub rook_to_col: u8,
    /// Column the king lands on.
    pub king_to_col: u8,
    /// Columns strictly between king and rook; all must be empty.
    pub between_cols: &'static [u8],
}

pub const KING_SIDE_LANE: CastlingLane = CastlingLane {
    side: CastleSide::KingSide,
    rook_from_col: 7,
    rook_to_col: 5,
    king_to_col: 6,
    between_cols: &[5, 6],
};

pub const QUEEN_SIDE_LANE: CastlingLane = CastlingLane {
    side: CastleSide::QueenSide,
    rook_from_col: 0,
    rook_to_col: 3,
    king_to_col: 2,
    between_cols: &[1, 2, 3],
};

pub const CASTLING_LANES: [CastlingLane; 2] = [KING_SIDE_LANE, QUEEN_SIDE_LANE];

#[inline]
pub const fn castling_lane(side: CastleSide) -> CastlingLane {
    match side {
        CastleSide::KingSide => KING_SIDE_LANE,
        CastleSide::QueenSide => QUEEN_SIDE_LANE,
    }
}
