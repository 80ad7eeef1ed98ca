//! 8x8 mailbox board.
//!
//! `Board` is a small `Copy` value (64 optional pieces). Every transition
//! builds a fresh board; a board handed to another state is never edited
//! in place, which keeps the legality filter's simulate-and-discard free of
//! side effects.

use std::fmt;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::BACK_RANK_ORDER;
use crate::game_state::chess_types::*;
use crate::utils::render_game_state::render_board;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard starting arrangement.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK_ORDER.iter().enumerate() {
            let col = col as u8;
            board.put(Color::Black.home_row(), col, Piece::new(*kind, Color::Black));
            board.put(Color::White.home_row(), col, Piece::new(*kind, Color::White));
            board.put(
                Color::Black.pawn_start_row(),
                col,
                Piece::new(PieceKind::Pawn, Color::Black),
            );
            board.put(
                Color::White.pawn_start_row(),
                col,
                Piece::new(PieceKind::Pawn, Color::White),
            );
        }
        board
    }

    /// Build a board from eight rows of eight characters, row 0 (rank 8)
    /// first. Upper case is white, lower case is black, `.` is empty.
    pub fn from_diagram(rows: [&str; 8]) -> ChessResult<Self> {
        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != 8 {
                return Err(ChessError::InvalidDiagram(format!(
                    "row {row} has {} squares, expected 8",
                    chars.len()
                )));
            }
            for (col, ch) in chars.into_iter().enumerate() {
                if ch == '.' {
                    continue;
                }
                let piece = piece_from_char(ch).ok_or_else(|| {
                    ChessError::InvalidDiagram(format!("unknown piece letter {ch:?} in row {row}"))
                })?;
                board.put(row as u8, col as u8, piece);
            }
        }
        Ok(board)
    }

    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.squares[position.row() as usize][position.col() as usize]
    }

    #[inline]
    pub fn is_empty_at(&self, position: Position) -> bool {
        self.piece_at(position).is_none()
    }

    #[inline]
    pub fn set(&mut self, position: Position, piece: Option<Piece>) {
        self.squares[position.row() as usize][position.col() as usize] = piece;
    }

    /// Copy of this board with whatever stands on `from` relocated to `to`.
    /// Anything on `to` is overwritten.
    #[must_use]
    pub fn with_piece_moved(&self, from: Position, to: Position) -> Board {
        let mut next = *self;
        let piece = next.piece_at(from);
        next.set(from, None);
        next.set(to, piece);
        next
    }

    /// Occupied squares with their pieces, row 0 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| self.piece_at(pos).map(|piece| (pos, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(pos, _)| pos)
    }

    fn put(&mut self, row: u8, col: u8, piece: Piece) {
        self.squares[row as usize][col as usize] = Some(piece);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}

/// Standard starting arrangement (pawns on ranks 2 and 7).
pub fn create_initial_board() -> Board {
    Board::initial()
}

fn piece_from_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    Some(Piece::new(kind, color))
}
