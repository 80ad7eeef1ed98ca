//! Rook rays along ranks and files.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::moves::sliding::slide_targets;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

#[inline]
pub fn rook_targets(board: &Board, from: Position, color: Color) -> Vec<Position> {
    slide_targets(board, from, color, &ROOK_DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_on_empty_d4_reaches_fourteen_squares() {
        let d4 = Position::new(4, 3).expect("d4 is on the board");
        assert_eq!(rook_targets(&Board::empty(), d4, Color::White).len(), 14);
    }
}
