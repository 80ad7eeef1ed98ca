//! Queen movement: rook and bishop rays combined.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::moves::bishop_moves::bishop_targets;
use crate::moves::rook_moves::rook_targets;

/// Union of the rook and bishop rays.
#[inline]
pub fn queen_targets(board: &Board, from: Position, color: Color) -> Vec<Position> {
    let mut targets = rook_targets(board, from, color);
    targets.extend(bishop_targets(board, from, color));
    targets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queen_on_empty_d4_reaches_twenty_seven_squares() {
        let d4 = Position::new(4, 3).expect("d4 is on the board");
        assert_eq!(queen_targets(&Board::empty(), d4, Color::Black).len(), 27);
    }
}
