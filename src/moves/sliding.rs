//! Ray casting and fixed-offset stepping shared by the piece movement rules.
//!
//! Both helpers honour the occupancy rule every generator relies on: a square
//! held by a friendly piece is never a target, a square held by an opposing
//! piece is a target (a capture), and off-board squares are never considered.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, Position};

/// Walk each direction until the edge or the first occupied square. The
/// blocking square is included when it holds an opposing piece.
pub fn slide_targets(
    board: &Board,
    from: Position,
    color: Color,
    directions: &[(i8, i8)],
) -> Vec<Position> {
    let mut targets = Vec::with_capacity(14);

    for &(d_row, d_col) in directions {
        let mut cursor = from.offset(d_row, d_col);
        while let Some(square) = cursor {
            match board.piece_at(square) {
                None => targets.push(square),
                Some(piece) => {
                    if piece.color != color {
                        targets.push(square);
                    }
                    break;
                }
            }
            cursor = square.offset(d_row, d_col);
        }
    }

    targets
}

/// Single steps by each offset, skipping squares held by friendly pieces.
pub fn step_targets(
    board: &Board,
    from: Position,
    color: Color,
    offsets: &[(i8, i8)],
) -> Vec<Position> {
    offsets
        .iter()
        .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col))
        .filter(|square| !matches!(board.piece_at(*square), Some(piece) if piece.color == color))
        .collect()
}

/// First piece met walking from `from` (exclusive) along one direction.
pub fn first_piece_along(
    board: &Board,
    from: Position,
    (d_row, d_col): (i8, i8),
) -> Option<(Position, Piece)> {
    let mut cursor = from.offset(d_row, d_col);
    while let Some(square) = cursor {
        if let Some(piece) = board.piece_at(square) {
            return Some((square, piece));
        }
        cursor = square.offset(d_row, d_col);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::PieceKind;

    fn at(row: u8, col: u8) -> Position {
        Position::new(row, col).expect("test square should be on the board")
    }

    #[test]
    fn slide_stops_before_friend_and_on_enemy() {
        let board = Board::from_diagram([
            "........", "........", "........", "...p....", "........", "........", "...R....",
            "...K....",
        ])
        .expect("diagram should parse");

        let up = slide_targets(&board, at(6, 3), Color::White, &[(-1, 0)]);
        assert_eq!(up, vec![at(5, 3), at(4, 3), at(3, 3)]);

        let down = slide_targets(&board, at(6, 3), Color::White, &[(1, 0)]);
        assert!(down.is_empty());
    }

    #[test]
    fn steps_off_the_board_are_dropped() {
        let board = Board::empty();
        let targets = step_targets(&board, at(0, 0), Color::Black, &[(-1, 0), (1, 0), (0, 1)]);
        assert_eq!(targets, vec![at(1, 0), at(0, 1)]);
    }

    #[test]
    fn first_piece_along_skips_empty_squares() {
        let board = Board::from_diagram([
            "........", "........", "........", "........", "........", "........", "........",
            "q......K",
        ])
        .expect("diagram should parse");
        let hit = first_piece_along(&board, at(7, 7), (0, -1));
        assert_eq!(
            hit,
            Some((at(7, 0), Piece::new(PieceKind::Queen, Color::Black)))
        );
        assert_eq!(first_piece_along(&board, at(7, 7), (-1, 0)), None);
    }
}
