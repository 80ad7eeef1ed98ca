//! Check detection.
//!
//! Attacks are found by looking outward from the target square with each
//! piece's capture pattern (pawn diagonals, knight jumps, king steps, rays),
//! so detection never needs castling generation and cannot recurse.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::king_moves::KING_OFFSETS;
use crate::moves::knight_moves::KNIGHT_OFFSETS;
use crate::moves::pawn_moves::pawn_capture_squares;
use crate::moves::rook_moves::ROOK_DIRECTIONS;
use crate::moves::sliding::first_piece_along;

#[inline]
pub fn king_position(board: &Board, color: Color) -> Option<Position> {
    board.king_position(color)
}

/// Whether `color`'s king is attacked. A board without that king is treated
/// as not in check.
#[inline]
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_position(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

pub fn is_square_attacked(board: &Board, square: Position, attacker_color: Color) -> bool {
    let holds = |candidate: Position, kind: PieceKind| {
        board.piece_at(candidate) == Some(Piece::new(kind, attacker_color))
    };

    // A pawn of `attacker_color` attacks `square` from the squares a pawn of
    // the other colour would capture onto.
    if pawn_capture_squares(square, attacker_color.opposite())
        .any(|from| holds(from, PieceKind::Pawn))
    {
        return true;
    }

    if KNIGHT_OFFSETS
        .iter()
        .filter_map(|&(d_row, d_col)| square.offset(d_row, d_col))
        .any(|from| holds(from, PieceKind::Knight))
    {
        return true;
    }

    if KING_OFFSETS
        .iter()
        .filter_map(|&(d_row, d_col)| square.offset(d_row, d_col))
        .any(|from| holds(from, PieceKind::King))
    {
        return true;
    }

    let slider_hits = |directions: &[(i8, i8)], kind: PieceKind| {
        directions.iter().any(|&direction| {
            matches!(
                first_piece_along(board, square, direction),
                Some((_, piece)) if piece.color == attacker_color
                    && (piece.kind == kind || piece.kind == PieceKind::Queen)
            )
        })
    };

    slider_hits(&BISHOP_DIRECTIONS, PieceKind::Bishop)
        || slider_hits(&ROOK_DIRECTIONS, PieceKind::Rook)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board::create_initial_board;

    fn at(row: u8, col: u8) -> Position {
        Position::new(row, col).expect("test square should be on the board")
    }

    fn board(rows: [&str; 8]) -> Board {
        Board::from_diagram(rows).expect("diagram should parse")
    }

    #[test]
    fn nobody_is_in_check_at_the_start() {
        let b = create_initial_board();
        assert!(!is_in_check(&b, Color::White));
        assert!(!is_in_check(&b, Color::Black));
    }

    #[test]
    fn missing_king_is_not_in_check() {
        let b = board([
            "....q...", "........", "........", "........", "........", "........", "........",
            "........",
        ]);
        assert!(!is_in_check(&b, Color::White));
    }

    #[test]
    fn pawn_attacks_only_diagonally_forward() {
        let b = board([
            "........", "........", "........", "...p....", "........", "........", "........",
            "........",
        ]);
        assert!(is_square_attacked(&b, at(4, 2), Color::Black));
        assert!(is_square_attacked(&b, at(4, 4), Color::Black));
        assert!(!is_square_attacked(&b, at(4, 3), Color::Black));
        assert!(!is_square_attacked(&b, at(2, 2), Color::Black));
    }

    #[test]
    fn blocked_slider_does_not_give_check() {
        let b = board([
            "....r..k", "........", "........", "....N...", "........", "........", "........",
            "....K...",
        ]);
        assert!(!is_in_check(&b, Color::White));

        let open = board([
            "....r..k", "........", "........", "........", "........", "........", "........",
            "....K...",
        ]);
        assert!(is_in_check(&open, Color::White));
    }

    #[test]
    fn knight_and_bishop_checks_are_seen() {
        let knight = board([
            "....k...", "........", "...N....", "........", "........", "........", "........",
            "....K...",
        ]);
        assert!(is_in_check(&knight, Color::Black));

        let bishop = board([
            "....k...", "........", "........", "........", "B.......", "........", "........",
            "....K...",
        ]);
        assert!(is_in_check(&bishop, Color::Black));
    }

    #[test]
    fn queen_attacks_along_both_line_types() {
        let b = board([
            "........", "........", "........", "...q....", "........", "........", "........",
            "........",
        ]);
        assert!(is_square_attacked(&b, at(3, 7), Color::Black));
        assert!(is_square_attacked(&b, at(7, 7), Color::Black));
        assert!(!is_square_attacked(&b, at(5, 4), Color::Black));
    }
}
