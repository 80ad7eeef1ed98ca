//! Pawn move generation, including en-passant captures.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};
use crate::moves::pawn_moves::{pawn_capture_squares, pawn_push_targets};

/// Pushes plus diagonal captures. A diagonal is a capture when it holds an
/// opposing piece or is the en-passant target skipped by an opposing pawn.
pub fn pawn_moves(
    board: &Board,
    from: Position,
    color: Color,
    en_passant_target: Option<Position>,
) -> Vec<Position> {
    let mut targets = pawn_push_targets(board, from, color);

    for to in pawn_capture_squares(from, color) {
        match board.piece_at(to) {
            Some(piece) if piece.color != color => targets.push(to),
            Some(_) => {}
            None => {
                if en_passant_target == Some(to) && en_passant_victim(board, to, color).is_some() {
                    targets.push(to);
                }
            }
        }
    }

    targets
}

/// True when `target` is the square an opposing pawn skips on its double
/// advance, i.e. a square `color` may capture onto en passant.
#[inline]
pub fn is_capturable_en_passant(target: Position, color: Color) -> bool {
    let opponent = color.opposite();
    target.row() as i8 == opponent.pawn_start_row() as i8 + opponent.pawn_direction()
}

/// Square of the opposing pawn a `color` pawn removes by capturing onto
/// `target` en passant. `None` unless `target` is empty, sits on the skipped
/// row, and an opposing pawn stands just past it.
pub fn en_passant_victim(board: &Board, target: Position, color: Color) -> Option<Position> {
    if !board.is_empty_at(target) || !is_capturable_en_passant(target, color) {
        return None;
    }
    let victim = target.offset(-color.pawn_direction(), 0)?;
    let opposing_pawn = Piece::new(PieceKind::Pawn, color.opposite());
    (board.piece_at(victim) == Some(opposing_pawn)).then_some(victim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board::create_initial_board;

    fn at(row: u8, col: u8) -> Position {
        Position::new(row, col).expect("test square should be on the board")
    }

    #[test]
    fn opening_pawns_have_single_and_double_push() {
        let board = create_initial_board();
        assert_eq!(
            pawn_moves(&board, at(6, 4), Color::White, None),
            vec![at(5, 4), at(4, 4)]
        );
        assert_eq!(
            pawn_moves(&board, at(1, 4), Color::Black, None),
            vec![at(2, 4), at(3, 4)]
        );
    }

    #[test]
    fn pawn_captures_enemies_but_not_friends() {
        let board = Board::from_diagram([
            "........", "........", "........", "........", "...p.N..", "....P...", "........",
            "........",
        ])
        .expect("diagram should parse");
        let moves = pawn_moves(&board, at(5, 4), Color::White, None);

        assert!(moves.contains(&at(4, 3)));
        assert!(!moves.contains(&at(4, 5)));
        assert!(moves.contains(&at(4, 4)));
    }

    #[test]
    fn en_passant_target_is_a_capture_square() {
        let board = Board::from_diagram([
            "........", "........", "........", "...pP...", "........", "........", "........",
            "........",
        ])
        .expect("diagram should parse");
        let ep = Some(at(2, 3));

        let moves = pawn_moves(&board, at(3, 4), Color::White, ep);
        assert!(moves.contains(&at(2, 3)));

        let without = pawn_moves(&board, at(3, 4), Color::White, None);
        assert!(!without.contains(&at(2, 3)));
    }

    #[test]
    fn own_side_en_passant_square_is_not_a_target() {
        // White just played e2-e4; a white pawn on d2 must not "capture" onto e3.
        let board = Board::from_diagram([
            "........", "........", "........", "........", "....P...", "........", "...P....",
            "........",
        ])
        .expect("diagram should parse");
        let moves = pawn_moves(&board, at(6, 3), Color::White, Some(at(5, 4)));
        assert!(!moves.contains(&at(5, 4)));
    }

    #[test]
    fn en_passant_needs_an_opposing_pawn_behind_the_target() {
        let knight_behind = Board::from_diagram([
            "....k...", "........", "........", "...nP...", "........", "........", "........",
            "....K...",
        ])
        .expect("diagram should parse");
        let ep = Some(at(2, 3));

        assert!(!pawn_moves(&knight_behind, at(3, 4), Color::White, ep).contains(&at(2, 3)));
        assert_eq!(en_passant_victim(&knight_behind, at(2, 3), Color::White), None);

        let pawn_behind = Board::from_diagram([
            "....k...", "........", "........", "...pP...", "........", "........", "........",
            "....K...",
        ])
        .expect("diagram should parse");
        assert_eq!(
            en_passant_victim(&pawn_behind, at(2, 3), Color::White),
            Some(at(3, 3))
        );
    }
}
