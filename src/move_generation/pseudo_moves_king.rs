//! King moves: single steps plus castling.
//!
//! Castling is offered when the right is still held, the king and rook stand
//! on their home squares, every square between them is empty, and none of the
//! king's current, transit or destination squares is attacked.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{CastlingLane, CASTLING_LANES, KING_HOME_COL};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::king_moves::king_step_targets;

pub fn king_moves(
    board: &Board,
    from: Position,
    color: Color,
    castling_rights: CastlingRights,
) -> Vec<Position> {
    let mut targets = king_step_targets(board, from, color);
    targets.extend(castling_targets(board, from, color, castling_rights));
    targets
}

pub fn castling_targets(
    board: &Board,
    from: Position,
    color: Color,
    castling_rights: CastlingRights,
) -> Vec<Position> {
    let home_row = color.home_row();
    if from.row() != home_row || from.col() != KING_HOME_COL {
        return Vec::new();
    }

    let enemy = color.opposite();
    // Cannot castle out of check.
    if is_square_attacked(board, from, enemy) {
        return Vec::new();
    }

    CASTLING_LANES
        .iter()
        .filter(|lane| castling_rights.allows(color, lane.side))
        .filter(|lane| lane_is_open(board, home_row, color, lane))
        .filter(|lane| king_path_is_safe(board, home_row, enemy, lane))
        .filter_map(|lane| Position::new(home_row, lane.king_to_col))
        .collect()
}

fn lane_is_open(board: &Board, home_row: u8, color: Color, lane: &CastlingLane) -> bool {
    let rook_home = Position::new(home_row, lane.rook_from_col)
        .and_then(|square| board.piece_at(square));
    if rook_home != Some(Piece::new(PieceKind::Rook, color)) {
        return false;
    }

    lane.between_cols.iter().all(|&col| {
        Position::new(home_row, col).is_some_and(|square| board.is_empty_at(square))
    })
}

/// Squares the king crosses and lands on, excluding its origin.
fn king_path_is_safe(board: &Board, home_row: u8, enemy: Color, lane: &CastlingLane) -> bool {
    let (low, high) = if lane.king_to_col > KING_HOME_COL {
        (KING_HOME_COL + 1, lane.king_to_col)
    } else {
        (lane.king_to_col, KING_HOME_COL - 1)
    };

    (low..=high).all(|col| {
        Position::new(home_row, col).is_some_and(|square| !is_square_attacked(board, square, enemy))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: u8, col: u8) -> Position {
        Position::new(row, col).expect("test square should be on the board")
    }

    fn board(rows: [&str; 8]) -> Board {
        Board::from_diagram(rows).expect("diagram should parse")
    }

    #[test]
    fn both_sides_available_on_an_open_back_rank() {
        let b = board([
            "r...k..r", "........", "........", "........", "........", "........", "........",
            "R...K..R",
        ]);
        let white = castling_targets(&b, at(7, 4), Color::White, CastlingRights::ALL);
        assert_eq!(white, vec![at(7, 6), at(7, 2)]);

        let black = castling_targets(&b, at(0, 4), Color::Black, CastlingRights::ALL);
        assert_eq!(black, vec![at(0, 6), at(0, 2)]);
    }

    #[test]
    fn revoked_right_or_missing_rook_blocks_castling() {
        let b = board([
            "....k...", "........", "........", "........", "........", "........", "........",
            "R...K...",
        ]);
        let mut rights = CastlingRights::ALL;
        assert_eq!(
            castling_targets(&b, at(7, 4), Color::White, rights),
            vec![at(7, 2)]
        );

        rights.revoke(Color::White, CastleSide::QueenSide);
        assert!(castling_targets(&b, at(7, 4), Color::White, rights).is_empty());
    }

    #[test]
    fn piece_between_king_and_rook_blocks_castling() {
        let b = board([
            "....k...", "........", "........", "........", "........", "........", "........",
            "RN..K.NR",
        ]);
        assert!(castling_targets(&b, at(7, 4), Color::White, CastlingRights::ALL).is_empty());
    }

    #[test]
    fn cannot_castle_out_of_check() {
        let b = board([
            "....r..k", "........", "........", "........", "........", "........", "........",
            "R...K..R",
        ]);
        assert!(castling_targets(&b, at(7, 4), Color::White, CastlingRights::ALL).is_empty());
    }

    #[test]
    fn cannot_castle_through_or_into_an_attacked_square() {
        // Black rook on f8 covers f1; black rook on c8 covers c1.
        let b = board([
            "..r..r.k", "........", "........", "........", "........", "........", "........",
            "R...K..R",
        ]);
        assert!(castling_targets(&b, at(7, 4), Color::White, CastlingRights::ALL).is_empty());
    }

    #[test]
    fn attacked_b_file_does_not_stop_queen_side_castling() {
        let b = board([
            ".r.....k", "........", "........", "........", "........", "........", "........",
            "R...K...",
        ]);
        assert_eq!(
            castling_targets(&b, at(7, 4), Color::White, CastlingRights::ALL),
            vec![at(7, 2)]
        );
    }
}
