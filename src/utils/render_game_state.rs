//! Terminal-oriented Unicode board renderer.
//!
//! Draws the board from White's side with file and rank labels, for
//! debugging, tests and diagnostics in text environments.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

/// Render the board to a Unicode string for terminal output.
///
/// Row 0 (rank 8) is printed first.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');

        for col in 0..8u8 {
            let piece = Position::new(row, col).and_then(|pos| board.piece_at(pos));
            match piece {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

/// Board plus a status line naming the side to move.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = render_board(game_state.board());
    out.push('\n');
    out.push_str(&format!("{} to move", game_state.current_player()));
    if game_state.in_check() {
        out.push_str(", in check");
    }
    if game_state.is_over() {
        out.push_str(&format!(" ({})", game_state.status()));
    }
    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_board_renders_black_on_top() {
        let text = render_board(&Board::initial());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[4], "5 · · · · · · · · 5");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
    }

    #[test]
    fn display_uses_the_renderer() {
        let board = Board::initial();
        assert_eq!(board.to_string(), render_board(&board));
    }

    #[test]
    fn status_line_names_the_side_to_move() {
        let text = render_game_state(&GameState::new());
        assert!(text.ends_with("white to move"));
    }
}
