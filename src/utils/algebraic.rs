//! Square names and move strings.
//!
//! Converts between board coordinates and algebraic square names (`e4`),
//! and formats applied moves for history display. Columns map to files
//! `a..h`; row 0 is rank 8.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::MoveRecord;

/// Square name such as `e4`.
#[inline]
pub fn position_to_notation(position: Position) -> String {
    let file = char::from(b'a' + position.col());
    let rank = char::from(b'8' - position.row());
    format!("{file}{rank}")
}

/// Parse a square name such as `e4`.
pub fn notation_to_position(notation: &str) -> ChessResult<Position> {
    let bytes = notation.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidNotation(notation.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidNotation(notation.to_owned()));
    }

    Position::new(b'8' - rank, file - b'a')
        .ok_or_else(|| ChessError::InvalidNotation(notation.to_owned()))
}

/// Upper-case piece letter; pawns have none.
#[inline]
pub fn piece_to_notation(kind: PieceKind) -> &'static str {
    match kind {
        PieceKind::King => "K",
        PieceKind::Queen => "Q",
        PieceKind::Rook => "R",
        PieceKind::Bishop => "B",
        PieceKind::Knight => "N",
        PieceKind::Pawn => "",
    }
}

/// Long-form move string: `Ng1-f3`, `e4xd5`, `e7-e8=Q`, `O-O`, with `+` for
/// check and `#` for mate.
pub fn move_record_to_notation(record: &MoveRecord) -> String {
    let mut out = match record.castle {
        Some(CastleSide::KingSide) => "O-O".to_owned(),
        Some(CastleSide::QueenSide) => "O-O-O".to_owned(),
        None => {
            let separator = if record.is_capture() { 'x' } else { '-' };
            let mut text = format!(
                "{}{}{}{}",
                piece_to_notation(record.piece.kind),
                position_to_notation(record.from),
                separator,
                position_to_notation(record.to)
            );
            if let Some(kind) = record.promotion {
                text.push('=');
                text.push_str(piece_to_notation(kind));
            }
            text
        }
    };

    if record.checkmate {
        out.push('#');
    } else if record.gives_check {
        out.push('+');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: u8, col: u8) -> Position {
        Position::new(row, col).expect("test square should be on the board")
    }

    fn record(kind: PieceKind, from: &str, to: &str) -> MoveRecord {
        MoveRecord {
            piece: Piece::new(kind, Color::White),
            from: notation_to_position(from).expect("from should parse"),
            to: notation_to_position(to).expect("to should parse"),
            captured: None,
            promotion: None,
            castle: None,
            en_passant: false,
            gives_check: false,
            checkmate: false,
        }
    }

    #[test]
    fn corner_squares_map_to_expected_names() {
        assert_eq!(position_to_notation(at(0, 0)), "a8");
        assert_eq!(position_to_notation(at(7, 0)), "a1");
        assert_eq!(position_to_notation(at(7, 7)), "h1");
        assert_eq!(position_to_notation(at(4, 4)), "e4");
        assert_eq!(notation_to_position("e4"), Ok(at(4, 4)));
    }

    #[test]
    fn every_square_round_trips() {
        for position in Position::all() {
            let name = position_to_notation(position);
            assert_eq!(notation_to_position(&name), Ok(position), "square {name}");
        }
    }

    #[test]
    fn malformed_names_are_rejected() {
        for bad in ["", "e", "e9", "i4", "E4", "e44", "4e"] {
            assert_eq!(
                notation_to_position(bad),
                Err(ChessError::InvalidNotation(bad.to_owned()))
            );
        }
    }

    #[test]
    fn piece_letters() {
        assert_eq!(piece_to_notation(PieceKind::King), "K");
        assert_eq!(piece_to_notation(PieceKind::Knight), "N");
        assert_eq!(piece_to_notation(PieceKind::Pawn), "");
    }

    #[test]
    fn move_strings_cover_each_move_shape() {
        assert_eq!(
            move_record_to_notation(&record(PieceKind::Knight, "g1", "f3")),
            "Ng1-f3"
        );

        let mut capture = record(PieceKind::Pawn, "e4", "d5");
        capture.captured = Some(Piece::new(PieceKind::Pawn, Color::Black));
        assert_eq!(move_record_to_notation(&capture), "e4xd5");

        let mut promotion = record(PieceKind::Pawn, "e7", "e8");
        promotion.promotion = Some(PieceKind::Queen);
        promotion.gives_check = true;
        assert_eq!(move_record_to_notation(&promotion), "e7-e8=Q+");

        let mut castle = record(PieceKind::King, "e1", "c1");
        castle.castle = Some(CastleSide::QueenSide);
        assert_eq!(move_record_to_notation(&castle), "O-O-O");

        let mut mate = record(PieceKind::Queen, "d8", "h4");
        mate.gives_check = true;
        mate.checkmate = true;
        assert_eq!(move_record_to_notation(&mate), "Qd8-h4#");
    }
}
