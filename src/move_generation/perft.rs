//! Perft: exhaustive legal-move enumeration to a fixed depth.
//!
//! Every move is played through the same transition the public applier uses,
//! so the node counts exercise generation, the legality filter, and the
//! board update together. Promotions are expanded to all four choices.

use std::thread;

use crate::errors::ChessResult;
use crate::game_state::chess_rules::PROMOTION_CHOICES;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::{GameState, MoveRecord};
use crate::game_state::rules_config::RulesConfig;
use crate::move_generation::legal_move_apply::{is_promotion, transition, AppliedMove};
use crate::move_generation::legal_move_generator::all_legal_moves;

/// Leaf statistics of a perft run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }

    fn tally(&mut self, record: &MoveRecord) {
        self.nodes += 1;
        if record.is_capture() {
            self.captures += 1;
        }
        if record.en_passant {
            self.en_passant += 1;
        }
        if record.castle.is_some() {
            self.castles += 1;
        }
        if record.promotion.is_some() {
            self.promotions += 1;
        }
        if record.gives_check {
            self.checks += 1;
        }
        if record.checkmate {
            self.checkmates += 1;
        }
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for applied in child_moves(game_state)? {
        if depth == 1 {
            total.tally(&applied.record);
        } else {
            total.merge(perft(&applied.state, depth - 1)?);
        }
    }
    Ok(total)
}

/// Same counts as [`perft`], with one scoped worker thread per root move.
pub fn perft_multi_threaded(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    if depth <= 1 {
        return perft(game_state, depth);
    }

    let root_moves = child_moves(game_state)?;
    thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .iter()
            .map(|applied| scope.spawn(move || perft(&applied.state, depth - 1)))
            .collect();

        let mut total = PerftCounts::default();
        for handle in handles {
            let counts = handle
                .join()
                .unwrap_or_else(|panic| std::panic::resume_unwind(panic))?;
            total.merge(counts);
        }
        Ok(total)
    })
}

/// Number of leaf nodes below each root move, keyed by the move's notation
/// squares (for example `e2e4`, `a7a8q`). Sorted for stable output.
pub fn perft_divide(game_state: &GameState, depth: u8) -> ChessResult<Vec<(String, usize)>> {
    let mut lines = Vec::new();
    for applied in child_moves(game_state)? {
        let record = applied.record;
        let mut label = format!("{}{}", record.from, record.to);
        if let Some(kind) = record.promotion {
            label.push(promotion_letter(kind));
        }
        let nodes = perft(&applied.state, depth.saturating_sub(1))?.nodes;
        lines.push((label, nodes));
    }
    lines.sort();
    Ok(lines)
}

fn child_moves(game_state: &GameState) -> ChessResult<Vec<AppliedMove>> {
    let config = RulesConfig::default();
    let mut children = Vec::new();

    for (from, to) in all_legal_moves(game_state) {
        let promotes = game_state
            .board()
            .piece_at(from)
            .is_some_and(|piece| is_promotion(piece, to));

        if promotes {
            for kind in PROMOTION_CHOICES {
                children.push(transition(game_state, from, to, Some(kind), &config)?);
            }
        } else {
            children.push(transition(game_state, from, to, None, &config)?);
        }
    }
    Ok(children)
}

fn promotion_letter(kind: PieceKind) -> char {
    match kind {
        PieceKind::Queen => 'q',
        PieceKind::Rook => 'r',
        PieceKind::Bishop => 'b',
        PieceKind::Knight => 'n',
        PieceKind::Pawn => 'p',
        PieceKind::King => 'k',
    }
}
