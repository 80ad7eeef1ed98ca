//! Runtime rule options.

use crate::game_state::chess_types::PieceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulesConfig {
    /// Piece a pawn becomes when it reaches its far rank and the caller did
    /// not name one.
    pub default_promotion: PieceKind,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            default_promotion: PieceKind::Queen,
        }
    }
}

impl RulesConfig {
    #[must_use]
    pub fn with_default_promotion(mut self, kind: PieceKind) -> Self {
        self.default_promotion = kind;
        self
    }
}
