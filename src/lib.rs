//! Crate root module declarations for the chess rules engine.
//!
//! This file exposes the subsystems (game state, raw piece movement, legal
//! move generation, and notation/history utilities) so binaries, tests, and
//! external tooling can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod rules_config;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
    pub mod pseudo_move_generator;
    pub mod pseudo_moves_king;
    pub mod pseudo_moves_pawn;
    pub mod terminal_state;
}

pub mod utils {
    pub mod algebraic;
    pub mod game_history;
    pub mod render_game_state;
}
