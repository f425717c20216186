//! Game rules: board, pieces, randomizer, scoring, and the state machine.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;

pub use board::Board;
pub use game_state::{GameState, Piece};
pub use pieces::{shape, spawn_shape, try_rotate, MinoOffset, PieceShape, SPAWN_POSITION};
pub use rng::{PieceBag, SimpleRng};
pub use scoring::{
    drop_score, gravity_interval_ms, level_for_lines, line_clear_score, soft_drop_interval_ms,
};
