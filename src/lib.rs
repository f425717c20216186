//! Blockfall: a terminal falling-block game.
//!
//! The crate splits into a deterministic rule engine (`core`), keyboard
//! handling with DAS/ARR repeat (`input`), and a framebuffer-based
//! terminal renderer (`term`). `core` has no I/O and drives everything
//! through [`core::GameState::tick`] and [`core::GameState::apply`].

pub mod core;
pub mod input;
pub mod score_file;
pub mod term;
pub mod types;
