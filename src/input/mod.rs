//! Keyboard handling: key mapping plus DAS/ARR auto-repeat.

pub mod handler;
pub mod map;

pub use handler::InputHandler;
pub use map::{action_for_key, should_quit};
