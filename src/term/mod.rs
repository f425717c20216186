//! Terminal rendering.
//!
//! The view layer renders into an in-memory framebuffer that is then
//! diffed and flushed to the terminal. Keeping the framebuffer pure keeps
//! the whole view testable without a tty.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
