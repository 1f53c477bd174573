//! Terminal rendering module.
//!
//! A small game-oriented rendering layer: the view maps a `core::GameState`
//! into a framebuffer of styled character cells, and the renderer flushes
//! framebuffers to a real terminal with row diffing.
//!
//! Goals:
//! - Keep `core` free of any terminal concern
//! - Make the state-to-pixels mapping pure and unit-testable
//! - Render each grid cell as two terminal columns to compensate for glyph
//!   aspect ratio

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{CellStyle, FrameBuffer, Rgb, StyledCell};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
