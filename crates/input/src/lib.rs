//! Terminal input module.
//!
//! Maps `crossterm` key events into [`tui_snake_types::GameAction`] turn
//! requests. The mapping is stateless: the one-turn-per-tick rule is enforced
//! by the reducer, not here, so this layer just translates keys and leaves
//! sequencing to the game loop.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
