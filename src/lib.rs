//! TUI Snake (workspace facade crate).
//!
//! This package exposes the member crates under stable module names so the
//! binary and integration tests can use `tui_snake::{core,input,term,types}`.

pub use tui_snake_core as core;
pub use tui_snake_input as input;
pub use tui_snake_term as term;
pub use tui_snake_types as types;
