//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the whole Snake rule set as data plus pure functions.
//! It has **zero dependencies** on UI, timers, or I/O, making it:
//!
//! - **Deterministic**: the only randomness is an injected [`RandomSource`],
//!   so the same seed replays the same game
//! - **Testable**: every rule is reachable without a terminal
//! - **Portable**: runs headless, in a terminal frontend, or in a benchmark
//!
//! # Module Structure
//!
//! - [`state`]: the [`GameState`] snapshot (grid, body, reward, heading)
//! - [`reducer`]: the single transition function `(state, action) -> Step`
//! - [`reward`]: uniform reward placement over the free cells
//! - [`rng`]: the [`RandomSource`] capability and a small LCG implementation
//!
//! # Game Rules
//!
//! - The snake advances one cell per tick in its current heading
//! - The grid is toroidal; edges wrap, there are no walls
//! - At most one heading change is accepted per tick, and a turn into the
//!   direct reverse heading is always rejected
//! - Eating the reward grows the snake by one and relocates the reward to a
//!   uniformly chosen free cell
//! - Moving onto any body cell ends the game; the score is the snake length
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{reduce, GameState, SimpleRng, Step};
//! use tui_snake_types::{Direction, GameAction};
//!
//! let mut rng = SimpleRng::new(12345);
//! let state = GameState::new(25, 25, &mut rng);
//!
//! // Turn, then advance one tick.
//! let state = match reduce(&state, GameAction::Turn(Direction::Up), &mut rng) {
//!     Step::Continue(next) => next,
//!     Step::Over { .. } => unreachable!("a turn cannot end the game"),
//! };
//! match reduce(&state, GameAction::Tick, &mut rng) {
//!     Step::Continue(next) => assert_eq!(next.head(), (11, 12)),
//!     Step::Over { .. } => unreachable!("open field"),
//! }
//! ```

pub mod reducer;
pub mod reward;
pub mod rng;
pub mod state;

pub use tui_snake_types as types;

// Re-export commonly used items for convenience
pub use reducer::{reduce, Step};
pub use reward::place_reward;
pub use rng::{RandomSource, SimpleRng};
pub use state::GameState;
