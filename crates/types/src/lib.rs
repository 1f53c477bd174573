//! Shared types module - plain data used by every layer
//!
//! These types have no dependencies, so they can be used from the pure game
//! core, the input mapper, and the terminal renderer alike.
//!
//! # Grid Conventions
//!
//! The playfield is a `rows x cols` grid of cells addressed as `(row, col)`,
//! with `(0, 0)` in the top-left corner. The grid is toroidal: walking off one
//! edge reenters from the opposite edge, so there is no wall-collision case.
//!
//! # Timing
//!
//! The game advances on a fixed clock:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Interval between tick actions |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, GameAction, GRID_ROWS, GRID_COLS};
//!
//! // A turn request and a clock tick are the only two action kinds.
//! let turn = GameAction::Turn(Direction::Up);
//! let tick = GameAction::Tick;
//! assert_ne!(turn, tick);
//!
//! // Reversal pairs.
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//!
//! // Default grid dimensions.
//! assert_eq!(GRID_ROWS, 25);
//! assert_eq!(GRID_COLS, 25);
//! ```

/// Default grid height in cells (25 rows)
pub const GRID_ROWS: u16 = 25;

/// Default grid width in cells (25 columns)
pub const GRID_COLS: u16 = 25;

/// Interval between game ticks in milliseconds
pub const TICK_MS: u64 = 100;

/// A single grid cell as `(row, col)`
pub type Cell = (u16, u16);

/// The four snake headings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The direct reverse of this heading.
    ///
    /// A turn into the opposite heading is never accepted, since it would walk
    /// the head straight into the first body segment.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// A game action delivered to the reducer
///
/// Collaborators serialize all input into a single stream of these: the input
/// layer produces `Turn` on key presses, the clock produces `Tick` every
/// [`TICK_MS`] milliseconds. The reducer is the only consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Player requested a new heading.
    Turn(Direction),
    /// The periodic clock fired; advance the snake one cell.
    Tick,
}
