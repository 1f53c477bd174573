//! Game state module - the immutable snapshot the reducer folds over.
//!
//! A [`GameState`] is a value: the reducer never mutates one in place, it
//! returns a fresh state (or a terminal outcome) for every action. Rendering
//! collaborators only ever read through the accessors.

use tui_snake_types::{Cell, Direction};

use crate::reward::place_reward;
use crate::rng::RandomSource;

/// Complete game state
///
/// Invariants, upheld by construction and by the reducer:
///
/// - `snake` is non-empty, head first, with no duplicate cells
/// - every body cell lies within `[0, rows) x [0, cols)`
/// - `reward` is never on the snake
/// - `direction` is never flipped to its reverse within a single tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) rows: u16,
    pub(crate) cols: u16,
    /// Body cells, head first, tail last.
    pub(crate) snake: Vec<Cell>,
    pub(crate) reward: Cell,
    pub(crate) direction: Direction,
    /// True once a turn has been accepted in the current tick window.
    pub(crate) move_made: bool,
}

impl GameState {
    /// Create the starting state for a `rows x cols` grid.
    ///
    /// The snake starts as three horizontal segments with the head at the
    /// grid center and the body extending left, heading right. One reward is
    /// placed on a free cell drawn from `rng`.
    ///
    /// The caller guarantees the grid fits the starting snake (`cols >= 4`,
    /// `rows >= 1`); this is not validated beyond debug assertions.
    pub fn new(rows: u16, cols: u16, rng: &mut impl RandomSource) -> Self {
        debug_assert!(rows >= 1);
        debug_assert!(cols >= 4, "starting snake needs three columns left of center");

        let center_row = rows / 2;
        let center_col = cols / 2;
        let snake = vec![
            (center_row, center_col),
            (center_row, center_col - 1),
            (center_row, center_col - 2),
        ];

        // A 3-segment snake never fills the grid, so placement cannot fail
        // under the documented precondition.
        let reward = place_reward(rows, cols, &snake, rng).unwrap_or((0, 0));

        Self {
            rows,
            cols,
            snake,
            reward,
            direction: Direction::Right,
            move_made: false,
        }
    }

    /// Build a state from explicit parts.
    ///
    /// Intended for tests, benchmarks, and tooling that needs to reconstruct
    /// a known position. The usual invariants are only debug-asserted.
    pub fn from_parts(
        rows: u16,
        cols: u16,
        snake: Vec<Cell>,
        reward: Cell,
        direction: Direction,
    ) -> Self {
        debug_assert!(!snake.is_empty());
        debug_assert!(snake.iter().all(|&(r, c)| r < rows && c < cols));
        debug_assert!(!snake.contains(&reward));

        Self {
            rows,
            cols,
            snake,
            reward,
            direction,
            move_made: false,
        }
    }

    /// Grid height in cells.
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Grid width in cells.
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Body cells, head first.
    pub fn snake(&self) -> &[Cell] {
        &self.snake
    }

    /// The head cell.
    pub fn head(&self) -> Cell {
        // Non-empty by invariant.
        self.snake[0]
    }

    /// The current reward cell.
    pub fn reward(&self) -> Cell {
        self.reward
    }

    /// The current heading (also drives head-orientation drawing).
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether a turn has already been accepted this tick.
    pub fn move_made(&self) -> bool {
        self.move_made
    }

    /// Current score: one point per body segment.
    pub fn score(&self) -> usize {
        self.snake.len()
    }
}
