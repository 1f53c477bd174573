//! The reducer - the single transition function of the game.
//!
//! Every game rule lives in [`reduce`]. Collaborators fold a serialized
//! stream of actions through it, one call at a time; nothing else mutates
//! game semantics.

use tui_snake_types::{Cell, Direction, GameAction};

use crate::reward::place_reward;
use crate::rng::RandomSource;
use crate::state::GameState;

/// Outcome of one reducer step.
///
/// Game over is a normal terminal outcome, not an error, so it is encoded in
/// the result type rather than inferred by inspecting a returned state. Once
/// `Over` has been produced there is no state to feed back in, which keeps
/// post-terminal actions unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The game goes on with this state.
    Continue(GameState),
    /// The snake ran into itself; `score` is its final length.
    Over { score: usize },
}

impl Step {
    /// True for the terminal outcome.
    pub fn is_over(&self) -> bool {
        matches!(self, Step::Over { .. })
    }

    /// The continuing state, if any.
    pub fn into_state(self) -> Option<GameState> {
        match self {
            Step::Continue(state) => Some(state),
            Step::Over { .. } => None,
        }
    }
}

/// Compute the next state for `action`.
///
/// Pure apart from draws taken from `rng` when a reward is eaten; the input
/// state is never modified.
pub fn reduce(state: &GameState, action: GameAction, rng: &mut impl RandomSource) -> Step {
    match action {
        GameAction::Turn(dir) => Step::Continue(turn(state, dir)),
        GameAction::Tick => advance(state, rng),
    }
}

/// Handle a heading change request.
///
/// At most one turn is accepted per tick window, so buffered key repeats
/// cannot reverse the snake through itself in a single frame. A turn into
/// the direct reverse heading is rejected outright.
fn turn(state: &GameState, dir: Direction) -> GameState {
    if state.move_made || dir == state.direction.opposite() {
        return state.clone();
    }
    let mut next = state.clone();
    next.direction = dir;
    next.move_made = true;
    next
}

/// Advance the snake one cell in its current heading.
fn advance(state: &GameState, rng: &mut impl RandomSource) -> Step {
    let head = step_toroidal(state.head(), state.direction, state.rows, state.cols);

    // The candidate head is checked against the whole body, tail included:
    // the tail cell only frees up on non-growing moves, and the original
    // rules count moving onto it as a collision either way.
    if state.snake.contains(&head) {
        return Step::Over {
            score: state.snake.len(),
        };
    }

    let mut next = state.clone();
    next.snake.insert(0, head);

    if head == next.reward {
        // Grew by one; tail stays. Board-full placement keeps the old reward.
        if let Some(cell) = place_reward(next.rows, next.cols, &next.snake, rng) {
            next.reward = cell;
        }
    } else {
        next.snake.pop();
    }

    next.move_made = false;
    Step::Continue(next)
}

/// One step from `cell` in `dir`, wrapping at the grid edges.
///
/// The decrementing arms avoid `r + rows` style intermediates, which would
/// overflow `u16` on grids taller or wider than half the coordinate range.
fn step_toroidal(cell: Cell, dir: Direction, rows: u16, cols: u16) -> Cell {
    let (r, c) = cell;
    match dir {
        Direction::Up => (if r == 0 { rows - 1 } else { r - 1 }, c),
        Direction::Down => ((r + 1) % rows, c),
        Direction::Left => (r, if c == 0 { cols - 1 } else { c - 1 }),
        Direction::Right => (r, (c + 1) % cols),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;

    fn open_field() -> GameState {
        let mut rng = SimpleRng::new(12345);
        GameState::new(25, 25, &mut rng)
    }

    fn apply(state: &GameState, action: GameAction) -> GameState {
        let mut rng = SimpleRng::new(777);
        match reduce(state, action, &mut rng) {
            Step::Continue(next) => next,
            Step::Over { score } => panic!("unexpected game over at score {}", score),
        }
    }

    #[test]
    fn test_turn_accepted() {
        let state = open_field();
        let next = apply(&state, GameAction::Turn(Direction::Up));
        assert_eq!(next.direction(), Direction::Up);
        assert!(next.move_made());
        // Input state untouched.
        assert_eq!(state.direction(), Direction::Right);
        assert!(!state.move_made());
    }

    #[test]
    fn test_turn_reversal_rejected() {
        let state = open_field();
        let next = apply(&state, GameAction::Turn(Direction::Left));
        assert_eq!(next.direction(), Direction::Right);
        assert!(!next.move_made());
    }

    #[test]
    fn test_one_turn_per_tick() {
        let state = open_field();
        let after_first = apply(&state, GameAction::Turn(Direction::Up));
        let after_second = apply(&after_first, GameAction::Turn(Direction::Left));
        // Second turn ignored until the next tick clears the latch.
        assert_eq!(after_second.direction(), Direction::Up);

        let ticked = apply(&after_second, GameAction::Tick);
        assert!(!ticked.move_made());
        let turned = apply(&ticked, GameAction::Turn(Direction::Left));
        assert_eq!(turned.direction(), Direction::Left);
    }

    #[test]
    fn test_tick_moves_head_and_drops_tail() {
        let state = open_field();
        let len = state.score();
        let next = apply(&state, GameAction::Tick);

        assert_eq!(next.head(), (12, 13));
        assert_eq!(next.score(), len);
        assert_eq!(next.snake(), &[(12, 13), (12, 12), (12, 11)]);
    }

    #[test]
    fn test_tick_wraps_at_edges() {
        let state = GameState::from_parts(
            5,
            5,
            vec![(0, 2), (1, 2), (2, 2)],
            (4, 4),
            Direction::Up,
        );
        let next = apply(&state, GameAction::Tick);
        assert_eq!(next.head(), (4, 2));

        let state = GameState::from_parts(3, 3, vec![(1, 0)], (2, 2), Direction::Left);
        let next = apply(&state, GameAction::Tick);
        assert_eq!(next.head(), (1, 2));
    }

    #[test]
    fn test_tick_wraps_on_huge_grids() {
        // Dimensions past half the u16 range; naive `r + rows - 1` math
        // would overflow here.
        let rows = 40_000;
        let cols = 40_000;
        let state = GameState::from_parts(rows, cols, vec![(0, 5)], (1, 1), Direction::Up);
        let next = apply(&state, GameAction::Tick);
        assert_eq!(next.head(), (rows - 1, 5));

        let state = GameState::from_parts(rows, cols, vec![(5, 0)], (1, 1), Direction::Left);
        let next = apply(&state, GameAction::Tick);
        assert_eq!(next.head(), (5, cols - 1));
    }

    #[test]
    fn test_tick_onto_reward_grows() {
        let state = GameState::from_parts(
            7,
            7,
            vec![(3, 3), (3, 2), (3, 1)],
            (3, 4),
            Direction::Right,
        );
        let next = apply(&state, GameAction::Tick);

        assert_eq!(next.score(), 4);
        assert_eq!(next.snake(), &[(3, 4), (3, 3), (3, 2), (3, 1)]);
        assert_ne!(next.reward(), (3, 4));
        assert!(!next.snake().contains(&next.reward()));
    }

    #[test]
    fn test_tick_self_collision_is_terminal() {
        // Head at (1,2) heading down walks into the tail cell (2,2).
        let state = GameState::from_parts(
            5,
            5,
            vec![(1, 2), (1, 1), (2, 1), (2, 2)],
            (4, 4),
            Direction::Down,
        );
        let mut rng = SimpleRng::new(1);
        let step = reduce(&state, GameAction::Tick, &mut rng);
        assert_eq!(step, Step::Over { score: 4 });
        assert!(step.is_over());
        assert_eq!(step.into_state(), None);
    }

    #[test]
    fn test_tick_clears_turn_latch() {
        let state = open_field();
        let turned = apply(&state, GameAction::Turn(Direction::Down));
        assert!(turned.move_made());
        let ticked = apply(&turned, GameAction::Tick);
        assert!(!ticked.move_made());
        assert_eq!(ticked.head(), (13, 12));
    }

    #[test]
    fn test_reduce_never_breaks_invariants() {
        // Drive a seeded game with a fixed turn pattern and check the state
        // invariants after every step.
        let mut rng = SimpleRng::new(2024);
        let mut state = GameState::new(15, 15, &mut rng);
        let turns = [
            Direction::Up,
            Direction::Left,
            Direction::Down,
            Direction::Right,
        ];

        for i in 0..600 {
            let action = if i % 3 == 0 {
                GameAction::Turn(turns[(i / 3) % turns.len()])
            } else {
                GameAction::Tick
            };
            match reduce(&state, action, &mut rng) {
                Step::Continue(next) => state = next,
                Step::Over { score } => {
                    assert_eq!(score, state.score());
                    return;
                }
            }

            let body = state.snake();
            assert!(!body.contains(&state.reward()));
            for (i, cell) in body.iter().enumerate() {
                assert!(!body[i + 1..].contains(cell), "duplicate cell {:?}", cell);
                assert!(cell.0 < state.rows() && cell.1 < state.cols());
            }
        }
    }
}
