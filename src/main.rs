//! Terminal snake runner.
//!
//! Owns the clock and the key-event loop, serializes both into a single
//! action stream, and folds that stream through the pure reducer. Rendering
//! reads the resulting state; nothing here mutates game semantics directly.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::core::{reduce, GameState, SimpleRng, Step};
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::term::{GameView, TerminalRenderer, Viewport};
use tui_snake::types::{GameAction, GRID_COLS, GRID_ROWS, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut rng = SimpleRng::new(clock_seed());
    let mut state = GameState::new(GRID_ROWS, GRID_COLS, &mut rng);
    let mut final_score: Option<usize> = None;

    let view = GameView::default();
    let tick_duration = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = match final_score {
            Some(score) => view.render_game_over(&state, score, Viewport::new(w, h)),
            None => view.render(&state, Viewport::new(w, h)),
        };
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if final_score.is_none() {
                        if let Some(action) = handle_key_event(key) {
                            apply(&mut state, action, &mut rng, &mut final_score);
                        }
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick. No further ticks once the game is over; the final state stays
        // on screen until the player quits.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if final_score.is_none() {
                apply(&mut state, GameAction::Tick, &mut rng, &mut final_score);
            }
        }
    }
}

/// Fold one action through the reducer, capturing a terminal outcome.
fn apply(
    state: &mut GameState,
    action: GameAction,
    rng: &mut SimpleRng,
    final_score: &mut Option<usize>,
) {
    match reduce(state, action, rng) {
        Step::Continue(next) => *state = next,
        Step::Over { score } => *final_score = Some(score),
    }
}

/// Seed the reward generator from the wall clock, as the original did.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() as u32) ^ d.subsec_nanos())
        .unwrap_or(1)
}
