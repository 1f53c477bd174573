//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The palette follows the original look: a light blue field, green body
//! segments, a yellow head with a black half-cell marker showing the heading,
//! and a red reward.

use crate::core::GameState;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, Direction};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const FIELD: CellStyle = CellStyle::colors(Rgb::new(90, 90, 120), Rgb::new(200, 200, 255));
const BODY: CellStyle = CellStyle::colors(Rgb::new(0, 0, 0), Rgb::new(0, 255, 0));
const HEAD: CellStyle = CellStyle::colors(Rgb::new(0, 0, 0), Rgb::new(255, 255, 0));
const REWARD: CellStyle = CellStyle::colors(Rgb::new(0, 0, 0), Rgb::new(255, 0, 0));
const BORDER: CellStyle = CellStyle::colors(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const TEXT: CellStyle = CellStyle::colors(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0));

/// A lightweight terminal view for the snake game.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell compensates for typical glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w }
    }

    /// Render the current game state into a framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let (start_x, start_y) = self.frame_origin(state, viewport);
        let field_w = state.cols() * self.cell_w;
        let field_h = state.rows();

        // Score line above the frame.
        let score_line = format!("tui-snake  score: {}", state.score());
        fb.put_str(start_x, start_y, &score_line, TEXT.bold());

        // Border and field background.
        self.draw_border(&mut fb, start_x, start_y + 1, field_w + 2, field_h + 2);
        fb.fill_rect(start_x + 1, start_y + 2, field_w, field_h, ' ', FIELD);

        // Body segments, tail to head so the head marker wins overlaps.
        for &segment in state.snake().iter().skip(1).rev() {
            self.fill_cell(&mut fb, start_x, start_y, segment, ' ', BODY);
        }

        // Reward.
        self.fill_cell(&mut fb, start_x, start_y, state.reward(), ' ', REWARD);

        // Head with heading marker.
        self.draw_head(&mut fb, start_x, start_y, state);

        fb
    }

    /// Render the terminal outcome: the final field plus a score banner.
    pub fn render_game_over(
        &self,
        state: &GameState,
        score: usize,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = self.render(state, viewport);

        let lines = [
            "  GAME OVER  ".to_string(),
            format!(" score: {:<4} ", score),
            "  q to quit  ".to_string(),
        ];
        let box_w = lines[0].chars().count() as u16;
        let box_h = lines.len() as u16;
        let x = viewport.width.saturating_sub(box_w) / 2;
        let y = viewport.height.saturating_sub(box_h) / 2;

        for (i, line) in lines.iter().enumerate() {
            fb.put_str(x, y + i as u16, line, TEXT.bold());
        }
        fb
    }

    /// Top-left of the frame (score line included) centered in the viewport.
    fn frame_origin(&self, state: &GameState, viewport: Viewport) -> (u16, u16) {
        let frame_w = state.cols() * self.cell_w + 2;
        let frame_h = state.rows() + 3;
        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = viewport.height.saturating_sub(frame_h) / 2;
        (x, y)
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(x + w - 1, y, '┐', BORDER);
        fb.put_char(x, y + h - 1, '└', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', BORDER);
            fb.put_char(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', BORDER);
            fb.put_char(x + w - 1, y + dy, '│', BORDER);
        }
    }

    /// Terminal position of a grid cell's leftmost column.
    fn cell_pos(&self, start_x: u16, start_y: u16, cell: Cell) -> (u16, u16) {
        let (row, col) = cell;
        (start_x + 1 + col * self.cell_w, start_y + 2 + row)
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell: Cell,
        ch: char,
        style: CellStyle,
    ) {
        let (x, y) = self.cell_pos(start_x, start_y, cell);
        for dx in 0..self.cell_w {
            fb.put_char(x + dx, y, ch, style);
        }
    }

    /// Paint the head and overlay a black half-cell marker on the side the
    /// snake is moving toward.
    fn draw_head(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, state: &GameState) {
        self.fill_cell(fb, start_x, start_y, state.head(), ' ', HEAD);
        let (x, y) = self.cell_pos(start_x, start_y, state.head());

        match state.direction() {
            Direction::Up => {
                for dx in 0..self.cell_w {
                    fb.put_char(x + dx, y, '▀', HEAD);
                }
            }
            Direction::Down => {
                for dx in 0..self.cell_w {
                    fb.put_char(x + dx, y, '▄', HEAD);
                }
            }
            Direction::Left => {
                fb.put_char(x, y, '▌', HEAD);
            }
            Direction::Right => {
                fb.put_char(x + self.cell_w - 1, y, '▐', HEAD);
            }
        }
    }
}
