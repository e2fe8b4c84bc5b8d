//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, TileSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

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

const BOARD_BG: Rgb = Rgb::new(187, 173, 160);
const EMPTY_BG: Rgb = Rgb::new(205, 193, 180);
const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

/// Largest accepted cell block; wider or taller values are clamped.
pub const MAX_CELL_WIDTH: u16 = 32;
pub const MAX_CELL_HEIGHT: u16 = 16;

/// Renders the board as a grid of `cell_w` x `cell_h` character blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    cell_w: u16,
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 keeps four-digit values readable with a cell of padding.
        Self {
            cell_w: 7,
            cell_h: 3,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_WIDTH),
            cell_h: cell_h.clamp(1, MAX_CELL_HEIGHT),
        }
    }

    /// Width and height of the bordered board in terminal cells.
    pub fn board_extent(&self, size: u8) -> (u16, u16) {
        let size = size as u16;
        (
            size.saturating_mul(self.cell_w).saturating_add(2),
            size.saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport first.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Cell::default());

        let (frame_w, frame_h) = self.board_extent(snap.size);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for (y, row) in snap.cells.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (px, py) = self.cell_origin(start_x, start_y, x as u16, y as u16);
                match cell {
                    Some(tile) => self.draw_tile(fb, px, py, tile),
                    None => {
                        let style = CellStyle::plain(BOARD_BG, EMPTY_BG).dim();
                        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
                        fb.put_char(px + self.cell_w / 2, py + self.cell_h / 2, '·', style);
                    }
                }
            }
        }

        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        self.draw_side_panel(fb, snap, viewport, panel_x, start_y);

        if snap.won {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "YOU WIN!");
        } else if snap.over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn cell_origin(&self, start_x: u16, start_y: u16, x: u16, y: u16) -> (u16, u16) {
        (
            start_x.saturating_add(1).saturating_add(x.saturating_mul(self.cell_w)),
            start_y.saturating_add(1).saturating_add(y.saturating_mul(self.cell_h)),
        )
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, px: u16, py: u16, tile: &TileSnapshot) {
        let mut style = tile_style(tile.value);
        if tile.merged_from.is_some() {
            style = style.bold();
        } else if tile.is_new {
            style = style.dim();
        }
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_str_centered(px, py + self.cell_h / 2, self.cell_w, &tile.value.to_string(), style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        let right = x.saturating_add(w).saturating_sub(1);
        let bottom = y.saturating_add(h).saturating_sub(1);
        fb.put_char(x, y, '╭', style);
        fb.put_char(right, y, '╮', style);
        fb.put_char(x, bottom, '╰', style);
        fb.put_char(right, bottom, '╯', style);
        for cx in x + 1..right {
            fb.put_char(cx, y, '─', style);
            fb.put_char(cx, bottom, '─', style);
        }
        for cy in y + 1..bottom {
            fb.put_char(x, cy, '│', style);
            fb.put_char(right, cy, '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x.saturating_add(12) > viewport.width {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::default();
        let gain = CellStyle::plain(Rgb::new(120, 200, 120), Rgb::new(0, 0, 0));
        let help = CellStyle::default().dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.score, value);
        if snap.score_gained > 0 {
            let digits = snap.score.to_string().len() as u16;
            fb.put_str(panel_x + digits + 1, y, &format!("+{}", snap.score_gained), gain);
        }
        y += 2;

        for line in ["←↑→↓ hjkl  move", "space r    new game", "q esc      quit"] {
            fb.put_str(panel_x, y, line, help);
            y += 1;
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let style = CellStyle::plain(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let mid_y = start_y + frame_h / 2;
        fb.put_str_centered(start_x, mid_y, frame_w, text, style);
        fb.put_str_centered(start_x, mid_y + 1, frame_w, "space: new game", style);
    }
}

/// Background/foreground pair for a tile value.
fn tile_style(value: u32) -> CellStyle {
    let bg = match value {
        2 => Rgb::new(238, 228, 218),
        4 => Rgb::new(237, 224, 200),
        8 => Rgb::new(242, 177, 121),
        16 => Rgb::new(245, 149, 99),
        32 => Rgb::new(246, 124, 95),
        64 => Rgb::new(246, 94, 59),
        128 => Rgb::new(237, 207, 114),
        256 => Rgb::new(237, 204, 97),
        512 => Rgb::new(237, 200, 80),
        1024 => Rgb::new(237, 197, 63),
        2048 => Rgb::new(237, 194, 46),
        _ => Rgb::new(60, 58, 50),
    };
    let fg = if value <= 4 { DARK_TEXT } else { LIGHT_TEXT };
    CellStyle::plain(fg, bg)
}
