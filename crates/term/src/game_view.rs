//! GameView: maps a [`TileScene`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::engine::Placement;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::scene::TileScene;
use crate::types::{Position, BOARD_SIZE, CELL_PITCH};

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

/// Non-board information shown next to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HudView {
    pub moves: u32,
    pub best: u32,
    pub game_over: bool,
}

const BOARD_BG: Rgb = Rgb::new(40, 36, 32);

/// A lightweight terminal renderer for the 4x4 board.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    /// Columns between neighbouring tiles.
    gap_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 6x3 keeps tiles roughly square with typical glyph aspect ratio.
        Self {
            tile_w: 6,
            tile_h: 3,
            gap_w: 1,
        }
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16, gap_w: u16) -> Self {
        Self {
            tile_w: tile_w.max(1),
            tile_h: tile_h.max(1),
            gap_w,
        }
    }

    fn pitch_w(&self) -> u16 {
        self.tile_w + self.gap_w
    }

    /// Board frame size including the border.
    pub fn frame_size(&self) -> (u16, u16) {
        let n = BOARD_SIZE as u16;
        (n * self.pitch_w() - self.gap_w + 2, n * self.tile_h + 2)
    }

    /// Render the scene into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        scene: &TileScene,
        hud: &HudView,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle::new(Rgb::new(90, 84, 76), BOARD_BG);
        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', bg);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        // Cell objects at their final positions.
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let (px, py) = self.cell_origin(start_x, start_y, x, y);
                match scene.cell(Position::new(x, y)) {
                    Some(tile) => {
                        let mut style = tile_style(tile.value);
                        style.bold = tile.settled;
                        style.dim = !tile.settled;
                        self.draw_tile(fb, (px, py, self.tile_w, self.tile_h), tile.value, style);
                    }
                    None => {
                        let dot = CellStyle { dim: true, ..bg };
                        fb.put_char(px + self.tile_w / 2, py + self.tile_h / 2, '·', dot);
                    }
                }
            }
        }

        // Event sprites on top.
        for (sprite, placement) in scene.visible_sprites() {
            let rect = self.sprite_rect(start_x, start_y, placement);
            if rect.2 == 0 || rect.3 == 0 {
                continue;
            }
            let mut style = tile_style(sprite.value);
            style.bold = true;
            self.draw_tile(fb, rect, sprite.value, style);
        }

        self.draw_side_panel(fb, hud, viewport, start_x, start_y, frame_w);

        if hud.game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, scene: &TileScene, hud: &HudView, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(scene, hud, viewport, &mut fb);
        fb
    }

    fn cell_origin(&self, start_x: u16, start_y: u16, x: u8, y: u8) -> (u16, u16) {
        (
            start_x + 1 + x as u16 * self.pitch_w(),
            start_y + 1 + y as u16 * self.tile_h,
        )
    }

    /// Convert a tile-unit placement into a terminal rect.
    ///
    /// One `CELL_PITCH` maps onto one terminal pitch on each axis, so an idle
    /// placement lands exactly on its cell.
    fn sprite_rect(&self, start_x: u16, start_y: u16, p: Placement) -> (u16, u16, u16, u16) {
        let sx = self.pitch_w() as f32 / CELL_PITCH;
        let sy = self.tile_h as f32 / CELL_PITCH;
        let left = (p.left * sx).round().max(0.0) as u16;
        let top = (p.top * sy).round().max(0.0) as u16;
        let w = ((p.size * sx).round().max(0.0) as u16).min(self.tile_w + 1);
        let h = ((p.size * sy).round().max(0.0) as u16).min(self.tile_h);
        (start_x + 1 + left, start_y + 1 + top, w, h)
    }

    /// Fill `rect` (x, y, w, h) and centre the value in it.
    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        rect: (u16, u16, u16, u16),
        value: u32,
        style: CellStyle,
    ) {
        let (x, y, w, h) = rect;
        fb.fill_rect(x, y, w, h, ' ', style);
        let digits = count_digits(value);
        if digits <= w {
            fb.put_u32(x + (w - digits) / 2, y + h / 2, value, style);
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle::new(Rgb::new(200, 190, 180), Rgb::new(0, 0, 0));

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        hud: &HudView,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let help = CellStyle { dim: true, ..value };

        let mut y = start_y;
        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, hud.moves, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, hud.best, value);
        y = y.saturating_add(2);

        for line in ["wasd/arrows", "r restart", "q quit"] {
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
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
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            bold: true,
            ..CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0))
        };
        fb.put_str(x, mid_y, text, style);
    }
}

fn count_digits(mut n: u32) -> u16 {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}

/// Tile colours, darkening from pale to deep as the value grows.
fn tile_style(value: u32) -> CellStyle {
    let (fg, bg) = match value {
        2 => (Rgb::new(60, 55, 50), Rgb::new(238, 228, 218)),
        4 => (Rgb::new(60, 55, 50), Rgb::new(237, 224, 200)),
        8 => (Rgb::new(249, 246, 242), Rgb::new(242, 177, 121)),
        16 => (Rgb::new(249, 246, 242), Rgb::new(245, 149, 99)),
        32 => (Rgb::new(249, 246, 242), Rgb::new(246, 124, 95)),
        64 => (Rgb::new(249, 246, 242), Rgb::new(246, 94, 59)),
        128 => (Rgb::new(249, 246, 242), Rgb::new(237, 207, 114)),
        256 => (Rgb::new(249, 246, 242), Rgb::new(237, 204, 97)),
        512 => (Rgb::new(249, 246, 242), Rgb::new(237, 200, 80)),
        1024 => (Rgb::new(249, 246, 242), Rgb::new(237, 197, 63)),
        2048 => (Rgb::new(249, 246, 242), Rgb::new(237, 194, 46)),
        _ => (Rgb::new(249, 246, 242), Rgb::new(60, 58, 50)),
    };
    CellStyle::new(fg, bg)
}
