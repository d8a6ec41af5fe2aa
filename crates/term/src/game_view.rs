//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! Pure (no I/O), so layout can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{piece_color, FrameBuffer, Rgb, Style};

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

/// Message drawn on top of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Shown for a moment after a session ends, with its final numbers
    GameOver { score: u32, lines: u32, level: u32 },
}

const PANEL_W: u16 = 18;
const PANEL_GAP: u16 = 2;

const BOARD_BG: Rgb = Rgb::new(24, 24, 32);
const TEXT: Style = Style::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0));
const LABEL: Style = Style::new(Rgb::new(130, 130, 150), Rgb::new(0, 0, 0));
const BORDER: Style = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const EMPTY: Style = Style::new(Rgb::new(60, 60, 75), BOARD_BG);
const BANNER: Style = Style::new(Rgb::new(255, 255, 255), Rgb::new(150, 20, 20)).bold();

/// Lays out the board and the side panel.
pub struct GameView {
    /// Terminal columns per board cell.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps blocks roughly square.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        (snap.cols * self.cell_w + 2, snap.rows + 2)
    }

    /// Top-left terminal position of board cell (0, 0)
    pub fn board_origin(&self, snap: &GameSnapshot, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size(snap);
        let total_w = frame_w + PANEL_GAP + PANEL_W;
        let x = viewport.width.saturating_sub(total_w) / 2;
        let y = viewport.height.saturating_sub(frame_h) / 2;
        (x + 1, y + 1)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        overlay: Option<&Overlay>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(TEXT.glyph(' '));

        let (ox, oy) = self.board_origin(snap, viewport);
        let (frame_w, frame_h) = self.frame_size(snap);
        fb.draw_box(ox - 1, oy - 1, frame_w, frame_h, BORDER);

        for y in 0..snap.rows {
            for x in 0..snap.cols {
                let col = ox + x * self.cell_w;
                let row = oy + y;
                match snap.visible_cell(x as usize, y as usize) {
                    Some(color) => {
                        let block = Style::new(piece_color(color), BOARD_BG).glyph('█');
                        fb.fill_rect(col, row, self.cell_w, 1, block);
                    }
                    None => {
                        fb.fill_rect(col, row, self.cell_w, 1, EMPTY.glyph(' '));
                        fb.set(col + self.cell_w - 1, row, EMPTY.glyph('·'));
                    }
                }
            }
        }

        self.draw_panel(fb, snap, ox - 1 + frame_w + PANEL_GAP, oy);

        if let Some(overlay) = overlay {
            self.draw_overlay(fb, overlay, ox - 1, oy - 1, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        overlay: Option<&Overlay>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, overlay, viewport, &mut fb);
        fb
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        let stats = [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ];
        let mut row = y;
        for (label, value) in stats {
            fb.put_str(x, row, label, LABEL);
            fb.put_str(x, row + 1, &value.to_string(), TEXT.bold());
            row += 3;
        }

        fb.put_str(x, row, "SPEED", LABEL);
        let speed = if snap.soft_drop {
            format!("{}ms (soft)", snap.drop_interval_ms)
        } else {
            format!("{}ms", snap.drop_interval_ms)
        };
        fb.put_str(x, row + 1, &speed, TEXT);
        row += 3;

        let help = [
            "←/→  move",
            "↓    soft drop",
            "j    step down",
            "↑    rotate",
            "r    restart",
            "q    quit",
        ];
        for line in help {
            fb.put_str(x, row, line, LABEL);
            row += 1;
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, overlay: &Overlay, x: u16, y: u16, w: u16, h: u16) {
        let Overlay::GameOver { score, lines, level } = *overlay;
        let lines_text = [
            "GAME OVER".to_string(),
            format!("score {score}"),
            format!("lines {lines}  level {level}"),
        ];

        let box_w = lines_text
            .iter()
            .map(|l| l.chars().count() as u16)
            .max()
            .unwrap_or(0)
            .saturating_add(4)
            .min(w);
        let box_h = lines_text.len() as u16 + 2;
        let bx = x + w.saturating_sub(box_w) / 2;
        let by = y + h.saturating_sub(box_h) / 2;

        fb.fill_rect(bx, by, box_w, box_h, BANNER.glyph(' '));
        for (i, text) in lines_text.iter().enumerate() {
            let len = text.chars().count() as u16;
            let tx = bx + box_w.saturating_sub(len) / 2;
            fb.put_str(tx, by + 1 + i as u16, text, BANNER);
        }
    }
}
