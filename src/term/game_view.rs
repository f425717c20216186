//! Maps the game state into a framebuffer.
//!
//! Pure, no I/O; every layout decision here is unit-testable.

use crate::core::GameState;
use crate::term::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal dimensions the frame is laid out for.
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

/// Renders one frame of the game.
pub struct GameView {
    /// Terminal columns per board cell.
    cell_w: u16,
    /// Terminal rows per board cell.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the glyph aspect ratio of most terminals.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

const WELL_BG: Rgb = Rgb::new(30, 30, 40);

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render `state` into `fb`, resizing it to the viewport.
    ///
    /// `best` is the best score on record, shown next to the live score.
    pub fn render(&self, state: &GameState, best: u32, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let well_w = BOARD_WIDTH as u16 * self.cell_w;
        let well_h = BOARD_HEIGHT as u16 * self.cell_h;
        let frame_w = well_w + 2;
        let frame_h = well_h + 2;

        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        fb.fill_rect(
            origin_x + 1,
            origin_y + 1,
            well_w,
            well_h,
            ' ',
            CellStyle::plain(Rgb::new(80, 80, 90), WELL_BG),
        );
        self.draw_border(fb, origin_x, origin_y, frame_w, frame_h);

        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                match state.board().get(x, y).flatten() {
                    Some(kind) => {
                        self.draw_mino(fb, origin_x, origin_y, x as u16, y as u16, kind)
                    }
                    None => self.draw_grid_dot(fb, origin_x, origin_y, x as u16, y as u16),
                }
            }
        }

        // Shadow first so the active piece draws over it when they overlap.
        if let (Some(active), Some(ghost_y)) = (state.active(), state.ghost_row()) {
            let style = CellStyle {
                fg: Rgb::new(140, 140, 140),
                bg: WELL_BG,
                bold: false,
                dim: true,
            };
            for &(dx, dy) in active.shape().iter() {
                self.draw_piece_cell(fb, origin_x, origin_y, active.x + dx, ghost_y + dy, '░', style);
            }
        }

        if let Some(active) = state.active() {
            for &(dx, dy) in active.shape().iter() {
                let (x, y) = (active.x + dx, active.y + dy);
                if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
                    self.draw_mino(fb, origin_x, origin_y, x as u16, y as u16, active.kind);
                }
            }
        }

        self.draw_side_panel(fb, state, best, viewport, origin_x, origin_y, frame_w);

        if state.paused() {
            self.draw_overlay(fb, origin_x, origin_y, frame_w, frame_h, "PAUSED", None);
        } else if state.game_over() {
            self.draw_overlay(
                fb,
                origin_x,
                origin_y,
                frame_w,
                frame_h,
                "GAME OVER",
                Some("R to restart"),
            );
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

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

    fn draw_grid_dot(&self, fb: &mut FrameBuffer, origin_x: u16, origin_y: u16, x: u16, y: u16) {
        let style = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: WELL_BG,
            bold: false,
            dim: true,
        };
        self.fill_cell(fb, origin_x, origin_y, x, y, '·', style);
    }

    fn draw_mino(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        x: u16,
        y: u16,
        kind: PieceKind,
    ) {
        let style = CellStyle {
            fg: kind_color(kind),
            bg: WELL_BG,
            bold: true,
            dim: false,
        };
        self.fill_cell(fb, origin_x, origin_y, x, y, '█', style);
    }

    /// Like `draw_mino` but takes signed board coordinates and clips.
    fn draw_piece_cell(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        x: i8,
        y: i8,
        ch: char,
        style: CellStyle,
    ) {
        if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
            self.fill_cell(fb, origin_x, origin_y, x as u16, y as u16, ch, style);
        }
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        x: u16,
        y: u16,
        ch: char,
        style: CellStyle,
    ) {
        fb.fill_rect(
            origin_x + 1 + x * self.cell_w,
            origin_y + 1 + y * self.cell_h,
            self.cell_w,
            self.cell_h,
            ch,
            style,
        );
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        best: u32,
        viewport: Viewport,
        origin_x: u16,
        origin_y: u16,
        frame_w: u16,
    ) {
        let panel_x = origin_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = origin_y;
        let mut stat = |fb: &mut FrameBuffer, name: &str, text: &str| {
            fb.put_str(panel_x, y, name, label);
            fb.put_str(panel_x, y + 1, text, value);
            y = y.saturating_add(3);
        };

        stat(fb, "SCORE", &state.score().to_string());
        stat(fb, "BEST", &best.max(state.score()).to_string());
        stat(fb, "LEVEL", &state.level().to_string());
        stat(fb, "LINES", &state.lines().to_string());
        stat(
            fb,
            "HOLD",
            state.hold_piece().map(PieceKind::letter).unwrap_or("-"),
        );

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        for kind in state.preview() {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, kind.letter(), value);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        frame_w: u16,
        frame_h: u16,
        title: &str,
        hint: Option<&str>,
    ) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let mid_y = origin_y.saturating_add(frame_h / 2);

        let centered = |text: &str| {
            origin_x.saturating_add(frame_w.saturating_sub(text.chars().count() as u16) / 2)
        };
        fb.put_str(centered(title), mid_y, title, style);
        if let Some(hint) = hint {
            fb.put_str(
                centered(hint),
                mid_y + 1,
                hint,
                CellStyle { bold: false, ..style },
            );
        }
    }
}

fn kind_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}
