//! GameView: draws a [`GameSnapshot`] into a framebuffer.
//!
//! Pure, no I/O. The board is drawn y-up (row 0 at the bottom of the frame),
//! two terminal columns per cell to even out the glyph aspect ratio.

use crate::core::{CellView, GameSnapshot};
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::ShapeKind;

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Terminal columns per board cell.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

/// Where the board frame landed in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    pub fn frame_rect(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameRect {
        let w = snap.width as u16 * self.cell_w + 2;
        let h = snap.height as u16 + 2;
        FrameRect {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let frame = self.frame_rect(snap, viewport);
        draw_border(fb, frame, Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0)));

        let empty = Style::new(Rgb::new(90, 90, 100), PLAYFIELD_BG);
        for y in 0..snap.height {
            // Row 0 is the bottom line inside the frame.
            let sy = frame.y + frame.h - 2 - y as u16;
            for x in 0..snap.width {
                let sx = frame.x + 1 + x as u16 * self.cell_w;
                let (ch, style) = match snap.cell(x, y) {
                    CellView::Empty => ('·', empty),
                    CellView::Locked(kind) => ('█', Style::new(shape_color(kind), PLAYFIELD_BG)),
                    CellView::Active(kind) => ('█', Style::new(shape_color(kind), PLAYFIELD_BG).bold()),
                };
                fb.fill_rect(sx, sy, self.cell_w, 1, ch, style);
            }
        }

        self.draw_panel(fb, snap, viewport, frame);

        if snap.game_over {
            let label = "GAME OVER";
            let x = frame.x + frame.w.saturating_sub(label.len() as u16) / 2;
            let y = frame.y + frame.h / 2;
            fb.put_str(x, y, label, Style::new(Rgb::new(255, 255, 255), Rgb::new(120, 30, 30)).bold());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, frame: FrameRect) {
        let x = frame.x.saturating_add(frame.w).saturating_add(2);
        if x.saturating_add(10) > viewport.width {
            return;
        }
        let label = Style::default().bold();
        let value = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.put_str(x, frame.y, "SCORE", label);
        fb.put_u32(x, frame.y + 1, snap.score, value);
        fb.put_str(x, frame.y + 3, "PIECES", label);
        fb.put_u32(x, frame.y + 4, snap.pieces_spawned, value);
        fb.put_str(x, frame.y + 6, "q: quit", value);
    }
}

fn draw_border(fb: &mut FrameBuffer, r: FrameRect, style: Style) {
    if r.w < 2 || r.h < 2 {
        return;
    }
    let right = r.x + r.w - 1;
    let bottom = r.y + r.h - 1;
    fb.put(r.x, r.y, '┌', style);
    fb.put(right, r.y, '┐', style);
    fb.put(r.x, bottom, '└', style);
    fb.put(right, bottom, '┘', style);
    for x in r.x + 1..right {
        fb.put(x, r.y, '─', style);
        fb.put(x, bottom, '─', style);
    }
    for y in r.y + 1..bottom {
        fb.put(r.x, y, '│', style);
        fb.put(right, y, '│', style);
    }
}

pub fn shape_color(kind: ShapeKind) -> Rgb {
    match kind {
        ShapeKind::I => Rgb::new(80, 220, 220),
        ShapeKind::O => Rgb::new(240, 220, 80),
        ShapeKind::T => Rgb::new(200, 120, 220),
        ShapeKind::S => Rgb::new(100, 220, 120),
        ShapeKind::Z => Rgb::new(220, 80, 80),
        ShapeKind::J => Rgb::new(80, 120, 220),
        ShapeKind::L => Rgb::new(255, 165, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;
    use crate::types::{Block, CellPos, PieceId};

    fn row_text(fb: &FrameBuffer, y: u16) -> String {
        fb.row(y).iter().map(|g| g.ch).collect()
    }

    #[test]
    fn test_row_zero_is_drawn_at_bottom() {
        let mut board = Board::new(4, 4);
        let block = Block {
            owner: PieceId(3),
            kind: ShapeKind::Z,
        };
        board.set_cell(CellPos::new(0, 0), block);
        let mut snap = GameSnapshot::default();
        snap.fill_from_board(&board, None);

        let view = GameView::default();
        let fb = view.render(&snap, Viewport::new(10, 6));
        assert_eq!(row_text(&fb, 0), "┌────────┐");
        assert_eq!(row_text(&fb, 4), "│██······│");
        assert_eq!(row_text(&fb, 1), "│········│");
        assert_eq!(fb.get(1, 4).map(|g| g.style.fg), Some(shape_color(ShapeKind::Z)));
    }

    #[test]
    fn test_active_cells_are_bold() {
        let mut board = Board::new(4, 4);
        let block = Block {
            owner: PieceId(1),
            kind: ShapeKind::T,
        };
        board.set_cell(CellPos::new(3, 3), block);
        let mut snap = GameSnapshot::default();
        snap.fill_from_board(&board, Some(PieceId(1)));

        let fb = GameView::default().render(&snap, Viewport::new(10, 6));
        let glyph = fb.get(7, 1).unwrap();
        assert_eq!(glyph.ch, '█');
        assert!(glyph.style.bold);
    }

    #[test]
    fn test_game_over_banner() {
        let mut snap = GameSnapshot::default();
        snap.fill_from_board(&Board::default(), None);
        snap.game_over = true;
        let fb = GameView::default().render(&snap, Viewport::new(40, 24));
        let found = (0..fb.height()).any(|y| row_text(&fb, y).contains("GAME OVER"));
        assert!(found);
    }

    #[test]
    fn test_panel_shows_score() {
        let mut board = Board::default();
        board.add_score(1240);
        let mut snap = GameSnapshot::default();
        snap.fill_from_board(&board, None);
        let fb = GameView::default().render(&snap, Viewport::new(60, 24));
        let frame = GameView::default().frame_rect(&snap, Viewport::new(60, 24));
        assert!(row_text(&fb, frame.y).contains("SCORE"));
        assert!(row_text(&fb, frame.y + 1).contains("1240"));
    }
}
