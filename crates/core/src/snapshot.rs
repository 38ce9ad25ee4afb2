use crate::board::Board;
use crate::types::{CellPos, PieceId, ShapeKind};

/// What a presentation layer needs to know about one visible cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellView {
    #[default]
    Empty,
    Locked(ShapeKind),
    Active(ShapeKind),
}

/// Read-only view of the game for rendering.
///
/// `cells` is row-major over the visible playfield with row 0 at the bottom.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    pub cells: Vec<CellView>,
    pub active: Option<PieceId>,
    pub score: u32,
    pub game_over: bool,
    pub pieces_spawned: u32,
}

impl GameSnapshot {
    /// Fill from `board`, reusing the cell storage.
    pub fn fill_from_board(&mut self, board: &Board, active: Option<PieceId>) {
        self.width = board.width();
        self.height = board.height();
        self.active = active;
        self.score = board.score();

        let len = board.width() as usize * board.height() as usize;
        self.cells.clear();
        self.cells.resize(len, CellView::Empty);
        for (pos, block) in board.occupied() {
            let i = pos.y as usize * board.width() as usize + pos.x as usize;
            self.cells[i] = if Some(block.owner) == active {
                CellView::Active(block.kind)
            } else {
                CellView::Locked(block.kind)
            };
        }
    }

    pub fn cell(&self, x: u8, y: u8) -> CellView {
        if x >= self.width || y >= self.height {
            return CellView::Empty;
        }
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Positions of the active piece's visible cells.
    pub fn active_cells(&self) -> impl Iterator<Item = CellPos> + '_ {
        let width = self.width.max(1) as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| matches!(c, CellView::Active(_)))
            .map(move |(i, _)| CellPos::new((i % width) as i32, (i / width) as i32))
    }
}
