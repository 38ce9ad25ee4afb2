//! Board module - owns the grid of placed blocks and the score
//!
//! The grid is y-up: row 0 is the bottom, row `height - 1` the top visible row.
//! Storage is a flat row-major vector with one overflow row at `y == height`,
//! so every coordinate accepted by [`Board::inside_border`] is addressable.
//! Cells record which piece owns them, making "is this my own cell?" a value
//! comparison on [`PieceId`].

use crate::scoring::rows_score;
use crate::types::{Block, CellPos, PieceId, Vec2, BOARD_HEIGHT, BOARD_WIDTH};

/// Receives blocks released by [`Board::destroy_row`].
///
/// The presentation layer can use this to tear down per-block visuals. The
/// unit type is the no-op sink.
pub trait BlockSink {
    fn block_destroyed(&mut self, pos: CellPos, block: Block);
}

impl BlockSink for () {
    fn block_destroyed(&mut self, _pos: CellPos, _block: Block) {}
}

/// The playfield plus cumulative score.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Row-major, `(height + 1) * width` cells; the last row is overflow.
    cells: Vec<Option<Block>>,
    score: u32,
}

impl Board {
    /// Create an empty board of the given size.
    ///
    /// Zero dimensions are bumped to 1.
    pub fn new(width: u8, height: u8) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let len = width as usize * (height as usize + 1);
        Self {
            width,
            height,
            cells: vec![None; len],
            score: 0,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Add points to the score.
    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Round a continuous position to the cell containing it.
    pub fn round_to_cell(v: Vec2) -> CellPos {
        v.round()
    }

    /// True for columns `0..width` and rows `0..=height`.
    ///
    /// The upper bound includes the overflow row above the playfield.
    pub fn inside_border(&self, p: CellPos) -> bool {
        p.x >= 0 && p.x < self.width as i32 && p.y >= 0 && p.y <= self.height as i32
    }

    #[inline(always)]
    fn index(&self, p: CellPos) -> Option<usize> {
        if !self.inside_border(p) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Block at `p`, or `None` when the cell is empty or outside the border.
    pub fn cell(&self, p: CellPos) -> Option<Block> {
        self.index(p).and_then(|i| self.cells[i])
    }

    /// True when `p` holds a block owned by anyone other than `owner`.
    pub fn is_occupied_by_other(&self, p: CellPos, owner: PieceId) -> bool {
        matches!(self.cell(p), Some(block) if block.owner != owner)
    }

    /// Returns false if `p` is outside the border.
    pub fn set_cell(&mut self, p: CellPos, block: Block) -> bool {
        match self.index(p) {
            Some(i) => {
                self.cells[i] = Some(block);
                true
            }
            None => false,
        }
    }

    /// Returns false if `p` is outside the border.
    pub fn clear_cell(&mut self, p: CellPos) -> bool {
        match self.index(p) {
            Some(i) => {
                self.cells[i] = None;
                true
            }
            None => false,
        }
    }

    /// Remove every block owned by `owner`.
    pub fn clear_owner(&mut self, owner: PieceId) {
        for cell in &mut self.cells {
            if matches!(cell, Some(block) if block.owner == owner) {
                *cell = None;
            }
        }
    }

    fn row(&self, y: u8) -> &[Option<Block>] {
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// Check if a visible row is completely filled
    pub fn is_row_full(&self, y: u8) -> bool {
        if y >= self.height {
            return false;
        }
        self.row(y).iter().all(Option::is_some)
    }

    /// Clear every cell in row `y`.
    pub fn destroy_row(&mut self, y: u8) {
        self.destroy_row_with(y, &mut ());
    }

    /// Clear every cell in row `y`, reporting each released block to `sink`.
    pub fn destroy_row_with<S: BlockSink + ?Sized>(&mut self, y: u8, sink: &mut S) {
        if y > self.height {
            return;
        }
        for x in 0..self.width {
            let pos = CellPos::new(x as i32, y as i32);
            let i = y as usize * self.width as usize + x as usize;
            if let Some(block) = self.cells[i].take() {
                sink.block_destroyed(pos, block);
            }
        }
    }

    /// Move every block in row `y` into row `y - 1` and clear row `y`.
    ///
    /// Row `y - 1` must already be empty. Row 0 has nowhere to go and is left
    /// untouched.
    pub fn shift_row_down(&mut self, y: u8) {
        if y == 0 || y > self.height {
            return;
        }
        let width = self.width as usize;
        let src = y as usize * width;
        let dst = src - width;
        for x in 0..width {
            if let Some(block) = self.cells[src + x].take() {
                self.cells[dst + x] = Some(block);
            }
        }
    }

    /// Apply [`Board::shift_row_down`] to row `y` and every row above it,
    /// bottom first, up to and including the overflow row.
    pub fn shift_rows_above_down(&mut self, y: u8) {
        for row in y..=self.height {
            self.shift_row_down(row);
        }
    }

    /// Remove every full row, compact the rows above and score the clear.
    ///
    /// Returns the number of rows removed. The row table is applied once to
    /// the total for this call, then `bonus` is added on top.
    pub fn delete_full_rows(&mut self, bonus: u32) -> u32 {
        self.delete_full_rows_with(bonus, &mut ())
    }

    /// [`Board::delete_full_rows`] with a hook for destroyed blocks.
    pub fn delete_full_rows_with<S: BlockSink + ?Sized>(&mut self, bonus: u32, sink: &mut S) -> u32 {
        let mut cleared = 0;
        let mut y = 0;
        while y < self.height {
            if !self.is_row_full(y) {
                y += 1;
                continue;
            }
            self.destroy_row_with(y, sink);
            self.shift_rows_above_down(y + 1);
            cleared += 1;
            // Row y now holds what was above it; look at it again.
        }
        self.add_score(rows_score(cleared) + bonus);
        cleared
    }

    /// Clear the grid and zero the score.
    pub fn reset(&mut self) {
        self.cells.fill(None);
        self.score = 0;
    }

    /// Occupied cells of the visible playfield, bottom row first.
    pub fn occupied(&self) -> impl Iterator<Item = (CellPos, Block)> + '_ {
        let width = self.width as usize;
        let visible = width * self.height as usize;
        self.cells[..visible]
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| {
                cell.map(|block| (CellPos::new((i % width) as i32, (i / width) as i32), block))
            })
    }

    /// Number of occupied cells in the visible playfield.
    pub fn occupied_count(&self) -> usize {
        self.occupied().count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}
