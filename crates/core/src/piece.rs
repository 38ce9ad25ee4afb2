//! Piece module - the falling piece and its movement/timing state machine
//!
//! An [`ActivePiece`] holds its own cell offsets and pivot, and writes
//! references to itself into the [`Board`] after every successful move. All
//! motion goes through the same primitive: change the transform, validate it
//! against the board, then commit or revert.
//!
//! Two update cadences drive it:
//! - [`ActivePiece::frame_update`]: once per rendered frame, consumes input
//!   edges and applies the fallback gravity.
//! - [`ActivePiece::fixed_update`]: once per physics step, advances the DAS
//!   and soft-drop clocks.
//!
//! A failed downward move locks the piece: full rows are cleared and scored,
//! and the piece reports [`Step::Locked`] so the caller can spawn the next one.
//! Once locked, every method is a no-op.

use std::time::Duration;

use crate::board::Board;
use crate::shapes::{self, ShapeOffsets};
use crate::timing::{HeldControls, PieceTimers, Timing};
use crate::types::{Block, CellPos, InputEvent, LockReport, PieceId, ShapeKind, Vec2, PIECE_CELLS};

/// Lifecycle of a piece. `Locked` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceState {
    Active,
    Locked,
}

/// Outcome of a downward step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Moved down one row.
    Moved,
    /// Could not move; the piece is now part of the board.
    Locked(LockReport),
    /// The piece was already locked; nothing happened.
    Idle,
}

impl Step {
    pub fn lock_report(self) -> Option<LockReport> {
        match self {
            Step::Locked(report) => Some(report),
            _ => None,
        }
    }
}

/// The currently falling piece.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivePiece {
    id: PieceId,
    kind: ShapeKind,
    position: Vec2,
    offsets: ShapeOffsets,
    state: PieceState,
    held: HeldControls,
    timers: PieceTimers,
    timing: Timing,
    gravity_score_accum: u32,
}

impl ActivePiece {
    /// A piece of `kind` at `position` in spawn orientation. Not yet on the board.
    pub fn new(id: PieceId, kind: ShapeKind, position: Vec2, timing: Timing) -> Self {
        Self {
            id,
            kind,
            position,
            offsets: shapes::offsets(kind),
            state: PieceState::Active,
            held: HeldControls::default(),
            timers: PieceTimers::default(),
            timing,
            gravity_score_accum: 0,
        }
    }

    /// Create a piece and place it on the board.
    ///
    /// Returns `None` when the spawn footprint is out of bounds or overlaps
    /// another piece; in that case the board is left untouched.
    pub fn spawn(
        id: PieceId,
        kind: ShapeKind,
        position: Vec2,
        timing: Timing,
        board: &mut Board,
    ) -> Option<Self> {
        let piece = Self::new(id, kind, position, timing);
        if !piece.is_valid_position(board) {
            return None;
        }
        piece.sync_to_board(board);
        Some(piece)
    }

    pub fn id(&self) -> PieceId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn offsets(&self) -> &ShapeOffsets {
        &self.offsets
    }

    pub fn state(&self) -> PieceState {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        self.state == PieceState::Locked
    }

    pub fn held(&self) -> HeldControls {
        self.held
    }

    pub fn timers(&self) -> PieceTimers {
        self.timers
    }

    pub fn gravity_score_accum(&self) -> u32 {
        self.gravity_score_accum
    }

    fn block(&self) -> Block {
        Block {
            owner: self.id,
            kind: self.kind,
        }
    }

    /// Current cells, rounded to the grid.
    pub fn cells(&self) -> [CellPos; PIECE_CELLS] {
        self.offsets
            .map(|offset| Board::round_to_cell(self.position + offset))
    }

    /// Every cell is inside the border and either empty or already ours.
    pub fn is_valid_position(&self, board: &Board) -> bool {
        self.cells()
            .iter()
            .all(|&p| board.inside_border(p) && !board.is_occupied_by_other(p, self.id))
    }

    /// Replace this piece's references on the board with its current cells.
    pub fn sync_to_board(&self, board: &mut Board) {
        board.clear_owner(self.id);
        let block = self.block();
        for p in self.cells() {
            board.set_cell(p, block);
        }
    }

    /// Translate by `delta` if the result is valid; otherwise leave everything
    /// as it was.
    pub fn try_move(&mut self, board: &mut Board, delta: Vec2) -> bool {
        if self.is_locked() {
            return false;
        }
        self.position += delta;
        if self.is_valid_position(board) {
            self.sync_to_board(board);
            true
        } else {
            self.position -= delta;
            false
        }
    }

    /// Rotate -90 degrees about the pivot, with no wall kicks.
    pub fn rotate(&mut self, board: &mut Board) -> bool {
        if self.is_locked() {
            return false;
        }
        let previous = self.offsets;
        self.offsets = previous.map(Vec2::rotate_cw);
        if self.is_valid_position(board) {
            self.sync_to_board(board);
            true
        } else {
            self.offsets = previous;
            false
        }
    }

    /// Step down one row, or lock in place if that is impossible.
    ///
    /// Locking clears full rows, scores them together with the accumulated
    /// soft-drop bonus, and makes the piece inert.
    pub fn move_down_or_lock(&mut self, board: &mut Board) -> Step {
        if self.is_locked() {
            return Step::Idle;
        }
        self.timers.since_fall = Duration::ZERO;
        if self.try_move(board, Vec2::DOWN) {
            return Step::Moved;
        }

        let bonus = self.gravity_score_accum;
        let score_before = board.score();
        let rows_cleared = board.delete_full_rows(bonus);
        self.gravity_score_accum = 0;
        self.state = PieceState::Locked;
        self.held = HeldControls::default();
        self.timers = PieceTimers::default();

        Step::Locked(LockReport {
            piece: self.id,
            rows_cleared,
            bonus,
            points: board.score() - score_before,
        })
    }

    /// Per-frame update: apply input edges in order, then fallback gravity.
    ///
    /// Returns the lock report if the piece locked during this frame. Events
    /// after the one that locked the piece are ignored.
    pub fn frame_update(
        &mut self,
        board: &mut Board,
        dt: Duration,
        events: &[InputEvent],
    ) -> Option<LockReport> {
        if self.is_locked() {
            return None;
        }

        for &event in events {
            if let Some(report) = self.handle_input(board, event) {
                return Some(report);
            }
        }

        self.timers.since_fall = self.timers.since_fall.saturating_add(dt);
        if self.timers.since_fall >= self.timing.fall_interval {
            return self.move_down_or_lock(board).lock_report();
        }
        None
    }

    fn handle_input(&mut self, board: &mut Board, event: InputEvent) -> Option<LockReport> {
        match event {
            InputEvent::RotatePressed => {
                self.rotate(board);
            }
            InputEvent::LeftDown => {
                self.try_move(board, Vec2::LEFT);
                self.held.left = true;
                self.timers.das_left = Duration::ZERO;
            }
            InputEvent::LeftUp => {
                self.held.left = false;
                self.timers.das_left = Duration::ZERO;
            }
            InputEvent::RightDown => {
                self.try_move(board, Vec2::RIGHT);
                self.held.right = true;
                self.timers.das_right = Duration::ZERO;
            }
            InputEvent::RightUp => {
                self.held.right = false;
                self.timers.das_right = Duration::ZERO;
            }
            InputEvent::DownDown => {
                let step = self.move_down_or_lock(board);
                if let Step::Locked(report) = step {
                    return Some(report);
                }
                self.held.down = true;
                self.timers.soft_drop = Duration::ZERO;
            }
            InputEvent::DownUp => {
                self.held.down = false;
                self.timers.soft_drop = Duration::ZERO;
            }
        }
        None
    }

    /// Fixed-step update: sideways auto-repeat, then held soft drop.
    ///
    /// Returns the lock report if a soft-drop step locked the piece.
    pub fn fixed_update(&mut self, board: &mut Board, dt: Duration) -> Option<LockReport> {
        if self.is_locked() {
            return None;
        }

        if self.held.left {
            if self.timing.das_fires(self.timers.das_left, dt) {
                self.try_move(board, Vec2::LEFT);
            }
            self.timers.das_left = self.timers.das_left.saturating_add(dt);
        }
        if self.held.right {
            if self.timing.das_fires(self.timers.das_right, dt) {
                self.try_move(board, Vec2::RIGHT);
            }
            self.timers.das_right = self.timers.das_right.saturating_add(dt);
        }

        if self.held.down {
            self.timers.soft_drop = self.timers.soft_drop.saturating_add(dt);
            if self.timers.soft_drop >= self.timing.repeat {
                self.timers.soft_drop = Duration::ZERO;
                match self.move_down_or_lock(board) {
                    Step::Moved => self.gravity_score_accum += 1,
                    Step::Locked(report) => return Some(report),
                    Step::Idle => {}
                }
            }
        }
        None
    }
}
