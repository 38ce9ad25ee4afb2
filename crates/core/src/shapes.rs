//! Shapes module - cell offsets and spawn placement for each kind
//!
//! Offsets are relative to the piece's pivot, y-up. Rotation turns every
//! offset about the pivot, so a shape's pivot decides how it turns:
//! T, S, Z, J and L pivot on the centre of a cell; I and O pivot on a cell
//! corner and carry half-integer offsets (the O then rotates in place).

use crate::types::{ShapeKind, Vec2, PIECE_CELLS};

/// Offsets of the four cells relative to the pivot.
pub type ShapeOffsets = [Vec2; PIECE_CELLS];

const fn v(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

/// Spawn orientation offsets for `kind`.
pub fn offsets(kind: ShapeKind) -> ShapeOffsets {
    match kind {
        ShapeKind::I => [v(-1.5, 0.5), v(-0.5, 0.5), v(0.5, 0.5), v(1.5, 0.5)],
        ShapeKind::O => [v(-0.5, -0.5), v(0.5, -0.5), v(-0.5, 0.5), v(0.5, 0.5)],
        ShapeKind::T => [v(-1.0, 0.0), v(0.0, 0.0), v(1.0, 0.0), v(0.0, 1.0)],
        ShapeKind::S => [v(-1.0, 0.0), v(0.0, 0.0), v(0.0, 1.0), v(1.0, 1.0)],
        ShapeKind::Z => [v(-1.0, 1.0), v(0.0, 1.0), v(0.0, 0.0), v(1.0, 0.0)],
        ShapeKind::J => [v(-1.0, 1.0), v(-1.0, 0.0), v(0.0, 0.0), v(1.0, 0.0)],
        ShapeKind::L => [v(-1.0, 0.0), v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0)],
    }
}

/// Pivot displacement from the spawn cell.
///
/// Corner-pivot shapes sit half a cell off the spawn cell so that
/// `pivot + offset` lands on whole cells.
pub fn pivot_bias(kind: ShapeKind) -> Vec2 {
    match kind {
        ShapeKind::I => v(0.5, -0.5),
        ShapeKind::O => v(0.5, 0.5),
        _ => v(0.0, 0.0),
    }
}

/// Spawn pivot for `kind` on a board of the given size.
///
/// The spawn cell is column `width / 2 - 1`, row `height - 2`, which puts the
/// top of every shape on the top visible row.
pub fn spawn_position(kind: ShapeKind, width: u8, height: u8) -> Vec2 {
    let column = (width / 2).saturating_sub(1) as f32;
    let row = height.saturating_sub(2) as f32;
    v(column, row) + pivot_bias(kind)
}
