//! Shared data types and constants for the blockfall engine.
//!
//! Everything here is plain data: coordinates, piece identities, input edges
//! and the events the game reports back to its caller. The board and piece
//! logic live in `blockfall-core`.
//!
//! # Coordinates
//!
//! The grid is y-up: row 0 is the bottom of the playfield, row
//! `BOARD_HEIGHT - 1` the top visible row. One extra overflow row at
//! `y == BOARD_HEIGHT` is addressable so a piece may poke one cell above the
//! playfield while it rotates or spawns.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DAS_DELAY` | 1/3 s | Hold time before a sideways key auto-repeats |
//! | `REPEAT_INTERVAL` | 1/30 s | Auto-repeat and soft-drop step interval |
//! | `FALL_INTERVAL` | 1 s | Fallback gravity, independent of input |
//! | `FIXED_TICK` | 20 ms | Physics step for DAS and soft drop |
//! | `FRAME_TICK` | 16 ms | Target frame interval for the terminal loop |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{CellPos, ShapeKind, Vec2, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = ShapeKind::from_str("t").unwrap();
//! assert_eq!(kind, ShapeKind::T);
//!
//! // Rotating by -90 degrees maps (x, y) to (y, -x).
//! assert_eq!(Vec2::new(1.0, 0.0).rotate_cw(), Vec2::new(0.0, -1.0));
//! assert_eq!(Vec2::new(2.5, -0.5).round(), CellPos::new(3, 0));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::time::Duration;

use serde::Serialize;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Visible board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Number of cells in every piece
pub const PIECE_CELLS: usize = 4;

/// Delayed auto shift: how long a sideways key is held before it repeats.
pub const DAS_DELAY: Duration = Duration::from_nanos(333_333_333);

/// Auto-repeat interval for held sideways keys and held soft drop (30 Hz).
pub const REPEAT_INTERVAL: Duration = Duration::from_nanos(33_333_333);

/// Fallback gravity: a piece falls at least once per interval.
pub const FALL_INTERVAL: Duration = Duration::from_secs(1);

/// Fixed physics timestep (50 Hz).
pub const FIXED_TICK: Duration = Duration::from_millis(20);

/// Target frame interval for the terminal loop (~60 FPS).
pub const FRAME_TICK: Duration = Duration::from_millis(16);

/// Continuous grid-space vector used for piece offsets and pivots.
///
/// Shapes rotating about a cell corner carry half-integer offsets, so
/// positions are kept in floating point and rounded only when a cell is
/// looked up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const LEFT: Vec2 = Vec2::new(-1.0, 0.0);
    pub const RIGHT: Vec2 = Vec2::new(1.0, 0.0);
    pub const DOWN: Vec2 = Vec2::new(0.0, -1.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Rotate by -90 degrees about the origin: `(x, y) -> (y, -x)`.
    pub fn rotate_cw(self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Inverse of [`Vec2::rotate_cw`].
    pub fn rotate_ccw(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Round both axes to the nearest cell, ties rounding up.
    pub fn round(self) -> CellPos {
        CellPos::new(
            (self.x + 0.5).floor() as i32,
            (self.y + 0.5).floor() as i32,
        )
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

/// Integer grid coordinate of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
pub struct CellPos {
    pub x: i32,
    pub y: i32,
}

impl CellPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Identity of a piece; cells store it to record which piece owns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PieceId(pub u32);

/// The seven shape kinds
///
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Magenta, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeKind {
    /// All kinds in a fixed order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("O"), Some(ShapeKind::O));
    /// assert_eq!(ShapeKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "o" => Some(ShapeKind::O),
            "t" => Some(ShapeKind::T),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            _ => None,
        }
    }
}

/// Contents of an occupied board cell: which piece put it there, and its kind
/// for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    pub owner: PieceId,
    pub kind: ShapeKind,
}

/// Edge-triggered input consumed once per frame tick.
///
/// Device polling stays outside the engine; a front-end turns key presses and
/// releases into these events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputEvent {
    LeftDown,
    LeftUp,
    RightDown,
    RightUp,
    DownDown,
    DownUp,
    RotatePressed,
}

/// Result of a piece locking into the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LockReport {
    pub piece: PieceId,
    /// Rows removed by the clear that followed the lock.
    pub rows_cleared: u32,
    /// Soft-drop bonus the piece carried into the clear.
    pub bonus: u32,
    /// Total points added to the score (row table + bonus).
    pub points: u32,
}

/// Something observable that happened during a game update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    Spawned { piece: PieceId, kind: ShapeKind },
    Locked { report: LockReport, score: u32 },
    /// The next piece could not be placed; carries the score reached.
    GameOver { score: u32 },
    /// Board cleared and score zeroed after a game over.
    Restarted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(DAS_DELAY.as_millis(), 333);
        assert_eq!(REPEAT_INTERVAL.as_micros(), 33_333);
        assert_eq!(FALL_INTERVAL, Duration::from_secs(1));
        assert!(FIXED_TICK < DAS_DELAY);
    }

    #[test]
    fn test_vec2_rotation_is_quarter_turn() {
        let v = Vec2::new(-1.5, 0.5);
        assert_eq!(v.rotate_cw(), Vec2::new(0.5, 1.5));
        assert_eq!(v.rotate_cw().rotate_ccw(), v);
        assert_eq!(v.rotate_cw().rotate_cw().rotate_cw().rotate_cw(), v);
    }

    #[test]
    fn test_round_ties_go_up_on_both_axes() {
        assert_eq!(Vec2::new(0.5, 0.5).round(), CellPos::new(1, 1));
        assert_eq!(Vec2::new(-0.5, -0.5).round(), CellPos::new(0, 0));
        assert_eq!(Vec2::new(3.49, 18.51).round(), CellPos::new(3, 19));
        assert_eq!(Vec2::new(-1.2, 0.0).round(), CellPos::new(-1, 0));
    }

    #[test]
    fn test_shape_kind_parse_matches_serde_names() {
        for kind in ShapeKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(ShapeKind::from_str(json.trim_matches('"')), Some(kind));
        }
    }

    #[test]
    fn test_event_serializes_with_tag() {
        let event = GameEvent::Spawned {
            piece: PieceId(7),
            kind: ShapeKind::T,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"event":"spawned","piece":7,"kind":"t"}"#);
    }
}
