//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events to engine [`InputEvent`](types::InputEvent)
//! edges. The engine never polls devices; the game loop reads terminal events,
//! passes them through a [`KeyTracker`] and hands the resulting edges to
//! `Game::frame_update`.

pub mod handler;
pub mod map;

pub use blockfall_types as types;

pub use handler::{KeyTracker, DEFAULT_KEY_RELEASE_TIMEOUT};
pub use map::{control_for, should_quit, Control};
