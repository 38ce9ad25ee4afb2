//! Terminal front-end: framebuffer, game view and renderer.
//!
//! Rendering is an outside collaborator of the engine: it reads a
//! [`GameSnapshot`](core::GameSnapshot) and never mutates game state.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{shape_color, FrameRect, GameView, Viewport};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, TerminalRenderer};
