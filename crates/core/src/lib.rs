//! Core engine - board state, piece movement and timing
//!
//! Pure and deterministic: no I/O, no global state, no device polling. The
//! caller owns a [`Game`] (or a bare [`Board`] plus [`ActivePiece`]) and feeds
//! it elapsed time and input edges.
//!
//! # Module Structure
//!
//! - [`board`]: the grid of owned cells, row clearing/compaction and score
//! - [`piece`]: the falling piece, validated moves/rotation, lock, timing
//! - [`timing`]: DAS / soft-drop / fallback gravity clocks
//! - [`shapes`]: cell offsets and spawn placement for the seven shapes
//! - [`scoring`]: row clear points
//! - [`spawner`]: next-shape selection
//! - [`game`]: the driver tying board, piece and spawner together
//! - [`snapshot`]: read-only view for presentation
//! - [`config`]: `BLOCKFALL_*` environment configuration
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use blockfall_core::{Game, GameConfig, SequenceSpawner};
//! use blockfall_core::types::{InputEvent, ShapeKind};
//!
//! let mut game = Game::with_spawner(GameConfig::default(), SequenceSpawner::new([ShapeKind::T]));
//! game.start();
//!
//! let x = game.active().unwrap().position().x;
//! game.frame_update(Duration::from_millis(16), &[InputEvent::LeftDown, InputEvent::LeftUp]);
//! assert_eq!(game.active().unwrap().position().x, x - 1.0);
//! ```
//!
//! # Timing
//!
//! Call [`Game::frame_update`] once per rendered frame with the frame's
//! elapsed time and its input edges, and [`Game::fixed_update`] once per
//! physics step (see [`types::FIXED_TICK`]).

pub mod board;
pub mod config;
pub mod game;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;
pub mod spawner;
pub mod timing;

pub use blockfall_types as types;

pub use board::{BlockSink, Board};
pub use config::GameConfig;
pub use game::{EventBuffer, Game, MAX_EVENTS_PER_UPDATE};
pub use piece::{ActivePiece, PieceState, Step};
pub use rng::SimpleRng;
pub use scoring::{rows_score, ROW_SCORES};
pub use snapshot::{CellView, GameSnapshot};
pub use spawner::{RandomSpawner, SequenceSpawner, Spawner};
pub use timing::{HeldControls, PieceTimers, Timing};
