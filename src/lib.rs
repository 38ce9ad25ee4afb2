//! Blockfall (workspace facade crate).
//!
//! Re-exports the engine, input and terminal crates under one name and adds
//! the event journal used by the binary.

pub mod journal;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
