//! Shelf Match (workspace facade crate).
//!
//! Re-exports the board engine as `shelf_match::{core, types}` and hosts the
//! headless runner: argument parsing, logging setup and a greedy auto-player.

pub use shelf_match_core as core;
pub use shelf_match_types as types;

pub mod autoplay;
pub mod cli;
pub mod logger;
pub mod runner;
