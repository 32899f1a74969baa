//! Catch 'Em All - a paddle catches or dodges falling blocks.
//!
//! Core modules (pure, no terminal I/O):
//! - `config`: tunable constants
//! - `entities`: plain data records
//! - `spawner`: periodic object creation
//! - `compute`: simulation step and playing/game-over transitions
//! - `projection`: read-only translation of state into draw commands

pub mod compute;
pub mod config;
pub mod entities;
pub mod projection;
pub mod spawner;
