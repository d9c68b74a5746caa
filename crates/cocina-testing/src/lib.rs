//! Testing infrastructure for cocina integration tests.
//!
//! - `TestWorld`: an isolated data directory plus a configured CLI command
//! - `assertions`: checks over the `{"status": "ok", "content": ...}` JSON output

pub mod assertions;
pub mod world;

pub use world::{CliResult, TestWorld};
