// cocina CLI
//
// Every command opens the data directory, runs against one user's collection
// and renders through the presentation layer (plain text or JSON).
// `list` is a single render cycle; `browse` keeps a view session alive and
// reads navigation commands from stdin.

mod args;
mod commands;
mod handlers;
mod logging;
pub mod presentation;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
