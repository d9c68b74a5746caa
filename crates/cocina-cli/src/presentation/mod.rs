//! # Presentation Layer
//!
//! Output for the CLI, split MVVM-style so handlers never print directly:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//! ```
//!
//! * `view_models/`: serializable output contracts. `--format json` prints these as-is.
//! * `presenters/`: map engine types (`RenderModel`, `Recipe`, ...) to view models.
//! * `views/`: `fmt::Display` layouts for plain output (card, table, detail).
//! * `renderers/`: pick JSON or text and write to stdout.
//! * `formatters/`: small string helpers and the CSV writer.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel, ViewOptions,
};
