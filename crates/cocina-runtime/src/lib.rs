// Runtime layer - wires config, the SQLite store, the view engine and extraction
// together for one data directory

pub mod config;
mod error;
pub mod image;
pub mod import;
mod workspace;

pub use config::{Config, ExtractorConfig, resolve_data_dir};
pub use error::{Error, Result};
pub use image::{image_data_url, resolve_image};
pub use import::{ImportDraft, ImportOutcome, prepare_import};
pub use workspace::Cocina;
