// Per-user recipe collection store
// Each user's collection is one ordered JSON array; records are decoded on read

mod db;
mod error;
mod memory;
mod queries;
mod schema;
mod traits;

// Public API
pub use db::Database;
pub use error::{Error, Result};
pub use memory::MemoryStore;
pub use traits::{ModeStore, RecordStore};
