mod context;

pub mod add;
pub mod browse;
pub mod config;
pub mod delete;
pub mod edit;
pub mod export;
pub mod import;
pub mod list;
pub mod show;

pub use context::HandlerContext;
