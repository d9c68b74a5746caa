use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use super::{CreateView, ViewOptions};

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub data_dir: PathBuf,
    pub config_path: PathBuf,
    pub config_exists: bool,
    /// Set by `config init` when a file was written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub written: Option<bool>,
    pub user: String,
    pub page_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extractor_endpoint: Option<String>,
    pub extractor_timeout_secs: u64,
}

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::config::ConfigView;
        Box::new(ConfigView::new(self, options))
    }
}
