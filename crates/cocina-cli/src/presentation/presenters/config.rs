use cocina_runtime::Config;
use cocina_types::UserId;
use std::path::Path;

use crate::presentation::view_models::{CommandResultViewModel, ConfigViewModel, StatusBadge};

pub fn present_config(
    data_dir: &Path,
    config: &Config,
    user: &UserId,
    written: Option<bool>,
) -> CommandResultViewModel<ConfigViewModel> {
    let config_path = Config::path_in(data_dir);
    let content = ConfigViewModel {
        data_dir: data_dir.to_path_buf(),
        config_exists: config_path.exists(),
        config_path,
        written,
        user: user.to_string(),
        page_size: config.page_size(),
        extractor_endpoint: config.extractor.endpoint.clone(),
        extractor_timeout_secs: config.extractor.timeout_secs,
    };

    let result = CommandResultViewModel::new(content);
    match written {
        Some(true) => result.with_badge(StatusBadge::success("Config written")),
        Some(false) => result.with_badge(StatusBadge::warning("Config already exists")),
        None => result,
    }
}
