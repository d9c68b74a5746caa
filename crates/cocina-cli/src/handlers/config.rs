use crate::args::ConfigCommand;
use crate::presentation::presenters::present_config;
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::{Context, Result, bail};
use cocina_runtime::Config;
use std::path::Path;

pub fn handle(data_dir: &Path, user: Option<&str>, command: ConfigCommand, json: bool) -> Result<()> {
    let renderer = ConsoleRenderer::new(json);
    let config_path = Config::path_in(data_dir);
    let config = Config::load_from(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    match command {
        ConfigCommand::Show => {
            let user = config.resolve_user(user);
            renderer.render(present_config(data_dir, &config, &user, None))
        }

        ConfigCommand::Init {
            force,
            default_user,
            page_size,
            endpoint,
        } => {
            if config_path.exists() && !force {
                let user = config.resolve_user(user);
                return renderer.render(present_config(data_dir, &config, &user, Some(false)));
            }
            if page_size == Some(0) {
                bail!("--page-size must be at least 1");
            }

            let mut config = config;
            if default_user.is_some() {
                config.default_user = default_user;
            }
            if page_size.is_some() {
                config.page_size = page_size;
            }
            if endpoint.is_some() {
                config.extractor.endpoint = endpoint;
            }

            config
                .save_to(&config_path)
                .with_context(|| format!("Failed to write {}", config_path.display()))?;

            let user = config.resolve_user(user);
            renderer.render(present_config(data_dir, &config, &user, Some(true)))
        }
    }
}
