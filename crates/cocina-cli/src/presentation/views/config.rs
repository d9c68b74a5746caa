use std::fmt;

use crate::presentation::formatters::Paint;
use crate::presentation::view_models::{ConfigViewModel, ViewOptions};

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
    options: ViewOptions,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel, options: ViewOptions) -> Self {
        Self { data, options }
    }
}

impl fmt::Display for ConfigView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let paint = Paint::new(self.options.color);
        let data = self.data;

        match data.written {
            Some(true) => writeln!(f, "Wrote {}", data.config_path.display())?,
            Some(false) => writeln!(
                f,
                "{} {} already exists (use --force to overwrite)",
                paint.warn("Skipped:"),
                data.config_path.display()
            )?,
            None => {}
        }

        let config_state = if data.config_exists { "" } else { " (not created, using defaults)" };
        writeln!(f, "{:<10} {}", paint.dim("data dir"), data.data_dir.display())?;
        writeln!(f, "{:<10} {}{}", paint.dim("config"), data.config_path.display(), config_state)?;
        writeln!(f, "{:<10} {}", paint.dim("user"), data.user)?;
        writeln!(f, "{:<10} {}", paint.dim("page size"), data.page_size)?;
        writeln!(
            f,
            "{:<10} {} (timeout {}s)",
            paint.dim("extractor"),
            data.extractor_endpoint.as_deref().unwrap_or("local page parser"),
            data.extractor_timeout_secs
        )
    }
}
