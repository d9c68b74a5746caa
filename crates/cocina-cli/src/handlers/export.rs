use super::HandlerContext;
use crate::presentation::formatters::csv::write_recipes;
use crate::presentation::presenters::{present_export, present_export_done};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::info;

/// CSV goes to stdout unless `--output` names a file; only then is there a
/// summary to render.
pub fn handle(ctx: &HandlerContext, output: Option<PathBuf>) -> Result<()> {
    let records = ctx.gateway().load()?;
    let rows = present_export(&records);

    match output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_recipes(BufWriter::new(file), &rows)?;
            info!(user = %ctx.user, path = %path.display(), count = rows.len(), "exported collection");
            ctx.render(present_export_done(path, rows.len()))
        }
        None => {
            let stdout = std::io::stdout();
            write_recipes(stdout.lock(), &rows)
        }
    }
}
