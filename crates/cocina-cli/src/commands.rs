use super::args::{Cli, Commands, OutputFormat};
use super::handlers::{self, HandlerContext};
use super::logging;
use anyhow::{Context, Result};
use cocina_runtime::{Cocina, resolve_data_dir};

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let json = matches!(cli.format, OutputFormat::Json);

    // Config commands must work before a database exists.
    if let Commands::Config { command } = cli.command {
        return handlers::config::handle(&data_dir, cli.user.as_deref(), command, json);
    }

    let workspace = Cocina::open(data_dir.clone())
        .with_context(|| format!("Failed to open data directory {}", data_dir.display()))?;
    let ctx = HandlerContext::new(&workspace, cli.user.as_deref(), json);

    match cli.command {
        Commands::Add { title, fields } => handlers::add::handle(&ctx, title, &fields),

        Commands::Import { url, tags, source } => handlers::import::handle(&ctx, &url, tags, source),

        Commands::List(args) => handlers::list::handle(&ctx, &args),

        Commands::Browse { session, page_size } => {
            let stdin = std::io::stdin();
            handlers::browse::handle(&ctx, session, page_size, stdin.lock())
        }

        Commands::Show { storage_id } => handlers::show::handle(&ctx, &storage_id),

        Commands::Edit {
            storage_id,
            title,
            fields,
        } => handlers::edit::handle(&ctx, &storage_id, title, &fields),

        Commands::Delete { storage_id } => handlers::delete::handle(&ctx, &storage_id),

        Commands::Export { output } => handlers::export::handle(&ctx, output),

        Commands::Config { .. } => Ok(()),
    }
}
