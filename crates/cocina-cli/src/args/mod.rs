mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "cocina")]
#[command(about = "Collect recipes and browse your collection", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Data directory (default: $COCINA_PATH, then the XDG data dir)"
    )]
    pub data_dir: Option<String>,

    #[arg(
        long,
        global = true,
        help = "Whose collection to use (default: config default_user, then $USER)"
    )]
    pub user: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}
