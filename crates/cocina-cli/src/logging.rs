use crate::args::LogLevel;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the stderr subscriber. `RUST_LOG` wins over `--log-level`.
pub fn init(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    // A second init (tests driving `run` twice) is harmless.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
