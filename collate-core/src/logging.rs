use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system with environment-based filtering
///
/// - Log level comes from `RUST_LOG` (defaults to "info" if not set)
/// - Events go to stderr; stdout belongs to the dashboard
/// - JSON output flattens event fields for cleaner log lines
pub fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Json => fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .json()
            .flatten_event(true)
            .init(),
        LogFormat::Pretty => fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .init(),
    }
}

pub fn default_log_format() -> LogFormat {
    if io::stderr().is_terminal() {
        LogFormat::Pretty
    } else {
        LogFormat::Json
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}
