use clap::{Parser, Subcommand};
use collate_core::cli;
use collate_core::cli::watch::{WatchOptions, WatchOutput, run_watch};
use collate_core::conf::{CollateConfig, load_config, load_config_or_default, resolve_log_file};
use collate_core::logging::{LogFormat, default_log_format, init_logging};
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_CONFIG: &str = "collate.hcl";

#[derive(Parser, Debug)]
#[command(
    name = "collate",
    version,
    about = "Collate dumpvdl2 output by radio endpoint"
)]
struct Cli {
    /// Emit logs as JSON regardless of terminal detection
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Follow a growing decoder log and show live per-hex traffic
    Run {
        /// Decoder log to follow (overrides tail.log_file)
        log_file: Option<PathBuf>,

        /// Path to the config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Show the messages of a single hex instead of the overview
        #[arg(long)]
        hex: Option<String>,

        /// Print one JSON snapshot per refresh instead of redrawing
        #[arg(long)]
        json: bool,

        /// Poll interval while waiting for new data (overrides config)
        #[arg(long)]
        poll_interval_ms: Option<u64>,
    },

    /// Index a log file once and print the summary
    Scan {
        log_file: PathBuf,

        #[arg(long)]
        hex: Option<String>,

        #[arg(long)]
        json: bool,

        /// Rows to print (hexes, or messages with --hex)
        #[arg(long, default_value_t = 25)]
        limit: usize,
    },

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCmd {
    /// Validate a config file and exit
    Check {
        #[arg(default_value = DEFAULT_CONFIG)]
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        default_log_format()
    };
    init_logging(format);

    if let Err(e) = dispatch(cli.command) {
        tracing::error!(error = %e, "collate failed");
        eprintln!("collate: {e:#}");
        std::process::exit(1);
    }
}

fn dispatch(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Run {
            log_file,
            config,
            hex,
            json,
            poll_interval_ms,
        } => {
            let cfg = match &config {
                // An explicit path must exist.
                Some(path) => load_config(path)?,
                None => load_config_or_default(Path::new(DEFAULT_CONFIG))?,
            };

            let opts = watch_options(&cfg, log_file, hex, json, poll_interval_ms)?;
            run_watch(opts)
        }

        Command::Scan {
            log_file,
            hex,
            json,
            limit,
        } => {
            let hex = hex.map(|h| h.to_ascii_uppercase());
            cli::scan::run_scan(&log_file, hex.as_deref(), json, limit)
        }

        Command::Config {
            cmd: ConfigCmd::Check { path },
        } => cli::config::check(&path),
    }
}

fn watch_options(
    cfg: &CollateConfig,
    log_file: Option<PathBuf>,
    hex: Option<String>,
    json: bool,
    poll_interval_ms: Option<u64>,
) -> anyhow::Result<WatchOptions> {
    let poll_interval = match poll_interval_ms {
        Some(0) => anyhow::bail!("--poll-interval-ms must be greater than zero"),
        Some(ms) => Duration::from_millis(ms),
        None => cfg.tail.poll_interval(),
    };

    Ok(WatchOptions {
        log_file: resolve_log_file(cfg, log_file)?,
        poll_interval,
        refresh: cfg.dashboard.refresh(),
        max_hexes: cfg.dashboard.max_hexes,
        max_messages: cfg.dashboard.max_messages,
        hex: hex.map(|h| h.to_ascii_uppercase()),
        output: if json {
            WatchOutput::Json
        } else {
            WatchOutput::Dashboard
        },
    })
}
