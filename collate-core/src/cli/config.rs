use crate::conf::{ConfigError, load_config};
use owo_colors::OwoColorize;
use std::path::Path;

const EXPECTED_LAYOUT: &str = "Expected layout:

tail {
  log_file         = \"/var/log/dumpvdl2.log\"
  poll_interval_ms = 100
}

dashboard {
  refresh_ms   = 1000
  max_hexes    = 25
  max_messages = 10
}";

pub fn check(path: &Path) -> anyhow::Result<()> {
    match load_config(path) {
        Ok(cfg) => {
            println!("✔ Config loaded successfully");
            match &cfg.tail.log_file {
                Some(file) => println!("✔ log file: {}", file.display()),
                None => println!("✔ log file: <from command line>"),
            }
            println!("✔ poll interval: {}ms", cfg.tail.poll_interval_ms);
            println!(
                "✔ dashboard: refresh {}ms, {} hexes, {} messages",
                cfg.dashboard.refresh_ms, cfg.dashboard.max_hexes, cfg.dashboard.max_messages
            );
            Ok(())
        }
        Err(err) => {
            print_config_error(&err);
            std::process::exit(1);
        }
    }
}

fn print_config_error(err: &ConfigError) {
    eprintln!("{}: {}", "error".red().bold(), err);
    if let Some(hint) = config_error_hint(err) {
        eprintln!();
        eprintln!("{}", hint);
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::Parse { .. } => Some(EXPECTED_LAYOUT),
        ConfigError::MissingLogFile => {
            Some("Pass the log path as an argument or set tail.log_file.")
        }
        _ => None,
    }
}
