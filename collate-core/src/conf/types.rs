use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CollateConfig {
    #[serde(default)]
    pub tail: TailConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TailConfig {
    /// Decoder output to follow. May be given on the command line instead.
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for TailConfig {
    fn default() -> Self {
        Self {
            log_file: None,
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl TailConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    #[serde(default = "default_refresh_ms")]
    pub refresh_ms: u64,

    /// Rows in the hex table.
    #[serde(default = "default_max_hexes")]
    pub max_hexes: usize,

    /// Messages shown when focused on a single hex.
    #[serde(default = "default_max_messages")]
    pub max_messages: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            refresh_ms: default_refresh_ms(),
            max_hexes: default_max_hexes(),
            max_messages: default_max_messages(),
        }
    }
}

impl DashboardConfig {
    pub fn refresh(&self) -> Duration {
        Duration::from_millis(self.refresh_ms)
    }
}

fn default_poll_interval_ms() -> u64 {
    100
}

fn default_refresh_ms() -> u64 {
    1000
}

fn default_max_hexes() -> usize {
    25
}

fn default_max_messages() -> usize {
    10
}
