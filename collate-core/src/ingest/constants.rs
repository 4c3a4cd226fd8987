use std::time::Duration;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);
pub const TAILER_THREAD_NAME: &str = "collate-tailer";
