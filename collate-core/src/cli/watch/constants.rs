use std::time::Duration;

pub const LOOP_IDLE_SLEEP: Duration = Duration::from_millis(25);
pub const HIDE_CURSOR: &str = "\x1b[?25l";
pub const SHOW_CURSOR: &str = "\x1b[?25h";
