pub mod log_file;
pub mod tracing;

pub use log_file::{GrowingLog, fixture_path, wait_for};
pub use tracing::{CapturedEvent, init_test_tracing};
