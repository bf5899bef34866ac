mod fixtures;
pub mod tracing;

pub use fixtures::{LogBuilder, fixture_path, reference_day, write_log};
pub use tracing::{CapturedEvent, capture_events};
