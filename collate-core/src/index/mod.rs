mod aggregation;
mod snapshot;
mod stats;


pub use aggregation::AggregationIndex;
pub use snapshot::{HexDetail, HexSummary, IndexSnapshot};
pub use stats::{Direction, HexStats};
