pub mod aggregator;
pub mod types;

pub use aggregator::{Aggregator, DEFAULT_CAPACITY_PER_SERVICE};
pub use types::{Sample, ServiceSummary, Window};
