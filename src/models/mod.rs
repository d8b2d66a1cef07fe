mod exclude_set;
mod scan_report;
mod token_count_map;

pub use exclude_set::ExcludeSet;
pub use scan_report::{ScanOptions, ScanReport};
pub use token_count_map::TokenCountMap;
