//! Cache Module
//!
//! Time-bounded in-memory cache of upstream finance reports.

mod clock;
mod entry;
mod key;
mod stats;
mod store;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use key::{ReportKey, DETAIL_PATH};
pub use stats::CacheStats;
pub use store::ReportCache;

// == Public Constants ==
/// Report lifetime used when none is configured, in seconds
pub const DEFAULT_REPORT_TTL_SECS: u64 = 300;
