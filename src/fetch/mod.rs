//! Fetch Module
//!
//! Obtains finance reports, serving from the cache while it is valid.

mod fetcher;
mod source;

pub use fetcher::{ExpirationPolicy, ReportFetcher};
pub use source::{HttpReportSource, ReportSource};
