//! Report Key Module
//!
//! Identifies one upstream report by its (type, time) pair.

use std::fmt;

/// Path of the upstream finance report detail endpoint.
pub const DETAIL_PATH: &str = "/api/finance-report/detail";

// == Report Key ==
/// Cache key for a finance report.
///
/// The pair is kept structured, so two distinct pairs can never collide
/// the way concatenated strings could.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReportKey {
    report_type: String,
    time: String,
}

impl ReportKey {
    /// Creates a key for the given report type and period.
    pub fn new(report_type: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            report_type: report_type.into(),
            time: time.into(),
        }
    }

    pub fn report_type(&self) -> &str {
        &self.report_type
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    /// True when both parts are present.
    pub fn is_complete(&self) -> bool {
        !self.report_type.is_empty() && !self.time.is_empty()
    }

    /// Query parameters of the upstream request.
    pub fn query(&self) -> [(&'static str, &str); 2] {
        [("type", &self.report_type), ("time", &self.time)]
    }

    /// URL-shaped form of the key, relative to the API base URL.
    pub fn path(&self) -> String {
        format!(
            "{}?type={}&time={}",
            DETAIL_PATH, self.report_type, self.time
        )
    }
}

impl fmt::Display for ReportKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
