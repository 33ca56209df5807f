//! Detail View Module
//!
//! Query-string settings and the two-state detail view built from them.

use crate::cache::ReportKey;
use crate::fetch::ReportFetcher;
use crate::models::DetailQuery;
use crate::projection::ReportTables;

// == View Settings ==
/// The `type` and `time` parameters of the detail view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewSettings {
    pub report_type: String,
    pub time: String,
}

impl ViewSettings {
    /// Parameter names recognized in the query string, in serialization order.
    pub const KEYS: [&'static str; 2] = ["type", "time"];

    pub fn new(report_type: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            report_type: report_type.into(),
            time: time.into(),
        }
    }

    /// Reads settings from a parsed query string; missing values become empty.
    pub fn from_query(query: &DetailQuery) -> Self {
        Self {
            report_type: query.report_type.clone().unwrap_or_default(),
            time: query.time.clone().unwrap_or_default(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.report_type.is_empty() && !self.time.is_empty()
    }

    pub fn key(&self) -> ReportKey {
        ReportKey::new(self.report_type.as_str(), self.time.as_str())
    }

    /// Period label shown above the tables: the first `_` becomes `-`.
    pub fn time_info(&self) -> String {
        self.time.replacen('_', "-", 1)
    }

    /// Pairs to write back to the address bar.
    ///
    /// Values that are empty or equal to the default are omitted.
    pub fn canonical_query(&self) -> Vec<(&'static str, String)> {
        let defaults = Self::default();
        [
            (Self::KEYS[0], &self.report_type, &defaults.report_type),
            (Self::KEYS[1], &self.time, &defaults.time),
        ]
        .into_iter()
        .filter(|(_, value, default)| !value.is_empty() && value != default)
        .map(|(key, value, _)| (key, value.clone()))
        .collect()
    }
}

// == View State ==
/// State of the detail view after initialization.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// A parameter is missing; no report panel is shown
    Empty,
    /// Both parameters are present and a fetch was attempted.
    ///
    /// `tables` is `None` when the fetch produced no report.
    Populated {
        time_info: String,
        tables: Option<ReportTables>,
    },
}

impl ViewState {
    /// Builds the view for `settings`, fetching the report when both
    /// parameters are present.
    pub async fn load(settings: &ViewSettings, fetcher: &ReportFetcher) -> Self {
        if !settings.is_complete() {
            return ViewState::Empty;
        }

        let tables = fetcher
            .fetch(&settings.key())
            .await
            .map(|report| ReportTables::project(&report));

        ViewState::Populated {
            time_info: settings.time_info(),
            tables,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ViewState::Empty)
    }
}
