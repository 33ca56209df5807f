//! Request DTOs for the finance report API
//!
//! Defines the structure of incoming query strings.

use serde::Deserialize;

/// Query string of the detail view (GET /finance-report/detail)
///
/// # Fields
/// - `type`: Report type, e.g. `month` or `year`
/// - `time`: Report period, e.g. `2024_05`
///
/// Both are optional; a missing value selects the empty view.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetailQuery {
    /// The report type
    #[serde(default, rename = "type")]
    pub report_type: Option<String>,
    /// The report period
    #[serde(default)]
    pub time: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_query_deserialize() {
        let json = r#"{"type": "month", "time": "2024_05"}"#;
        let query: DetailQuery = serde_json::from_str(json).unwrap();
        assert_eq!(query.report_type.as_deref(), Some("month"));
        assert_eq!(query.time.as_deref(), Some("2024_05"));
    }

    #[test]
    fn test_detail_query_missing_values() {
        let query: DetailQuery = serde_json::from_str("{}").unwrap();
        assert!(query.report_type.is_none());
        assert!(query.time.is_none());
    }
}
