//! API Handlers
//!
//! HTTP request handlers for each finance report endpoint.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::cache::SystemClock;
use crate::config::Config;
use crate::error::Result;
use crate::fetch::{ExpirationPolicy, HttpReportSource, ReportFetcher, ReportSource};
use crate::models::{DetailQuery, DetailResponse, HealthResponse, StatsResponse};
use crate::view::{ViewSettings, ViewState};

/// Application state shared across all handlers.
///
/// Owns the report fetcher, and through it the report cache.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<ReportFetcher>,
}

impl AppState {
    /// Creates a new AppState around the given fetcher.
    pub fn new(fetcher: ReportFetcher) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
        }
    }

    /// Creates a new AppState reading reports from `source`.
    pub fn with_source(source: Arc<dyn ReportSource>, policy: ExpirationPolicy) -> Self {
        Self::new(ReportFetcher::new(source, Arc::new(SystemClock), policy))
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the HTTP report source and the cache expiration policy from the Config.
    pub fn from_config(config: &Config) -> Result<Self> {
        let source = HttpReportSource::new(
            &config.api_base_url,
            std::time::Duration::from_millis(config.request_timeout_ms),
        )?;
        Ok(Self::with_source(
            Arc::new(source),
            ExpirationPolicy::from_config(config),
        ))
    }
}

/// Handler for GET /finance-report/detail
///
/// Builds the detail view for the `type` and `time` query parameters.
/// A missing parameter yields the empty view, not an error.
pub async fn detail_handler(
    State(state): State<AppState>,
    Query(query): Query<DetailQuery>,
) -> Json<DetailResponse> {
    let settings = ViewSettings::from_query(&query);
    let view = ViewState::load(&settings, &state.fetcher).await;

    Json(DetailResponse::new(&settings, view))
}

/// Handler for GET /stats
///
/// Returns report cache and request counters.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.fetcher.cache_stats().await;
    let sequencer = state.fetcher.sequencer();

    Json(StatsResponse::new(
        &stats,
        sequencer.current(),
        sequencer.superseded(),
    ))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ReportKey;
    use crate::models::{Report, ReportDetail};
    use async_trait::async_trait;
    use chrono::Duration;

    struct StaticSource(Option<Report>);

    #[async_trait]
    impl ReportSource for StaticSource {
        async fn request_report(&self, _key: &ReportKey) -> Result<Option<Report>> {
            Ok(self.0.clone())
        }
    }

    fn state_with(report: Option<Report>) -> AppState {
        AppState::with_source(
            Arc::new(StaticSource(report)),
            ExpirationPolicy::Fixed(Duration::seconds(300)),
        )
    }

    fn query(report_type: Option<&str>, time: Option<&str>) -> Query<DetailQuery> {
        Query(DetailQuery {
            report_type: report_type.map(str::to_string),
            time: time.map(str::to_string),
        })
    }

    #[tokio::test]
    async fn test_detail_handler_populated() {
        let report = Report {
            report_detail: Some(vec![ReportDetail {
                domain: "dev".to_string(),
                name: "Proposal A".to_string(),
                expense: 1000.0,
            }]),
            domain_list: Some(vec!["dev".to_string()]),
            proposal_total: 1000.0,
            ..Report::default()
        };
        let state = state_with(Some(report));

        let response = detail_handler(State(state), query(Some("month"), Some("2024_05"))).await;

        assert_eq!(response.state, "populated");
        assert_eq!(response.time_info.as_deref(), Some("2024-05"));
        let tables = response.tables.clone().flatten().unwrap();
        assert_eq!(tables.proposal_report.rows[0][0], "$1,000.00");
    }

    #[tokio::test]
    async fn test_detail_handler_empty() {
        let state = state_with(Some(Report::default()));

        let response = detail_handler(State(state.clone()), query(None, Some("2024_05"))).await;

        assert_eq!(response.state, "empty");
        assert!(response.tables.is_none());
        assert_eq!(state.fetcher.sequencer().current(), 0);
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = state_with(Some(Report::default()));

        detail_handler(State(state.clone()), query(Some("year"), Some("2023"))).await;
        detail_handler(State(state.clone()), query(Some("year"), Some("2023"))).await;

        let response = stats_handler(State(state)).await;
        assert_eq!(response.hits, 1);
        assert_eq!(response.misses, 1);
        assert_eq!(response.total_entries, 1);
        assert_eq!(response.requests_issued, 2);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }

    #[test]
    fn test_state_from_config() {
        assert!(AppState::from_config(&Config::default()).is_ok());
    }
}
