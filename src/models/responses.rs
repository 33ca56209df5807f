//! Response DTOs for the finance report API
//!
//! Defines the structure of outgoing HTTP response bodies.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::cache::CacheStats;
use crate::projection::ReportTables;
use crate::view::{ViewSettings, ViewState};

/// Response body for the detail view (GET /finance-report/detail)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailResponse {
    /// `empty` or `populated`
    pub state: &'static str,
    /// Canonical query string values, empty ones omitted
    pub query: BTreeMap<&'static str, String>,
    /// Period label, present once populated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_info: Option<String>,
    /// Projected tables; null when the report could not be fetched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tables: Option<Option<ReportTables>>,
}

impl DetailResponse {
    /// Creates a DetailResponse from the view settings and resulting state
    pub fn new(settings: &ViewSettings, state: ViewState) -> Self {
        let query = settings.canonical_query().into_iter().collect();
        match state {
            ViewState::Empty => Self {
                state: "empty",
                query,
                time_info: None,
                tables: None,
            },
            ViewState::Populated { time_info, tables } => Self {
                state: "populated",
                query,
                time_info: Some(time_info),
                tables: Some(tables),
            },
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Fetch attempts issued so far
    pub requests_issued: u64,
    /// Responses that arrived after a newer request was issued
    pub superseded_responses: u64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache and sequencer counters
    pub fn new(stats: &CacheStats, requests_issued: u64, superseded_responses: u64) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
            requests_issued,
            superseded_responses,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
