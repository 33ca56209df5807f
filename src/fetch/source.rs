//! Report Source Module
//!
//! Seam between the fetcher and the upstream finance report API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::cache::ReportKey;
use crate::error::{ReportError, Result};
use crate::models::Report;

/// Something that can produce a report for a key.
///
/// `Ok(None)` means the upstream answered without a usable report (a `null`
/// body or a non-success status); `Err` means the request itself failed.
#[async_trait]
pub trait ReportSource: Send + Sync {
    async fn request_report(&self, key: &ReportKey) -> Result<Option<Report>>;
}

// == HTTP Report Source ==
/// Fetches reports from the upstream API over HTTP.
#[derive(Debug, Clone)]
pub struct HttpReportSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpReportSource {
    /// Creates a source for `base_url` whose requests give up after `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ReportError::Internal(format!("HTTP client setup failed: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ReportSource for HttpReportSource {
    async fn request_report(&self, key: &ReportKey) -> Result<Option<Report>> {
        let url = format!("{}{}", self.base_url, crate::cache::DETAIL_PATH);
        debug!("Requesting {}{}", self.base_url, key.path());

        let response = self.client.get(url).query(&key.query()).send().await?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        if !status.is_success() {
            warn!("Upstream answered {} for {}", status, key);
            return Ok(None);
        }

        let report = response.json::<Option<Report>>().await?;
        Ok(report)
    }
}
