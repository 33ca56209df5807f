//! Report Fetcher Module
//!
//! Resolves a report from the cache or the upstream source.
//!
//! The cache lock is never held across the upstream await, so two fetches
//! for the same cold key both reach the upstream, and responses land in the
//! cache in completion order. A response that resolves after a newer fetch
//! was issued is logged but still cached and returned.

use std::sync::Arc;

use chrono::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::cache::{CacheStats, Clock, ReportCache, ReportKey};
use crate::fetch::ReportSource;
use crate::models::Report;
use crate::sequencer::RequestSequencer;

// == Expiration Policy ==
/// How long a freshly fetched report stays in the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpirationPolicy {
    /// Every report lives for the same duration
    Fixed(Duration),
    /// A report's own `expiration` wins; the duration covers reports without one
    PayloadOrFixed(Duration),
}

impl ExpirationPolicy {
    pub fn from_config(config: &crate::config::Config) -> Self {
        let ttl = i64::try_from(config.report_cache_ttl)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX);
        if config.honor_payload_expiration {
            ExpirationPolicy::PayloadOrFixed(ttl)
        } else {
            ExpirationPolicy::Fixed(ttl)
        }
    }
}

// == Report Fetcher ==
/// Composes the report cache, the request sequencer and a report source.
pub struct ReportFetcher {
    cache: RwLock<ReportCache>,
    sequencer: RequestSequencer,
    source: Arc<dyn ReportSource>,
    policy: ExpirationPolicy,
}

impl ReportFetcher {
    pub fn new(source: Arc<dyn ReportSource>, clock: Arc<dyn Clock>, policy: ExpirationPolicy) -> Self {
        Self {
            cache: RwLock::new(ReportCache::new(clock)),
            sequencer: RequestSequencer::new(),
            source,
            policy,
        }
    }

    // == Fetch ==
    /// Returns the report for `key`, or `None` when none could be obtained.
    ///
    /// Incomplete keys are rejected before a token is issued or the cache is
    /// touched. Upstream failures are logged and yield `None`; nothing is
    /// cached for them.
    pub async fn fetch(&self, key: &ReportKey) -> Option<Arc<Report>> {
        if !key.is_complete() {
            debug!("Skipping fetch for incomplete key {}", key);
            return None;
        }

        let token = self.sequencer.next();

        {
            let mut cache = self.cache.write().await;
            if let Some(report) = cache.get(key) {
                debug!("Cache hit for {}", key);
                return Some(report);
            }
        }
        debug!("Cache miss for {}, requesting upstream", key);

        let report = match self.source.request_report(key).await {
            Ok(Some(report)) => Arc::new(report),
            Ok(None) => {
                warn!("Upstream returned no report for {}", key);
                return None;
            }
            Err(e) => {
                warn!("Fetching {} failed: {}", key, e);
                return None;
            }
        };

        self.store(key.clone(), Arc::clone(&report)).await;

        if !self.sequencer.is_current(token) {
            self.sequencer.record_superseded();
            info!(
                "Response for {} (request #{}) arrived after a newer request was issued",
                key,
                token.value()
            );
        }

        Some(report)
    }

    async fn store(&self, key: ReportKey, report: Arc<Report>) {
        let mut cache = self.cache.write().await;
        match (self.policy, report.expiration) {
            (ExpirationPolicy::PayloadOrFixed(_), Some(expires_at)) => {
                cache.put_until(key, report, expires_at)
            }
            (ExpirationPolicy::Fixed(ttl), _) | (ExpirationPolicy::PayloadOrFixed(ttl), None) => {
                cache.put(key, report, ttl)
            }
        }
    }

    /// Returns true if a valid report for `key` is cached.
    pub async fn is_cached(&self, key: &ReportKey) -> bool {
        self.cache.read().await.has(key)
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }

    pub fn sequencer(&self) -> &RequestSequencer {
        &self.sequencer
    }
}
