//! Cache Entry Module
//!
//! Defines the structure for individual cached reports with an expiry.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::models::Report;

// == Cache Entry ==
/// A cached report with its metadata.
///
/// The payload is shared read-only; callers only ever see it through an `Arc`.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored report
    pub payload: Arc<Report>,
    /// When the entry was stored
    pub created_at: DateTime<Utc>,
    /// When the entry stops being served
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stored at `now` that lives for `ttl`.
    pub fn new(payload: Arc<Report>, now: DateTime<Utc>, ttl: Duration) -> Self {
        let expires_at = now.checked_add_signed(ttl).unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self::until(payload, now, expires_at)
    }

    /// Creates a new entry stored at `now` that lives until `expires_at`.
    pub fn until(payload: Arc<Report>, now: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            payload,
            created_at: now,
            expires_at,
        }
    }

    // == Is Valid ==
    /// Checks whether the entry may still be served at `now`.
    ///
    /// Boundary condition: the entry is valid only while `now` is strictly
    /// before the expiration time.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    // == Time To Live ==
    /// Returns the remaining lifetime at `now`, or zero once expired.
    pub fn ttl_remaining(&self, now: DateTime<Utc>) -> Duration {
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}
