//! Request Sequencer Module
//!
//! Hands out increasing tokens so a fetch can tell, once its await
//! resolves, whether a newer fetch was issued in the meantime.
//!
//! Staleness is only observed. Superseded responses are still cached and
//! still returned to their caller.

use std::sync::atomic::{AtomicU64, Ordering};

// == Request Token ==
/// Identifies one fetch attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

// == Request Sequencer ==
/// Monotonic counter of issued fetch attempts.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    counter: AtomicU64,
    superseded: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next token. Tokens are never reused and never decrease.
    pub fn next(&self) -> RequestToken {
        RequestToken(self.counter.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// True iff no token has been issued after `token`.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.counter.load(Ordering::SeqCst) == token.0
    }

    /// Number of tokens issued so far.
    pub fn current(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }

    /// Counts a response that resolved after a newer request was issued.
    pub fn record_superseded(&self) {
        self.superseded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn superseded(&self) -> u64 {
        self.superseded.load(Ordering::Relaxed)
    }
}
