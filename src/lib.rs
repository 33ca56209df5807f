//! Finance Report - detail view service for a blockchain explorer
//!
//! Fetches pre-aggregated finance reports, caches them for a bounded time
//! and projects each one into the tables of the finance detail view.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
pub mod projection;
pub mod sequencer;
pub mod view;

pub use api::AppState;
pub use config::Config;
pub use error::{ReportError, Result};
