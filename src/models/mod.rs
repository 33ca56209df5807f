//! Request, response and payload models
//!
//! This module defines the DTOs used for serializing/deserializing HTTP
//! request and response bodies, plus the upstream report payload.

pub mod report;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use report::{Report, ReportDetail, TreasurySummary};
pub use requests::DetailQuery;
pub use responses::{DetailResponse, HealthResponse, StatsResponse};
