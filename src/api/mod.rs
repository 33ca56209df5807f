//! API Module
//!
//! HTTP handlers and routing for the finance report service.
//!
//! # Endpoints
//! - `GET /finance-report/detail` - Detail view for a report type and period
//! - `GET /stats` - Cache and request statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
