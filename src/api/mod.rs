//! JSON API module.
//!
//! Endpoints for health checks, aggregate stats, the static skills and
//! projects listings, visitor tracking and contact submissions. The
//! Prometheus metrics endpoint lives here as well.
//!
//! Store failures on the tracker and reader paths are absorbed: those
//! endpoints always answer 200 with best-effort or fallback data.
//! Validation failures answer 400 and missing/invalid admin tokens 401,
//! both with an `{"error": ...}` body.

#[allow(clippy::module_inception)]
pub mod api;
pub mod api_contacts;
pub mod api_content;
pub mod api_stats;
pub mod api_visitors;
