//! Process statistics tracking and monitoring module.
//!
//! Atomic counters for everything the server handles: page renders, API
//! calls, tracked and dropped visits, accepted and rejected contact
//! submissions, authorization failures and unknown routes.
//!
//! # Thread Safety
//!
//! All statistics are stored as atomic integers, allowing safe concurrent
//! updates from multiple worker threads without locking overhead.
//!
//! # Monitoring Integration
//!
//! - Prometheus format via the `/metrics` endpoint
//! - Periodic console logging from the main loop

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters and snapshots).
pub mod structs;
