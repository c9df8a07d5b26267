//! Core portfolio logic module.
//!
//! Contains the visitor tracker, the stats reader and the contact-form
//! handling logic, together with the data model they persist.
//!
//! # Degraded Mode
//!
//! Every operation in this module keeps its contract when the backing store
//! is unavailable: `track_visit` reports `false` instead of erroring, the
//! stats reader serves a configured fallback constant, and typed errors
//! distinguish "store not configured" from "store operation failed" so
//! callers and tests can assert on the failure kind.

/// Error and status enumerations.
pub mod enums;

/// Implementation blocks for the tracker operations.
pub mod impls;

/// Data structures: tracker, visit events, aggregate stats, contacts.
pub mod structs;

#[cfg(test)]
mod tests;
