//! Database backend module with multi-database support.
//!
//! Provides a unified interface for SQLite, MySQL and PostgreSQL backends
//! with support for custom table and column names. The store is used for
//! three things only: appending visit events, upserting the singleton
//! visitor counter, and appending/listing contact submissions.

pub mod enums;
pub mod impls;
pub mod structs;
