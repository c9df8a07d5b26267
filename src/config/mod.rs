//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the server
//! configuration from TOML files.
//!
//! # Configuration Structure
//!
//! The main configuration file (`config.toml`) contains sections for:
//! - **http_server**: listen address and Actix worker tuning
//! - **api**: admin token, listing limits and the visitor-count fallback
//! - **database**: store engine, DSL and operation timeout
//! - **database_structure**: customizable table/column names
//! - **profile / skills / projects**: the portfolio content itself
//!
//! # Features
//!
//! - TOML file parsing with typed errors
//! - Default value generation via `Configuration::init()`
//! - Customizable database table/column names

/// Configuration error enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
