//! # Portfolio-Actix
//!
//! A personal portfolio web server built with Rust and the Actix-web framework.
//!
//! ## Overview
//!
//! Portfolio-Actix serves a static portfolio page (bio, skills, projects,
//! certifications, contact details) together with a small JSON API. Every page
//! view is recorded as a visit event and counted in a persistent running total;
//! contact-form submissions are validated and stored. Persistence runs against
//! SQLite, MySQL or PostgreSQL, and the server keeps answering with fallback
//! values whenever the backing store is unreachable.
//!
//! ## Features
//!
//! - **Visitor Tracking**: per-request visit events with an atomically
//!   incremented running total, fire-and-forget on the page-render path
//! - **Degraded Mode**: stats reads fall back to a configured constant when
//!   the store is absent, empty or failing; requests are never blocked
//! - **Contact Forms**: validated submissions with server-assigned ids,
//!   listable through a bearer-token protected admin endpoint
//! - **Database Agnostic**: SQLite, MySQL and PostgreSQL support with
//!   customizable table and column names
//! - **Monitoring**: process counters as Prometheus metrics and periodic
//!   console statistics
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use portfolio_actix::config::structs::configuration::Configuration;
//! use portfolio_actix::portfolio::structs::portfolio_tracker::PortfolioTracker;
//!
//! let config = Arc::new(Configuration::load_from_file(false)?);
//! let tracker = Arc::new(PortfolioTracker::new(config, false).await);
//! ```
//!
//! ## Modules
//!
//! - [`api`] - JSON endpoints for stats, skills, projects, visitors and contacts
//! - [`common`] - Shared utilities, logging setup and boot helpers
//! - [`config`] - Configuration management and TOML parsing
//! - [`database`] - Multi-database backend support (SQLite, MySQL, PostgreSQL)
//! - [`http`] - HTML page serving and route registration
//! - [`portfolio`] - Visitor tracker, stats reader and contact handling
//! - [`stats`] - Process counters and monitoring
//! - [`structs`] - CLI argument parsing

/// JSON API module for stats, content listings, visitor tracking and contacts.
pub mod api;

/// Common utilities and shared functionality.
pub mod common;

/// Configuration management module.
pub mod config;

/// Database backend module with multi-database support.
pub mod database;

/// HTML page serving and HTTP service wiring.
pub mod http;

/// Core portfolio logic: visitor tracking, stats reading, contact handling.
pub mod portfolio;

/// Process statistics tracking and monitoring module.
pub mod stats;

/// CLI argument parsing.
pub mod structs;
