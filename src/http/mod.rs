//! HTML page serving and HTTP service wiring.
//!
//! One Actix-web listener serves both the rendered portfolio pages and the
//! JSON API; all routes are registered here.

#[allow(clippy::module_inception)]
pub mod http;

/// Static page rendering from the configured portfolio content.
pub mod pages;

/// Shared request-handler state.
pub mod structs;
