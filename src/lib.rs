/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! # Cloud Foundry Client
//!
//! A read-only client for the Cloud Foundry v2 management API.
//!
//! The client discovers the UAA token endpoint from `/v2/info` when it is
//! built, logs in with the password grant, and then issues authenticated
//! lookups for organizations, spaces, apps and service bindings. Response
//! bodies are returned untouched as [`serde_json::Value`].
//!
//! When the platform reports an invalid or expired token (the
//! `CF-InvalidAuthToken` error code inside the response body) the request is
//! retried exactly once after a fresh login.
//!
//! ## Example
//!
//! ```ignore
//! use cf_client::prelude::*;
//!
//! let config = Config::with_credentials("https://api.example.com", "user", "pass");
//! let client = Client::new(config).await?;
//! client.login().await?;
//!
//! let organizations = client.get_organizations().await?;
//! ```

/// Application layer: configuration, session manager and endpoint services
pub mod application;

/// Global constants
pub mod constants;

/// Error types
pub mod error;

/// Wire models and the request dispatcher
pub mod model;

/// Commonly used re-exports
pub mod prelude;

/// Environment and logging helpers
pub mod utils;

pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
