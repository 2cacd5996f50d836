/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! # CF Client Prelude
//!
//! Brings the client, its configuration, the service traits and the error
//! type into scope with a single import.
//!
//! ```rust
//! use cf_client::prelude::*;
//!
//! let config = Config::with_credentials("https://api.example.com", "user", "pass");
//! assert_eq!(config.oauth.basic_authorization(), "Basic Y2Y6");
//! ```

// ============================================================================
// CONFIGURATION
// ============================================================================

pub use crate::config::{Config, Credentials, OAuthClientConfig, RestApiConfig};
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

pub use crate::error::AppError;

// ============================================================================
// SESSION AND DISPATCH
// ============================================================================

pub use crate::application::auth::{Auth, AuthSession};
pub use crate::model::http::{HttpClient, is_invalid_auth_token};

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

pub use crate::application::client::Client;
pub use crate::application::interfaces::{AppService, OrganizationService, SpaceService};

// ============================================================================
// MODELS
// ============================================================================

pub use crate::model::requests::{Endpoint, PasswordGrant};
pub use crate::model::responses::ServerInfo;

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::utils::logger::setup_logger;
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use reqwest::Method;
pub use serde_json::Value;
pub use tracing::{debug, info, warn};
