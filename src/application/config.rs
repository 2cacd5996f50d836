use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_OAUTH_CLIENT_ID, DEFAULT_OAUTH_CLIENT_SECRET, DEFAULT_REST_TIMEOUT,
};
use crate::utils::config::{get_env_or_default, get_env_string_or_default};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

#[derive(Serialize, Deserialize, Clone, PartialEq)]
/// User credentials for the password grant. Fixed for the lifetime of a client.
pub struct Credentials {
    /// Cloud Foundry username (usually an email address)
    pub username: String,
    /// Cloud Foundry password
    pub password: String,
}

impl Credentials {
    /// Creates a new set of credentials
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the Cloud Foundry API (e.g. `https://api.run.pivotal.io`)
    pub base_url: String,
    /// Timeout in seconds for every request
    pub timeout: u64,
}

impl RestApiConfig {
    /// Joins `path` onto the base URL with exactly one slash between them
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// OAuth client presented to UAA during login.
///
/// This is a platform-wide client registration, not a per-user secret.
pub struct OAuthClientConfig {
    /// OAuth client id
    pub client_id: String,
    /// OAuth client secret
    pub client_secret: String,
}

impl OAuthClientConfig {
    /// Value of the `Authorization` header sent with the login request
    ///
    /// With the default `cf` client this is always `Basic Y2Y6`.
    #[must_use]
    pub fn basic_authorization(&self) -> String {
        let pair = format!("{}:{}", self.client_id, self.client_secret);
        format!("Basic {}", STANDARD.encode(pair))
    }
}

impl Default for OAuthClientConfig {
    fn default() -> Self {
        Self {
            client_id: DEFAULT_OAUTH_CLIENT_ID.to_string(),
            client_secret: DEFAULT_OAUTH_CLIENT_SECRET.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the Cloud Foundry client
pub struct Config {
    /// User credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// OAuth client used for the login handshake
    pub oauth: OAuthClientConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from environment variables (and `.env` if present)
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `CF_USERNAME` | empty |
    /// | `CF_PASSWORD` | empty |
    /// | `CF_API_URL` | `https://api.run.pivotal.io` |
    /// | `CF_REST_TIMEOUT` | `30` |
    /// | `CF_OAUTH_CLIENT_ID` | `cf` |
    /// | `CF_OAUTH_CLIENT_SECRET` | empty |
    pub fn new() -> Self {
        if dotenv().is_err() {
            debug!("No .env file found, reading configuration from the environment only");
        }

        let username = get_env_string_or_default("CF_USERNAME", "");
        let password = get_env_string_or_default("CF_PASSWORD", "");

        if username.is_empty() {
            warn!("CF_USERNAME not found in environment variables or .env file");
        }
        if password.is_empty() {
            warn!("CF_PASSWORD not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials { username, password },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("CF_API_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default("CF_REST_TIMEOUT", DEFAULT_REST_TIMEOUT),
            },
            oauth: OAuthClientConfig {
                client_id: get_env_or_default(
                    "CF_OAUTH_CLIENT_ID",
                    String::from(DEFAULT_OAUTH_CLIENT_ID),
                ),
                client_secret: get_env_string_or_default(
                    "CF_OAUTH_CLIENT_SECRET",
                    DEFAULT_OAUTH_CLIENT_SECRET,
                ),
            },
        }
    }

    /// Creates a configuration in code, with default timeout and OAuth client
    ///
    /// # Example
    /// ```
    /// use cf_client::config::Config;
    ///
    /// let config = Config::with_credentials("https://api.example.com/", "user", "secret");
    /// assert_eq!(config.rest_api.url("/v2/info"), "https://api.example.com/v2/info");
    /// ```
    pub fn with_credentials(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Config {
            credentials: Credentials::new(username, password),
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: DEFAULT_REST_TIMEOUT,
            },
            oauth: OAuthClientConfig::default(),
        }
    }
}
