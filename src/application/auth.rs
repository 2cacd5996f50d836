/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Session manager for the Cloud Foundry API
//!
//! Owns the credentials, the discovery document fetched at construction time
//! and the current UAA token. Sessions are replaced as a whole on every login
//! and dropped on logout.

use crate::application::config::Config;
use crate::constants::{APPLICATION_JSON, FORM_URLENCODED, USER_AGENT};
use crate::error::AppError;
use crate::model::requests::{Endpoint, PasswordGrant};
use crate::model::responses::ServerInfo;
use chrono::{DateTime, Utc};
use reqwest::Client;
use reqwest::header::{
    ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT as USER_AGENT_HEADER,
};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Token obtained from a successful login
#[derive(Clone)]
pub struct AuthSession {
    /// Token type, as sent back by UAA (usually `bearer`)
    pub token_type: String,
    /// Access token
    pub access_token: String,
    /// Full token response, returned verbatim to callers of `login`
    pub raw: Value,
    /// When the token was received
    pub created_at: DateTime<Utc>,
}

impl AuthSession {
    /// Parses a UAA token response
    ///
    /// # Errors
    /// * `AppError::Json` if `token_type` or `access_token` is missing
    pub fn from_token_response(raw: Value) -> Result<Self, AppError> {
        #[derive(Deserialize)]
        struct TokenFields {
            token_type: String,
            access_token: String,
        }

        let fields: TokenFields = serde_json::from_value(raw.clone())?;
        Ok(Self {
            token_type: fields.token_type,
            access_token: fields.access_token,
            raw,
            created_at: Utc::now(),
        })
    }

    /// Value of the `Authorization` header for authenticated requests
    #[must_use]
    pub fn authorization(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }
}

impl fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSession")
            .field("token_type", &self.token_type)
            .field("access_token", &"********")
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}

/// Headers sent with every request before authentication is added
#[must_use]
pub fn base_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
    headers.insert(USER_AGENT_HEADER, HeaderValue::from_static(USER_AGENT));
    headers
}

/// Authentication manager for the Cloud Foundry API
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    server_info: ServerInfo,
    session: RwLock<Option<AuthSession>>,
}

impl Auth {
    /// Creates a session manager and fetches the discovery document
    ///
    /// No login is performed.
    ///
    /// # Errors
    /// Fails if `/v2/info` is unreachable, not JSON, or lacks `token_endpoint`.
    pub async fn new(config: Arc<Config>, client: Client) -> Result<Self, AppError> {
        let server_info = Self::fetch_server_info(&client, &config).await?;
        debug!("Token endpoint discovered: {}", server_info.token_endpoint);

        Ok(Self {
            config,
            client,
            server_info,
            session: RwLock::new(None),
        })
    }

    /// Fetches `/v2/info` without authentication
    ///
    /// # Errors
    /// * `AppError::Network` if the request or the body read fails
    /// * `AppError::Json` if the body is not JSON
    /// * `AppError::MissingTokenEndpoint` if the document has no `token_endpoint`
    pub async fn fetch_server_info(client: &Client, config: &Config) -> Result<ServerInfo, AppError> {
        let url = config.rest_api.url(&Endpoint::Info.path());
        debug!("GET {}", url);

        let response = client.get(&url).headers(base_headers()).send().await?;
        debug!("Discovery response status: {}", response.status());

        let body: Value = serde_json::from_str(&response.text().await?)?;
        ServerInfo::from_value(body)
    }

    /// The discovery document fetched at construction time
    pub fn server_info(&self) -> &ServerInfo {
        &self.server_info
    }

    /// URL of the UAA token endpoint
    pub fn login_url(&self) -> String {
        self.server_info.login_url()
    }

    /// Logs in with the configured credentials using the password grant
    ///
    /// Any previous session is replaced by the new one.
    ///
    /// # Returns
    /// * `Ok(AuthSession)` - The new session; `raw` holds the token response
    /// * `Err(AppError::LoginError)` - Non-success status, with the response body
    /// * `Err(AppError::Network)` - Transport failure, including reading the body
    pub async fn login(&self) -> Result<AuthSession, AppError> {
        let url = self.login_url();
        let credentials = &self.config.credentials;
        let grant = PasswordGrant::new(&credentials.username, &credentials.password);

        let mut headers = base_headers();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&self.config.oauth.basic_authorization())?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_URLENCODED));

        info!("Logging in to {}", url);

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .form(&grant.form_fields())
            .send()
            .await?;

        let status = response.status();
        debug!("Login response status: {}", status);

        if !status.is_success() {
            let body = response.text().await?;
            return Err(AppError::LoginError(body));
        }

        let body: Value = serde_json::from_str(&response.text().await?)?;
        let session = AuthSession::from_token_response(body)?;

        let mut current = self.session.write().await;
        *current = Some(session.clone());

        info!("✓ Login successful");
        Ok(session)
    }

    /// Drops the current session, if any
    pub async fn logout(&self) {
        let mut session = self.session.write().await;
        if session.take().is_some() {
            info!("✓ Logged out");
        } else {
            debug!("Logout called without an active session");
        }
    }

    /// Whether a session is currently held
    pub async fn is_logged_in(&self) -> bool {
        self.session.read().await.is_some()
    }

    /// A copy of the current session
    pub async fn session(&self) -> Option<AuthSession> {
        self.session.read().await.clone()
    }

    /// Headers for an authenticated request
    ///
    /// # Errors
    /// * `AppError::NotLoggedIn` when no session is held
    /// * `AppError::InvalidHeader` when the token cannot be sent as a header
    pub async fn build_auth_headers(&self) -> Result<HeaderMap, AppError> {
        let session = self.session.read().await;
        let Some(session) = session.as_ref() else {
            return Err(AppError::NotLoggedIn);
        };

        let mut authorization = HeaderValue::from_str(&session.authorization())?;
        authorization.set_sensitive(true);

        let mut headers = base_headers();
        headers.insert(AUTHORIZATION, authorization);
        Ok(headers)
    }
}
