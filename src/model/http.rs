/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

use crate::application::auth::{Auth, AuthSession};
use crate::application::config::Config;
use crate::constants::{INVALID_AUTH_TOKEN_CODE, MAX_TOKEN_RETRIES, USER_AGENT};
use crate::error::AppError;
use reqwest::Client as HttpInternalClient;
use reqwest::Method;
use reqwest::header::HeaderMap;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Returns `true` when the platform rejected the bearer token.
///
/// Cloud Foundry signals this inside the body (`error_code`), often with a
/// success status, so the HTTP status is not consulted.
#[must_use]
pub fn is_invalid_auth_token(body: &Value) -> bool {
    body.get("error_code").and_then(Value::as_str) == Some(INVALID_AUTH_TOKEN_CODE)
}

/// Request dispatcher for authenticated GETs
///
/// Every request asks the session manager for headers. A body carrying the
/// invalid-token error code triggers one re-login and one retry.
pub struct HttpClient {
    auth: Arc<Auth>,
    http_client: HttpInternalClient,
    config: Arc<Config>,
}

impl HttpClient {
    /// Creates the dispatcher and its session manager
    ///
    /// Fetches `/v2/info` but does not log in.
    ///
    /// # Errors
    /// Fails if the HTTP client cannot be built or discovery fails.
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);

        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        let auth = Arc::new(Auth::new(config.clone(), http_client.clone()).await?);

        Ok(Self {
            auth,
            http_client,
            config,
        })
    }

    /// The session manager
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Logs in, replacing any existing session
    pub async fn login(&self) -> Result<AuthSession, AppError> {
        self.auth.login().await
    }

    /// Clears the session
    pub async fn logout(&self) {
        self.auth.logout().await
    }

    /// GET `path` relative to the configured API base URL
    pub async fn get(&self, path: &str) -> Result<Value, AppError> {
        let url = self.config.rest_api.url(path);
        self.dispatch(Method::GET, &url).await
    }

    /// Executes one authenticated request against an absolute URL
    ///
    /// Only GET is supported. If the body reports an invalid token, logs in
    /// again and repeats the request once; a second rejection is returned to
    /// the caller unchanged.
    ///
    /// # Errors
    /// * `AppError::UnsupportedMethod` for any method other than GET, before any I/O
    /// * `AppError::NotLoggedIn` if there is no session
    /// * `AppError::LoginError` if the re-login fails
    /// * `AppError::Network` / `AppError::Json` from the transport or body parsing
    pub async fn dispatch(&self, method: Method, url: &str) -> Result<Value, AppError> {
        if method != Method::GET {
            return Err(AppError::UnsupportedMethod(method));
        }

        let mut retries = 0;
        loop {
            let headers = self.auth.build_auth_headers().await?;
            let body = self.send_get(url, headers).await?;

            if !is_invalid_auth_token(&body) {
                return Ok(body);
            }
            if retries >= MAX_TOKEN_RETRIES {
                debug!("Token still rejected after re-login, returning body for {}", url);
                return Ok(body);
            }

            retries += 1;
            warn!("Auth token rejected, logging in again and retrying {}", url);
            self.auth.login().await?;
        }
    }

    async fn send_get(&self, url: &str, headers: HeaderMap) -> Result<Value, AppError> {
        debug!("GET {}", url);
        let response = self.http_client.get(url).headers(headers).send().await?;
        debug!("Response status: {}", response.status());
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}
