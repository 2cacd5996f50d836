/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::auth::AuthSession;
use crate::application::config::Config;
use crate::application::interfaces::{AppService, OrganizationService, SpaceService};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::Endpoint;
use crate::model::responses::ServerInfo;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Cloud Foundry client
///
/// Building the client fetches the discovery document; call [`Client::login`]
/// before any lookup. Lookups return the response body untouched.
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client and fetches `/v2/info`
    ///
    /// # Errors
    /// Fails if the discovery endpoint is unreachable or returns an unusable document.
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(config).await?);
        Ok(Self { http_client })
    }

    /// Creates a client from environment variables, see [`Config::new`]
    pub async fn from_env() -> Result<Self, AppError> {
        Self::new(Config::new()).await
    }

    /// Logs in with the configured credentials
    ///
    /// # Returns
    /// * `Ok(AuthSession)` - The new session; `raw` is the full token response
    /// * `Err(AppError::LoginError)` - The token endpoint rejected the credentials
    pub async fn login(&self) -> Result<AuthSession, AppError> {
        self.http_client.login().await
    }

    /// Forgets the current token. Never fails.
    pub async fn logout(&self) {
        self.http_client.logout().await
    }

    /// Whether a token is currently held
    pub async fn is_logged_in(&self) -> bool {
        self.http_client.auth().is_logged_in().await
    }

    /// The discovery document fetched when the client was built
    pub fn get_info(&self) -> &ServerInfo {
        self.http_client.auth().server_info()
    }

    /// The underlying dispatcher
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    async fn fetch(&self, endpoint: Endpoint<'_>) -> Result<Value, AppError> {
        debug!("Fetching {}", endpoint);
        self.http_client.get(&endpoint.path()).await
    }
}

#[async_trait]
impl OrganizationService for Client {
    async fn get_organizations(&self) -> Result<Value, AppError> {
        info!("Getting organizations");
        self.fetch(Endpoint::Organizations).await
    }

    async fn get_organization_summary(&self, guid: &str) -> Result<Value, AppError> {
        info!("Getting organization summary: {}", guid);
        self.fetch(Endpoint::OrganizationSummary(guid)).await
    }

    async fn get_organization_spaces(&self, guid: &str) -> Result<Value, AppError> {
        info!("Getting organization spaces: {}", guid);
        self.fetch(Endpoint::OrganizationSpaces(guid)).await
    }

    async fn get_organization_services(&self, guid: &str) -> Result<Value, AppError> {
        info!("Getting organization services: {}", guid);
        self.fetch(Endpoint::OrganizationServices(guid)).await
    }

    async fn get_organization_space_quota_definitions(
        &self,
        guid: &str,
    ) -> Result<Value, AppError> {
        info!("Getting space quota definitions: {}", guid);
        self.fetch(Endpoint::OrganizationSpaceQuotaDefinitions(guid))
            .await
    }
}

#[async_trait]
impl SpaceService for Client {
    async fn get_apps_in_space(&self, guid: &str) -> Result<Value, AppError> {
        info!("Getting apps in space: {}", guid);
        self.fetch(Endpoint::SpaceApps(guid)).await
    }

    async fn get_space_summary(&self, guid: &str) -> Result<Value, AppError> {
        info!("Getting space summary: {}", guid);
        self.fetch(Endpoint::SpaceSummary(guid)).await
    }
}

#[async_trait]
impl AppService for Client {
    async fn get_app_service_bindings(&self, guid: &str) -> Result<Value, AppError> {
        info!("Getting service bindings for app: {}", guid);
        self.fetch(Endpoint::AppServiceBindings(guid)).await
    }
}
