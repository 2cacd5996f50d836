use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for app lookups
#[async_trait]
pub trait AppService: Send + Sync {
    /// Lists the service bindings of an app
    ///
    /// # Arguments
    /// * `guid` - GUID of the app
    async fn get_app_service_bindings(&self, guid: &str) -> Result<Value, AppError>;
}
