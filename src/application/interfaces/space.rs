use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for space lookups
#[async_trait]
pub trait SpaceService: Send + Sync {
    /// Lists the apps deployed in a space
    ///
    /// # Arguments
    /// * `guid` - GUID of the space
    async fn get_apps_in_space(&self, guid: &str) -> Result<Value, AppError>;

    /// Gets the summary of a space, including its apps and service instances
    async fn get_space_summary(&self, guid: &str) -> Result<Value, AppError>;
}
