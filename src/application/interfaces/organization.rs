use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for organization lookups
///
/// An organization groups users for management purposes. All members share a
/// resource quota plan, service availability and custom domains.
#[async_trait]
pub trait OrganizationService: Send + Sync {
    /// Lists the organizations the user is a member of
    async fn get_organizations(&self) -> Result<Value, AppError>;

    /// Gets the summary of an organization
    ///
    /// # Arguments
    /// * `guid` - GUID of the organization
    async fn get_organization_summary(&self, guid: &str) -> Result<Value, AppError>;

    /// Lists the spaces of an organization
    ///
    /// Every app and service is scoped to a space, and each organization
    /// contains at least one.
    ///
    /// # Arguments
    /// * `guid` - GUID of the organization
    async fn get_organization_spaces(&self, guid: &str) -> Result<Value, AppError>;

    /// Lists the services available to an organization
    ///
    /// # Arguments
    /// * `guid` - GUID of the organization
    async fn get_organization_services(&self, guid: &str) -> Result<Value, AppError>;

    /// Lists the space quota definitions of an organization
    ///
    /// # Arguments
    /// * `guid` - GUID of the organization
    async fn get_organization_space_quota_definitions(
        &self,
        guid: &str,
    ) -> Result<Value, AppError>;
}
