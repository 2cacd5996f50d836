/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::constants::INFO_PATH;
use std::fmt;

/// Read-only endpoints of the Cloud Foundry v2 API
///
/// GUIDs are interpolated as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// `/v2/info`
    Info,
    /// `/v2/organizations`
    Organizations,
    /// `/v2/organizations/{guid}/summary`
    OrganizationSummary(&'a str),
    /// `/v2/organizations/{guid}/spaces`
    OrganizationSpaces(&'a str),
    /// `/v2/organizations/{guid}/services`
    OrganizationServices(&'a str),
    /// `/v2/organizations/{guid}/space_quota_definitions`
    OrganizationSpaceQuotaDefinitions(&'a str),
    /// `/v2/spaces/{guid}/apps`
    SpaceApps(&'a str),
    /// `/v2/spaces/{guid}/summary`
    SpaceSummary(&'a str),
    /// `/v2/apps/{guid}/service_bindings`
    AppServiceBindings(&'a str),
}

impl Endpoint<'_> {
    /// Path relative to the API base URL
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Endpoint::Info => INFO_PATH.to_string(),
            Endpoint::Organizations => "/v2/organizations".to_string(),
            Endpoint::OrganizationSummary(guid) => format!("/v2/organizations/{guid}/summary"),
            Endpoint::OrganizationSpaces(guid) => format!("/v2/organizations/{guid}/spaces"),
            Endpoint::OrganizationServices(guid) => format!("/v2/organizations/{guid}/services"),
            Endpoint::OrganizationSpaceQuotaDefinitions(guid) => {
                format!("/v2/organizations/{guid}/space_quota_definitions")
            }
            Endpoint::SpaceApps(guid) => format!("/v2/spaces/{guid}/apps"),
            Endpoint::SpaceSummary(guid) => format!("/v2/spaces/{guid}/summary"),
            Endpoint::AppServiceBindings(guid) => format!("/v2/apps/{guid}/service_bindings"),
        }
    }
}

impl fmt::Display for Endpoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Form body of the UAA password grant
#[derive(Clone, PartialEq)]
pub struct PasswordGrant<'a> {
    username: &'a str,
    password: &'a str,
}

impl<'a> PasswordGrant<'a> {
    /// Creates a password grant for the given user
    pub fn new(username: &'a str, password: &'a str) -> Self {
        Self { username, password }
    }

    /// Form fields in wire order: grant_type, password, scope, username
    #[must_use]
    pub fn form_fields(&self) -> Vec<(&'static str, &'a str)> {
        vec![
            ("grant_type", "password"),
            ("password", self.password),
            ("scope", ""),
            ("username", self.username),
        ]
    }
}

impl fmt::Debug for PasswordGrant<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordGrant")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
