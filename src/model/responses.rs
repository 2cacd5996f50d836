/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::constants::AUTH_TOKEN_PATH;
use crate::error::AppError;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Discovery document returned by `/v2/info`
///
/// Only `token_endpoint` is interpreted; every other field is kept verbatim
/// in `extra`.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerInfo {
    /// Base URL of the UAA server that issues tokens
    pub token_endpoint: String,
    /// Remaining fields of the document
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ServerInfo {
    /// Builds a `ServerInfo` from a parsed discovery body
    ///
    /// # Errors
    /// * `AppError::MissingTokenEndpoint` if `token_endpoint` is absent or not a string
    pub fn from_value(value: Value) -> Result<Self, AppError> {
        match value.get("token_endpoint") {
            Some(Value::String(_)) => Ok(serde_json::from_value(value)?),
            _ => Err(AppError::MissingTokenEndpoint),
        }
    }

    /// URL the login request is posted to
    #[must_use]
    pub fn login_url(&self) -> String {
        format!(
            "{}{}",
            self.token_endpoint.trim_end_matches('/'),
            AUTH_TOKEN_PATH
        )
    }

    /// Looks up any other field of the discovery document
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}
