/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Error type shared by every operation of the client

use reqwest::Method;
use reqwest::header::InvalidHeaderValue;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// The token endpoint rejected the login. Carries the raw response body.
    LoginError(String),
    /// An authenticated operation was attempted without an active session
    NotLoggedIn,
    /// The dispatcher was asked for a method other than GET
    UnsupportedMethod(Method),
    /// The discovery document has no usable `token_endpoint`
    MissingTokenEndpoint,
    /// A token or credential could not be encoded as a header value
    InvalidHeader(String),
    /// Transport failure reported by reqwest
    Network(reqwest::Error),
    /// A response body was not valid JSON or lacked a required field
    Json(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::LoginError(body) => write!(f, "login error: {body}"),
            AppError::NotLoggedIn => write!(f, "not logged in"),
            AppError::UnsupportedMethod(method) => {
                write!(f, "unsupported http method: {method}")
            }
            AppError::MissingTokenEndpoint => write!(f, "server info has no token_endpoint"),
            AppError::InvalidHeader(msg) => write!(f, "invalid header value: {msg}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<InvalidHeaderValue> for AppError {
    fn from(err: InvalidHeaderValue) -> Self {
        AppError::InvalidHeader(err.to_string())
    }
}
