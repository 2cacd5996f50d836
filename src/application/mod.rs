/// Session manager: discovery, login, logout and auth headers
pub mod auth;
/// Endpoint client implementing the service interfaces
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces, one per resource family
pub mod interfaces;
