/// User agent string sent with every request to the Cloud Foundry API
pub const USER_AGENT: &str = concat!("Rust-CF-Client/", env!("CARGO_PKG_VERSION"));
/// Default Cloud Foundry API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.run.pivotal.io";
/// Default timeout in seconds applied to every HTTP request
pub const DEFAULT_REST_TIMEOUT: u64 = 30;
/// OAuth client id used by the official `cf` CLI. UAA accepts it with an empty secret.
pub const DEFAULT_OAUTH_CLIENT_ID: &str = "cf";
/// OAuth client secret paired with [`DEFAULT_OAUTH_CLIENT_ID`]
pub const DEFAULT_OAUTH_CLIENT_SECRET: &str = "";

/// Error code the platform embeds in a response body when the bearer token is rejected
pub const INVALID_AUTH_TOKEN_CODE: &str = "CF-InvalidAuthToken";
/// Number of times a request is retried after a re-login
pub const MAX_TOKEN_RETRIES: u32 = 1;

/// Discovery endpoint, relative to the API base URL
pub const INFO_PATH: &str = "/v2/info";
/// Login path, relative to the discovered token endpoint
pub const AUTH_TOKEN_PATH: &str = "/oauth/token";

/// Media type for JSON requests and responses
pub const APPLICATION_JSON: &str = "application/json";
/// Media type of the login form body
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
