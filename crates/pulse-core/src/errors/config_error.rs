/// Monitor configuration errors, surfaced at construction.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("endpoint list is empty")]
    NoEndpoints,

    #[error("endpoint path {path:?} must start with '/'")]
    InvalidEndpoint { path: String },

    #[error("failed to build HTTP client: {reason}")]
    ClientBuild { reason: String },
}
