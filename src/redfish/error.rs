//! Error types for Redfish requests and response projection.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RedfishError {
    /// Connection refused, TLS handshake failure, timeout, ...
    #[error("request to {uri} failed: {source}")]
    Http {
        uri: String,
        #[source]
        source: reqwest::Error,
    },

    /// Response body was not valid JSON
    #[error("malformed JSON from {uri}: {source}")]
    Decode {
        uri: String,
        #[source]
        source: serde_json::Error,
    },

    /// Expected field missing from a BMC resource
    #[error("field '{path}' not found in resource {uri}")]
    FieldNotFound { path: String, uri: String },

    /// A Users command needs a parameter the caller did not supply
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, RedfishError>;
