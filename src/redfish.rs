//! Transport trait definition and the Redfish building blocks behind it.

use async_trait::async_trait;
use serde_json::Value;

pub mod error;
pub mod http;
pub mod json_path;
pub mod uris;

#[cfg(test)]
pub mod mock;

pub use error::{RedfishError, Result};
pub use http::HttpTransport;

/// One request against the BMC. `uri` is relative to the `/redfish/v1` root.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET a resource and decode its body as JSON
    async fn get(&self, uri: &str) -> Result<Value>;

    /// POST a JSON payload, returning only the HTTP status code
    async fn post(&self, uri: &str, payload: &Value) -> Result<u16>;

    /// PATCH a JSON payload, returning only the HTTP status code
    async fn patch(&self, uri: &str, payload: &Value) -> Result<u16>;
}
