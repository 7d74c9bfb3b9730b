//! Dotted-path lookups into untyped Redfish resources.

use serde_json::Value;

use super::error::{RedfishError, Result};

/// Walk `path` (e.g. `MemorySummary.Status.Health`) through nested objects.
pub fn lookup<'a>(resource: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(resource, |node, key| node.as_object()?.get(key))
}

/// Like [`lookup`], but a missing field is an error naming the resource.
pub fn require(resource: &Value, path: &str, uri: &str) -> Result<Value> {
    lookup(resource, path)
        .cloned()
        .ok_or_else(|| RedfishError::FieldNotFound {
            path: path.to_string(),
            uri: uri.to_string(),
        })
}
