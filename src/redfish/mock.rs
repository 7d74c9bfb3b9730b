//! In-memory transport for handler tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::error::{RedfishError, Result};
use super::Transport;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Get(String),
    Post(String, Value),
    Patch(String, Value),
}

/// Serves canned resources per URI and records every call in order.
/// Write requests answer with queued status codes, 200 once the queue is empty.
#[derive(Default)]
pub struct MockTransport {
    resources: HashMap<String, Value>,
    statuses: Mutex<VecDeque<u16>>,
    calls: Mutex<Vec<Call>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resource(mut self, uri: impl Into<String>, body: Value) -> Self {
        self.resources.insert(uri.into(), body);
        self
    }

    pub fn with_statuses(self, statuses: &[u16]) -> Self {
        self.statuses.lock().unwrap().extend(statuses.iter().copied());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn next_status(&self) -> u16 {
        self.statuses.lock().unwrap().pop_front().unwrap_or(200)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, uri: &str) -> Result<Value> {
        self.calls.lock().unwrap().push(Call::Get(uri.to_string()));
        self.resources.get(uri).cloned().ok_or_else(|| RedfishError::FieldNotFound {
            path: "<resource>".to_string(),
            uri: uri.to_string(),
        })
    }

    async fn post(&self, uri: &str, payload: &Value) -> Result<u16> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Post(uri.to_string(), payload.clone()));
        Ok(self.next_status())
    }

    async fn patch(&self, uri: &str, payload: &Value) -> Result<u16> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Patch(uri.to_string(), payload.clone()));
        Ok(self.next_status())
    }
}
