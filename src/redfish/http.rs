//! reqwest-backed transport: HTTPS, basic auth, self-signed BMC certificates.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::debug;

use super::error::{RedfishError, Result};
use super::uris::SERVICE_ROOT;
use super::Transport;
use crate::config::types::ConnectionInfo;

pub struct HttpTransport {
    client: reqwest::Client,
    conn: ConnectionInfo,
}

impl HttpTransport {
    pub fn new(conn: ConnectionInfo, connect_timeout: Duration, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .use_rustls_tls()
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .build()
            .map_err(RedfishError::ClientBuild)?;

        Ok(Self { client, conn })
    }

    fn url(&self, uri: &str) -> String {
        format!("https://{}{}{}", self.conn.host, SERVICE_ROOT, uri)
    }

    /// Authenticated request for `uri`. Writes carry `payload` as a JSON body.
    fn request(&self, method: reqwest::Method, uri: &str, payload: Option<&Value>) -> reqwest::RequestBuilder {
        let builder = self
            .client
            .request(method, self.url(uri))
            .basic_auth(&self.conn.username, Some(&self.conn.password));

        match payload {
            Some(payload) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(payload.to_string()),
            None => builder,
        }
    }

    async fn send_json(&self, method: reqwest::Method, uri: &str, payload: &Value) -> Result<u16> {
        let url = self.url(uri);
        debug!("{} {}", method, url);

        let response = self
            .request(method, uri, Some(payload))
            .send()
            .await
            .map_err(|source| RedfishError::Http { uri: url.clone(), source })?;

        let status = response.status().as_u16();
        debug!("{} -> {}", url, status);
        Ok(status)
    }
}

/// Decode a response body. Status is not checked, so error pages that are not JSON end up here.
fn decode(url: &str, body: &[u8]) -> Result<Value> {
    serde_json::from_slice(body).map_err(|source| RedfishError::Decode { uri: url.to_string(), source })
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, uri: &str) -> Result<Value> {
        let url = self.url(uri);
        debug!("GET {}", url);

        let response = self
            .request(reqwest::Method::GET, uri, None)
            .send()
            .await
            .map_err(|source| RedfishError::Http { uri: url.clone(), source })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| RedfishError::Http { uri: url.clone(), source })?;
        debug!("{} -> {} ({} bytes)", url, status, body.len());

        decode(&url, &body)
    }

    async fn post(&self, uri: &str, payload: &Value) -> Result<u16> {
        self.send_json(reqwest::Method::POST, uri, payload).await
    }

    async fn patch(&self, uri: &str, payload: &Value) -> Result<u16> {
        self.send_json(reqwest::Method::PATCH, uri, payload).await
    }
}
