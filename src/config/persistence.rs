//! Config file loading and merging with command-line parameters.

use anyhow::{anyhow, Context, Result};
use std::path::Path;
use std::time::Duration;

use crate::app::cli::Args;
use crate::config::types::{ClientConfig, ConnectionInfo, UserTarget};

/// Load the JSON config file if one was given; otherwise built-in defaults.
/// Runs before logging is initialized, so it does not log.
pub async fn load_config(path: Option<&Path>) -> Result<ClientConfig> {
    let Some(config_path) = path else {
        return Ok(ClientConfig::default());
    };

    let content = tokio::fs::read_to_string(config_path)
        .await
        .with_context(|| format!("Failed to read config file {:?}", config_path))?;
    let config: ClientConfig = serde_json::from_str(&content)
        .with_context(|| format!("Invalid config file {:?}", config_path))?;

    Ok(config)
}

/// Where the configuration came from, for the startup log line.
pub fn config_source(path: Option<&Path>) -> String {
    match path {
        Some(p) => format!("config file {:?}", p),
        None => "built-in defaults".to_string(),
    }
}

/// Apply command-line overrides on top of the loaded config.
pub fn merge_args(mut config: ClientConfig, args: &Args) -> ClientConfig {
    if let Some(ip) = &args.idracip {
        config.idracip = Some(ip.clone());
    }
    if let Some(user) = &args.idracuser {
        config.idracuser = user.clone();
    }
    if let Some(pswd) = &args.idracpswd {
        config.idracpswd = pswd.clone();
    }
    if let Some(timeout) = args.timeout {
        config.timeout_secs = timeout;
    }
    config
}

impl ClientConfig {
    pub fn connection_info(&self) -> Result<ConnectionInfo> {
        let host = self
            .idracip
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .ok_or_else(|| anyhow!("iDRAC address is required (--idracip or 'idracip' in config)"))?;

        Ok(ConnectionInfo {
            host: host.to_string(),
            username: self.idracuser.clone(),
            password: self.idracpswd.clone(),
        })
    }

    /// Connect and overall request timeouts. Both must be greater than zero.
    pub fn timeouts(&self) -> Result<(Duration, Duration)> {
        let connect = positive_secs(self.connect_timeout_secs)
            .with_context(|| format!("Invalid connect timeout: {}", self.connect_timeout_secs))?;
        let overall = positive_secs(self.timeout_secs)
            .with_context(|| format!("Invalid timeout: {}", self.timeout_secs))?;
        Ok((connect, overall))
    }
}

fn positive_secs(secs: f64) -> Result<Duration> {
    let duration = Duration::try_from_secs_f64(secs)?;
    if duration.is_zero() {
        return Err(anyhow!("timeout must be greater than zero"));
    }
    Ok(duration)
}

impl From<&Args> for UserTarget {
    fn from(args: &Args) -> Self {
        Self {
            user_id: args.userid.clone(),
            user_name: args.username.clone(),
            password: args.userpswd.clone(),
            role: args.userrole.clone(),
        }
    }
}
