//! Client configuration, connection credentials and user-account targets.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_USER: &str = "root";
pub const DEFAULT_PASSWORD: &str = "calvin";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub idracip: Option<String>,
    #[serde(default = "default_user")]
    pub idracuser: String,
    #[serde(default = "default_password")]
    pub idracpswd: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: f64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: f64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

pub fn default_user() -> String { DEFAULT_USER.to_string() }
pub fn default_password() -> String { DEFAULT_PASSWORD.to_string() }
pub fn default_timeout_secs() -> f64 { 30.0 }
pub fn default_connect_timeout_secs() -> f64 { 5.0 }
pub fn default_log_level() -> String { "WARN".to_string() }

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            idracip: None,
            idracuser: default_user(),
            idracpswd: default_password(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            log_level: default_log_level(),
        }
    }
}

/// Credentials used for every request of one invocation.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionInfo {
    pub host: String,
    pub username: String,
    pub password: String,
}

// Keep the password out of logs and panics.
impl fmt::Debug for ConnectionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionInfo")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

/// Account fields for the Users category. Commands read only what they need.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserTarget {
    pub user_id: Option<String>,
    pub user_name: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: ClientConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.idracip, None);
        assert_eq!(config.idracuser, "root");
        assert_eq!(config.idracpswd, "calvin");
        assert_eq!(config.timeout_secs, 30.0);
        assert_eq!(config.connect_timeout_secs, 5.0);
        assert_eq!(config.log_level, "WARN");
    }

    #[test]
    fn test_debug_hides_password() {
        let conn = ConnectionInfo {
            host: "10.0.0.5".to_string(),
            username: "root".to_string(),
            password: "calvin".to_string(),
        };
        let printed = format!("{:?}", conn);
        assert!(printed.contains("10.0.0.5"));
        assert!(!printed.contains("calvin"));
    }
}
