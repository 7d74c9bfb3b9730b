//! Logs: return the SEL or Lifecycle log resource as-is.

use tracing::debug;

use super::CommandResult;
use crate::redfish::uris;
use crate::redfish::{Result, Transport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Sel,
    Lifecycle,
}

impl LogKind {
    pub fn parse(command: &str) -> Option<Self> {
        match command {
            "GetSelog" => Some(LogKind::Sel),
            "GetLclog" => Some(LogKind::Lifecycle),
            _ => None,
        }
    }

    pub fn uri(self) -> String {
        match self {
            LogKind::Sel => uris::sel_log(),
            LogKind::Lifecycle => uris::lc_log(),
        }
    }
}

pub async fn run(kind: LogKind, transport: &dyn Transport) -> Result<CommandResult> {
    let uri = kind.uri();
    let body = transport.get(&uri).await?;
    debug!("Fetched {:?} log from {}", kind, uri);
    Ok(CommandResult::Document(body))
}
