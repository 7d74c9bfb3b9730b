//! Category routing: maps `(category, command)` onto a handler operation,
//! then runs that operation against a [`Transport`].

use std::str::FromStr;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::config::types::UserTarget;
use crate::redfish::{Result, Transport};

pub mod logs;
pub mod power;
pub mod storage;
pub mod sysinfo;
pub mod users;

use logs::LogKind;
use power::PowerCommand;
use storage::StorageMode;
use sysinfo::FieldQuery;
use users::UserCommand;

pub const INVALID_CATEGORY: &str = "Invalid Category";
pub const INVALID_COMMAND: &str = "Invalid Command.";
pub const INVALID_OPTION: &str = "Invalid Option.";
pub const NOT_IMPLEMENTED: &str = "Not yet implemented.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    SysInfo,
    Logs,
    Users,
    Power,
    Storage,
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "SysInfo" => Ok(Category::SysInfo),
            "Logs" => Ok(Category::Logs),
            "Users" => Ok(Category::Users),
            "Power" => Ok(Category::Power),
            "Storage" => Ok(Category::Storage),
            _ => Err(()),
        }
    }
}

/// What a command produced. Serializes as the bare value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CommandResult {
    /// Fixed answer for invalid or unimplemented commands, no request made
    Literal(&'static str),
    /// Single field projected out of a resource
    Field(Value),
    /// Whole resource body, unfiltered
    Document(Value),
    /// Raw HTTP status code of a write action
    Status(u16),
    /// Storage controller name -> health or attached devices
    Controllers(Map<String, Value>),
}

/// A routed command. Pure data: nothing here touches the network.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Literal(&'static str),
    SysInfo(&'static FieldQuery),
    Power(PowerCommand),
    Users(UserCommand),
    Logs(LogKind),
    Storage(StorageMode),
}

/// Resolve a category/command pair. Unknown pairs route to their literal answer.
pub fn route(category: &str, command: &str) -> Operation {
    let Ok(category) = category.parse::<Category>() else {
        return Operation::Literal(INVALID_CATEGORY);
    };

    let op = match category {
        Category::SysInfo => sysinfo::lookup(command)
            .map(Operation::SysInfo)
            .unwrap_or(Operation::Literal(INVALID_COMMAND)),
        Category::Power => PowerCommand::parse(command)
            .map(Operation::Power)
            .unwrap_or(Operation::Literal(INVALID_OPTION)),
        Category::Users if command == "DeleteUser" => Operation::Literal(NOT_IMPLEMENTED),
        Category::Users => UserCommand::parse(command)
            .map(Operation::Users)
            .unwrap_or(Operation::Literal(INVALID_OPTION)),
        Category::Logs => LogKind::parse(command)
            .map(Operation::Logs)
            .unwrap_or(Operation::Literal(INVALID_OPTION)),
        // Storage validates the command per controller, after discovery
        Category::Storage => Operation::Storage(StorageMode::parse(command)),
    };
    debug!("Routed {:?}/{} -> {:?}", category, command, op);
    op
}

/// Run a routed operation. Transport failures propagate unchanged.
pub async fn execute(
    op: &Operation,
    target: &UserTarget,
    transport: &dyn Transport,
) -> Result<CommandResult> {
    match op {
        Operation::Literal(text) => {
            info!("No request sent: {}", text);
            Ok(CommandResult::Literal(*text))
        }
        Operation::SysInfo(query) => sysinfo::run(query, transport).await,
        Operation::Power(cmd) => power::run(cmd, transport).await,
        Operation::Users(cmd) => users::run(*cmd, target, transport).await,
        Operation::Logs(kind) => logs::run(*kind, transport).await,
        Operation::Storage(mode) => storage::run(*mode, transport).await,
    }
}

/// Route and execute in one step.
pub async fn dispatch(
    category: &str,
    command: &str,
    target: &UserTarget,
    transport: &dyn Transport,
) -> Result<CommandResult> {
    let op = route(category, command);
    execute(&op, target, transport).await
}
