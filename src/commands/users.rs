//! Users: PATCH fields of a local iDRAC account slot.

use serde_json::{json, Value};
use tracing::{debug, info};

use super::CommandResult;
use crate::config::types::UserTarget;
use crate::redfish::uris;
use crate::redfish::{RedfishError, Result, Transport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCommand {
    AddUser,
    UpdateUserPassword,
    UpdateUserRole,
}

impl UserCommand {
    pub fn parse(command: &str) -> Option<Self> {
        match command {
            "AddUser" => Some(UserCommand::AddUser),
            "UpdateUserPassword" => Some(UserCommand::UpdateUserPassword),
            "UpdateUserRole" => Some(UserCommand::UpdateUserRole),
            _ => None,
        }
    }
}

fn required<'a>(value: &'a Option<String>, name: &'static str) -> Result<&'a str> {
    value.as_deref().ok_or(RedfishError::MissingParameter(name))
}

/// Build the PATCH bodies for a command, in send order. Never empty.
/// All parameters are checked before anything is sent.
pub fn payloads(cmd: UserCommand, target: &UserTarget) -> Result<Vec<Value>> {
    Ok(match cmd {
        UserCommand::AddUser => vec![
            json!({ "UserName": required(&target.user_name, "username")? }),
            json!({ "Password": required(&target.password, "userpswd")? }),
            json!({ "RoleId": required(&target.role, "userrole")? }),
        ],
        UserCommand::UpdateUserPassword => {
            vec![json!({ "Password": required(&target.password, "userpswd")? })]
        }
        UserCommand::UpdateUserRole => {
            vec![json!({ "RoleId": required(&target.role, "userrole")? })]
        }
    })
}

/// Sends each PATCH in turn. Only the last status code is reported and an
/// earlier failing step does not stop or undo the sequence.
pub async fn run(cmd: UserCommand, target: &UserTarget, transport: &dyn Transport) -> Result<CommandResult> {
    let user_id = required(&target.user_id, "userid")?;
    let uri = uris::account(user_id);
    let bodies = payloads(cmd, target)?;

    let mut status = 0;
    for body in &bodies {
        status = transport.patch(&uri, body).await?;
        debug!("PATCH {} step answered with HTTP {}", uri, status);
    }

    info!("{:?} for account {} finished with HTTP {}", cmd, user_id, status);
    Ok(CommandResult::Status(status))
}
