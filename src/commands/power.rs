//! Power: read the power state or POST a Reset action.

use serde_json::json;
use tracing::info;

use super::CommandResult;
use crate::redfish::json_path::require;
use crate::redfish::uris::{self, Resource};
use crate::redfish::{Result, Transport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetTarget {
    System,
    Manager,
}

impl ResetTarget {
    pub fn action_uri(self) -> String {
        match self {
            ResetTarget::System => uris::system_reset(),
            ResetTarget::Manager => uris::manager_reset(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerCommand {
    State,
    Reset { target: ResetTarget, reset_type: &'static str },
}

const RESETS: &[(&str, ResetTarget, &str)] = &[
    ("PowerOn", ResetTarget::System, "On"),
    ("PowerOff", ResetTarget::System, "ForceOff"),
    ("GracefulRestart", ResetTarget::System, "GracefulRestart"),
    ("GracefulShutdown", ResetTarget::System, "GracefulShutdown"),
    ("IdracGracefulRestart", ResetTarget::Manager, "GracefulRestart"),
];

impl PowerCommand {
    pub fn parse(command: &str) -> Option<Self> {
        if command == "PowerState" {
            return Some(PowerCommand::State);
        }
        RESETS
            .iter()
            .find(|(name, _, _)| *name == command)
            .map(|&(_, target, reset_type)| PowerCommand::Reset { target, reset_type })
    }
}

pub async fn run(cmd: &PowerCommand, transport: &dyn Transport) -> Result<CommandResult> {
    match *cmd {
        PowerCommand::State => {
            let uri = Resource::System.path();
            let system = transport.get(&uri).await?;
            Ok(CommandResult::Field(require(&system, "PowerState", &uri)?))
        }
        PowerCommand::Reset { target, reset_type } => {
            let uri = target.action_uri();
            info!("Requesting {:?} reset: {}", target, reset_type);
            let status = transport.post(&uri, &json!({ "ResetType": reset_type })).await?;
            info!("Reset {} answered with HTTP {}", reset_type, status);
            Ok(CommandResult::Status(status))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redfish::mock::{Call, MockTransport};
    use serde_json::Value;

    const SYSTEM_RESET: &str = "/Systems/System.Embedded.1/Actions/ComputerSystem.Reset";
    const MANAGER_RESET: &str = "/Managers/iDRAC.Embedded.1/Actions/Manager.Reset";

    #[tokio::test]
    async fn test_power_on_posts_reset_type() {
        let t = MockTransport::new().with_statuses(&[204]);
        let cmd = PowerCommand::parse("PowerOn").unwrap();

        let result = run(&cmd, &t).await.unwrap();

        assert_eq!(result, CommandResult::Status(204));
        assert_eq!(
            t.calls(),
            vec![Call::Post(SYSTEM_RESET.to_string(), json!({ "ResetType": "On" }))]
        );
    }

    #[tokio::test]
    async fn test_reset_payloads_and_targets() {
        for (command, uri, reset_type) in [
            ("PowerOff", SYSTEM_RESET, "ForceOff"),
            ("GracefulRestart", SYSTEM_RESET, "GracefulRestart"),
            ("GracefulShutdown", SYSTEM_RESET, "GracefulShutdown"),
            ("IdracGracefulRestart", MANAGER_RESET, "GracefulRestart"),
        ] {
            let t = MockTransport::new();
            run(&PowerCommand::parse(command).unwrap(), &t).await.unwrap();
            assert_eq!(
                t.calls(),
                vec![Call::Post(uri.to_string(), json!({ "ResetType": reset_type }))],
                "{}",
                command
            );
        }
    }

    #[tokio::test]
    async fn test_status_code_is_not_interpreted() {
        let t = MockTransport::new().with_statuses(&[409]);
        let result = run(&PowerCommand::parse("PowerOff").unwrap(), &t).await.unwrap();
        assert_eq!(result, CommandResult::Status(409));
    }

    #[tokio::test]
    async fn test_power_state_reads_system() {
        let t = MockTransport::new()
            .with_resource("/Systems/System.Embedded.1", json!({ "PowerState": "Off" }));
        let result = run(&PowerCommand::State, &t).await.unwrap();
        assert_eq!(result, CommandResult::Field(Value::String("Off".to_string())));
        assert_eq!(t.calls(), vec![Call::Get("/Systems/System.Embedded.1".to_string())]);
    }

    #[test]
    fn test_unknown_option() {
        assert_eq!(PowerCommand::parse("ForceRestart"), None);
        assert_eq!(PowerCommand::parse(""), None);
    }
}
