//! Result envelope printed to stdout: one JSON document per invocation.

use serde::Serialize;

use crate::commands::CommandResult;

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ModuleOutput {
    Success { changed: bool, result: CommandResult },
    Failure { failed: bool, msg: String },
}

impl ModuleOutput {
    pub fn success(result: CommandResult) -> Self {
        ModuleOutput::Success { changed: false, result }
    }

    pub fn failure(err: &anyhow::Error) -> Self {
        ModuleOutput::Failure { failed: true, msg: format!("{:#}", err) }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            ModuleOutput::Success { .. } => 0,
            ModuleOutput::Failure { .. } => 1,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| serialize_failure(&e))
    }
}

fn serialize_failure(err: &dyn std::fmt::Display) -> String {
    serde_json::json!({ "failed": true, "msg": format!("failed to serialize result: {}", err) }).to_string()
}
