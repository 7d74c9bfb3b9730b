//! SysInfo: one GET, one projected field.

use serde_json::Value;
use tracing::debug;

use super::CommandResult;
use crate::redfish::json_path::{lookup as lookup_field, require};
use crate::redfish::uris::Resource;
use crate::redfish::{Result, Transport};

/// Answer for `BootSourceOverrideMode` on firmware that predates the field.
pub const BOOT_MODE_UNSUPPORTED: &str = "14G only.";

#[derive(Debug, PartialEq, Eq)]
pub struct FieldQuery {
    pub command: &'static str,
    pub resource: Resource,
    pub path: &'static str,
    /// Returned when the parent object exists but the last key is absent.
    pub fallback: Option<&'static str>,
}

const fn field(command: &'static str, resource: Resource, path: &'static str) -> FieldQuery {
    FieldQuery { command, resource, path, fallback: None }
}

pub static QUERIES: &[FieldQuery] = &[
    field("ServerStatus", Resource::System, "Status.Health"),
    field("ServerModel", Resource::System, "Model"),
    field("BiosVersion", Resource::System, "BiosVersion"),
    field("ServerManufacturer", Resource::System, "Manufacturer"),
    field("ServerPartNumber", Resource::System, "PartNumber"),
    field("SystemType", Resource::System, "SystemType"),
    field("AssetTag", Resource::System, "AssetTag"),
    field("MemoryGiB", Resource::System, "MemorySummary.TotalSystemMemoryGiB"),
    field("MemoryHealth", Resource::System, "MemorySummary.Status.Health"),
    field("CPUModel", Resource::System, "ProcessorSummary.Model"),
    field("CPUHealth", Resource::System, "ProcessorSummary.Status.Health"),
    field("CPUCount", Resource::System, "ProcessorSummary.Count"),
    field("ConsumedWatts", Resource::ChassisPowerControl, "PowerConsumedWatts"),
    field("PowerState", Resource::System, "PowerState"),
    field("ServiceTag", Resource::System, "SKU"),
    field("SerialNumber", Resource::System, "SerialNumber"),
    field("IdracFirmwareVersion", Resource::Manager, "FirmwareVersion"),
    field("IdracHealth", Resource::Manager, "Status.Health"),
    FieldQuery {
        command: "BootSourceOverrideMode",
        resource: Resource::System,
        path: "Boot.BootSourceOverrideMode",
        fallback: Some(BOOT_MODE_UNSUPPORTED),
    },
];

pub fn lookup(command: &str) -> Option<&'static FieldQuery> {
    QUERIES.iter().find(|q| q.command == command)
}

/// Pull the query's field out of an already fetched resource.
pub fn project(query: &FieldQuery, resource: &Value, uri: &str) -> Result<Value> {
    let Some(fallback) = query.fallback else {
        return require(resource, query.path, uri);
    };

    // The parent object itself is still required; only the leaf may be missing.
    let (parent_path, key) = query.path.rsplit_once('.').unwrap_or(("", query.path));
    let parent = if parent_path.is_empty() {
        resource.clone()
    } else {
        require(resource, parent_path, uri)?
    };

    Ok(lookup_field(&parent, key)
        .cloned()
        .unwrap_or_else(|| Value::String(fallback.to_string())))
}

pub async fn run(query: &FieldQuery, transport: &dyn Transport) -> Result<CommandResult> {
    let uri = query.resource.path();
    let resource = transport.get(&uri).await?;
    let value = project(query, &resource, &uri)?;
    debug!("{} = {}", query.command, value);
    Ok(CommandResult::Field(value))
}
