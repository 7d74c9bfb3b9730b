//! Storage: discover controllers from the collection, then project each
//! PERC/PCIe controller's health or devices.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::CommandResult;
use crate::redfish::json_path::require;
use crate::redfish::uris;
use crate::redfish::{RedfishError, Result, Transport};

/// Controller name substrings that are reported. Anything else (SATA, ...) is skipped.
pub const CONTROLLER_FAMILIES: &[&str] = &["PERC", "PCIe"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    Health,
    Devices,
    Unrecognized,
}

impl StorageMode {
    pub fn parse(command: &str) -> Self {
        match command {
            "GetStorageInfo" => StorageMode::Health,
            "ListDevices" => StorageMode::Devices,
            _ => StorageMode::Unrecognized,
        }
    }
}

/// One URI per collection member: the collection path plus the member's last path segment.
pub fn controller_uris(collection: &Value, collection_uri: &str) -> Result<Vec<String>> {
    let members = require(collection, "Members", collection_uri)?;
    let members = members.as_array().ok_or_else(|| RedfishError::FieldNotFound {
        path: "Members[]".to_string(),
        uri: collection_uri.to_string(),
    })?;

    Ok(members
        .iter()
        .filter_map(Value::as_object)
        .flat_map(|member| member.values())
        .filter_map(Value::as_str)
        .filter_map(|link| link.trim_end_matches('/').rsplit('/').next())
        .map(|id| format!("{}{}", collection_uri, id))
        .collect())
}

pub fn is_reported(name: &str) -> bool {
    CONTROLLER_FAMILIES.iter().any(|family| name.contains(family))
}

pub async fn run(mode: StorageMode, transport: &dyn Transport) -> Result<CommandResult> {
    let collection_uri = uris::storage_controllers();
    let collection = transport.get(&collection_uri).await?;
    let controllers = controller_uris(&collection, &collection_uri)?;
    debug!("Found {} storage controller(s)", controllers.len());

    let mut summary = Map::new();
    for uri in &controllers {
        let controller = transport.get(uri).await?;
        let name = require(&controller, "Name", uri)?;
        let Some(name) = name.as_str() else {
            return Err(RedfishError::FieldNotFound { path: "Name".to_string(), uri: uri.clone() });
        };

        if !is_reported(name) {
            debug!("Skipping controller '{}'", name);
            continue;
        }

        match mode {
            StorageMode::Health => {
                summary.insert(name.to_string(), require(&controller, "Status.Health", uri)?);
            }
            StorageMode::Devices => {
                summary.insert(name.to_string(), require(&controller, "Devices", uri)?);
            }
            // Stops at the first reported controller, remaining ones are not fetched.
            StorageMode::Unrecognized => {
                warn!("Unrecognized storage command, stopping at controller '{}'", name);
                summary.insert("Invalid".to_string(), Value::String("Invalid Option".to_string()));
                break;
            }
        }
    }

    Ok(CommandResult::Controllers(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redfish::mock::{Call, MockTransport};
    use serde_json::json;

    const COLLECTION: &str = "/Systems/System.Embedded.1/Storage/Controllers/";

    fn two_controllers() -> MockTransport {
        MockTransport::new()
            .with_resource(
                COLLECTION,
                json!({
                    "Members": [
                        { "@odata.id": "/redfish/v1/Systems/System.Embedded.1/Storage/Controllers/RAID.Integrated.1-1" },
                        { "@odata.id": "/redfish/v1/Systems/System.Embedded.1/Storage/Controllers/AHCI.Embedded.1-1" }
                    ]
                }),
            )
            .with_resource(
                format!("{}RAID.Integrated.1-1", COLLECTION),
                json!({
                    "Name": "PERC H730",
                    "Status": { "Health": "OK" },
                    "Devices": [{ "Name": "Physical Disk 0:1:0" }]
                }),
            )
            .with_resource(
                format!("{}AHCI.Embedded.1-1", COLLECTION),
                json!({ "Name": "Generic SATA", "Status": { "Health": "OK" }, "Devices": [] }),
            )
    }

    fn controllers(result: CommandResult) -> Value {
        match result {
            CommandResult::Controllers(map) => Value::Object(map),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_storage_info_keeps_perc_only() {
        let t = two_controllers();
        let result = run(StorageMode::parse("GetStorageInfo"), &t).await.unwrap();
        assert_eq!(controllers(result), json!({ "PERC H730": "OK" }));
        assert_eq!(t.calls().len(), 3);
    }

    #[tokio::test]
    async fn test_list_devices_returns_raw_devices() {
        let t = two_controllers();
        let result = run(StorageMode::parse("ListDevices"), &t).await.unwrap();
        assert_eq!(
            controllers(result),
            json!({ "PERC H730": [{ "Name": "Physical Disk 0:1:0" }] })
        );
    }

    #[tokio::test]
    async fn test_unrecognized_command_stops_after_first_controller() {
        let t = two_controllers();
        let result = run(StorageMode::parse("Rebuild"), &t).await.unwrap();

        assert_eq!(controllers(result), json!({ "Invalid": "Invalid Option" }));
        assert_eq!(
            t.calls(),
            vec![
                Call::Get(COLLECTION.to_string()),
                Call::Get(format!("{}RAID.Integrated.1-1", COLLECTION)),
            ]
        );
    }

    #[tokio::test]
    async fn test_no_reported_controllers_is_empty_mapping() {
        let t = MockTransport::new()
            .with_resource(COLLECTION, json!({ "Members": [{ "@odata.id": "/x/Controllers/AHCI.Embedded.1-1" }] }))
            .with_resource(format!("{}AHCI.Embedded.1-1", COLLECTION), json!({ "Name": "Generic SATA" }));

        let result = run(StorageMode::Unrecognized, &t).await.unwrap();
        assert_eq!(controllers(result), json!({}));
    }

    #[test]
    fn test_controller_uris_from_members() {
        let collection = json!({
            "Members": [
                { "@odata.id": "/redfish/v1/Systems/System.Embedded.1/Storage/Controllers/NonRAID.Slot.4-1" },
                { "@odata.id": "/redfish/v1/Systems/System.Embedded.1/Storage/Controllers/PCIeSSD.Slot.2-C/" }
            ]
        });
        assert_eq!(
            controller_uris(&collection, COLLECTION).unwrap(),
            vec![
                format!("{}NonRAID.Slot.4-1", COLLECTION),
                format!("{}PCIeSSD.Slot.2-C", COLLECTION),
            ]
        );
    }

    #[test]
    fn test_missing_members_is_error() {
        let err = controller_uris(&json!({ "Name": "Controllers" }), COLLECTION).unwrap_err();
        assert!(matches!(err, RedfishError::FieldNotFound { ref path, .. } if path == "Members"));
    }

    #[test]
    fn test_reported_families() {
        assert!(is_reported("PERC H740P Mini"));
        assert!(is_reported("PCIe Extender 1 (Slot 2)"));
        assert!(!is_reported("Generic SATA"));
        assert!(!is_reported("BOSS-S1"));
    }
}
