//! Fixed iDRAC resource paths, relative to the `/redfish/v1` service root.

pub const SERVICE_ROOT: &str = "/redfish/v1";

pub const SYSTEM: &str = "/Systems/System.Embedded.1";
pub const CHASSIS: &str = "/Chassis/System.Embedded.1";
pub const MANAGER: &str = "/Managers/iDRAC.Embedded.1";

/// Resources the handlers address. Paths are relative to the service root;
/// the transport prefixes `https://<host>/redfish/v1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    System,
    ChassisPowerControl,
    Manager,
}

impl Resource {
    pub fn path(self) -> String {
        match self {
            Resource::System => SYSTEM.to_string(),
            Resource::ChassisPowerControl => format!("{}/Power/PowerControl", CHASSIS),
            Resource::Manager => MANAGER.to_string(),
        }
    }
}

pub fn system_reset() -> String {
    format!("{}/Actions/ComputerSystem.Reset", SYSTEM)
}

pub fn manager_reset() -> String {
    format!("{}/Actions/Manager.Reset", MANAGER)
}

pub fn account(user_id: &str) -> String {
    format!("{}/Accounts/{}", MANAGER, user_id)
}

pub fn sel_log() -> String {
    format!("{}/Logs/Sel", MANAGER)
}

pub fn lc_log() -> String {
    format!("{}/Logs/Lclog", MANAGER)
}

/// Storage controller collection. Members are addressed as `<collection><id>`.
pub fn storage_controllers() -> String {
    format!("{}/Storage/Controllers/", SYSTEM)
}
