//! Command-line argument definitions (clap).

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "idrac-redfish")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Manage Dell EMC hardware through iDRAC Redfish APIs", long_about = None)]
pub struct Args {
    // === Command ===
    /// Action category: SysInfo, Logs, Users, Power or Storage
    #[arg(long, help_heading = "Command")]
    pub category: String,

    /// Command to execute within the category
    #[arg(long, help_heading = "Command")]
    pub command: String,

    // === Connection ===
    /// iDRAC IP address or host name
    #[arg(long, help_heading = "Connection")]
    pub idracip: Option<String>,

    /// iDRAC user name used for authentication [default: root]
    #[arg(long, help_heading = "Connection")]
    pub idracuser: Option<String>,

    /// iDRAC password used for authentication [default: calvin]
    #[arg(long, help_heading = "Connection")]
    pub idracpswd: Option<String>,

    /// Overall request timeout in seconds [default: 30]
    #[arg(long, help_heading = "Connection")]
    pub timeout: Option<f64>,

    // === User management ===
    /// ID of the iDRAC account slot to modify
    #[arg(long, help_heading = "User management")]
    pub userid: Option<String>,

    /// Name of the iDRAC user to add
    #[arg(long, help_heading = "User management")]
    pub username: Option<String>,

    /// Password of the iDRAC user to add/modify
    #[arg(long, help_heading = "User management")]
    pub userpswd: Option<String>,

    /// Role of the iDRAC user to add/modify (e.g. Administrator, Operator, ReadOnly)
    #[arg(long, help_heading = "User management")]
    pub userrole: Option<String>,

    // === Config & Logging ===
    /// JSON config file with connection defaults
    #[arg(short = 'c', long, help_heading = "Config & Logging")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR, CRITICAL). Logs go to stderr
    #[arg(long = "log-level", help_heading = "Config & Logging")]
    pub log_level: Option<String>,
}
