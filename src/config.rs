//! Connection defaults and the optional JSON config file.

pub mod persistence;
pub mod types;
