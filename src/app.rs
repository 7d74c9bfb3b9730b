//! Command-line surface: arguments, logging and the printed result.

pub mod cli;
pub mod logging;
pub mod output;
