//! idrac-redfish entry point: parse arguments, route the command, print the result.

mod app;
mod commands;
mod config;
mod redfish;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error, info, warn};

use app::cli::Args;
use app::logging::{filter_for_level, init_tracing};
use app::output::ModuleOutput;
use commands::CommandResult;
use config::persistence::{config_source, load_config, merge_args};
use config::types::{default_log_level, ClientConfig, UserTarget, DEFAULT_PASSWORD, DEFAULT_USER};
use redfish::HttpTransport;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Priority: 1. --log-level flag, 2. LOG_LEVEL env, 3. config file, 4. default
    // Config is loaded before the subscriber exists so its log_level can take part.
    let config = load_config(args.config.as_deref()).await;
    let log_level = args
        .log_level
        .clone()
        .or_else(|| std::env::var("LOG_LEVEL").ok())
        .or_else(|| config.as_ref().ok().map(|c| c.log_level.clone()))
        .unwrap_or_else(default_log_level);

    let filter = match filter_for_level(&log_level) {
        Some(filter) => filter,
        None => {
            eprintln!(
                "Invalid log level '{}'. Using WARN. Valid levels: TRACE, DEBUG, INFO, WARN, ERROR, CRITICAL",
                log_level
            );
            "warn"
        }
    };
    init_tracing(filter);

    let output = match run(&args, config).await {
        Ok(result) => ModuleOutput::success(result),
        Err(e) => {
            error!("{:#}", e);
            ModuleOutput::failure(&e)
        }
    };

    println!("{}", output.to_json());
    std::process::exit(output.exit_code());
}

async fn run(args: &Args, config: Result<ClientConfig>) -> Result<CommandResult> {
    let config = merge_args(config?, args);
    info!("Using configuration from {}", config_source(args.config.as_deref()));
    let conn = config.connection_info()?;
    let (connect_timeout, timeout) = config.timeouts()?;
    let target = UserTarget::from(args);

    if conn.username == DEFAULT_USER && conn.password == DEFAULT_PASSWORD {
        warn!("Using factory default iDRAC credentials");
    }
    debug!("Connection: {:?}, timeout {:?}", conn, timeout);

    info!("{}/{} on {}", args.category, args.command, conn.host);

    let transport = HttpTransport::new(conn, connect_timeout, timeout)
        .context("Failed to set up Redfish transport")?;

    let result = commands::dispatch(&args.category, &args.command, &target, &transport)
        .await
        .with_context(|| format!("{}/{} failed", args.category, args.command))?;

    Ok(result)
}
