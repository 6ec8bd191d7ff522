//! CLI command implementations
//!
//! Each command loads configuration, initializes logging, opens the
//! configured store, and then does exactly one thing.

use std::sync::Arc;

use crate::clients::CreateClientRequest;
use crate::config::AppConfig;
use crate::http_server::HttpServer;
use crate::observability::init_logging;
use crate::store::ClientStore;

use super::args::{Cli, Command, ConfigArgs};
use super::errors::{CliError, CliResult};
use super::io::write_json;

/// Parse arguments and run the selected command to completion
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_command(cli.command))
}

/// Dispatch a parsed command
pub async fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config, host, port } => serve(&config, host, port).await,
        Command::List { config } => list(&config).await,
        Command::Add {
            config,
            name,
            email,
            phone,
            note,
        } => {
            let request = CreateClientRequest {
                name,
                email,
                phone,
                note,
            };
            add(&config, request).await
        }
    }
}

/// Load configuration and start logging
fn prepare(args: &ConfigArgs) -> CliResult<AppConfig> {
    let config = AppConfig::load(args.config.as_deref())?;
    init_logging(config.log_format);
    Ok(config)
}

fn open_store(config: &AppConfig) -> CliResult<Arc<dyn ClientStore>> {
    let store = config.store.open()?;
    tracing::info!(
        store = store.kind(),
        id_policy = %config.store.id_policy,
        verify_writes = config.store.verify_writes,
        "client store ready"
    );
    Ok(store)
}

/// Start the HTTP API and serve until interrupted
pub async fn serve(args: &ConfigArgs, host: Option<String>, port: Option<u16>) -> CliResult<()> {
    let mut config = prepare(args)?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let store = open_store(&config)?;
    HttpServer::new(config.server, store).start().await?;
    Ok(())
}

/// Print all records
pub async fn list(args: &ConfigArgs) -> CliResult<()> {
    let config = prepare(args)?;
    let store = open_store(&config)?;

    let clients = store.list().await?;
    write_json(&clients)
}

/// Validate, append, and print the created record
pub async fn add(args: &ConfigArgs, request: CreateClientRequest) -> CliResult<()> {
    let input = request.validate().map_err(CliError::invalid_input)?;

    let config = prepare(args)?;
    let store = open_store(&config)?;

    let created = store.append(input).await?;
    write_json(&created)
}
