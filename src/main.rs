//! Strictly Tic-Tac-Toe - Unified CLI
//!
//! Runs the move service over HTTP, or processes a single request body.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use strictly_tictactoe::{GameController, OpponentKind, ServerConfig, server};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            config,
            port,
            host,
            opponent,
        } => {
            let config = load_config(config, port, host, opponent)?;
            init_tracing(config.log_filter());
            run_http_server(config)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Respond {
            body,
            config,
            opponent,
        } => {
            let config = load_config(config, None, None, opponent)?;
            init_tracing("warn");
            respond(body, *config.opponent())
        }
    }
}

/// Logs go to stderr so `respond` keeps stdout for the body.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Layers file, environment and flag settings.
fn load_config(
    path: Option<PathBuf>,
    port: Option<u16>,
    host: Option<String>,
    opponent: Option<OpponentKind>,
) -> Result<ServerConfig> {
    let mut config = match path {
        Some(path) => ServerConfig::from_file(&path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ServerConfig::default(),
    }
    .apply_env()
    .context("applying environment overrides")?;

    if let Some(port) = port {
        config = config.with_port(port);
    }
    if let Some(host) = host {
        config = config.with_host(host);
    }
    if let Some(opponent) = opponent {
        config = config.with_opponent(opponent);
    }
    Ok(config)
}

/// Run the HTTP move server
#[instrument(skip_all, fields(port = config.port()))]
fn run_http_server(config: ServerConfig) -> Result<()> {
    info!(opponent = %config.opponent(), "Starting Strictly Tic-Tac-Toe server");

    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    runtime
        .block_on(server::serve(&config))
        .context("HTTP server failed")?;

    Ok(())
}

/// Process one request body and print the response
#[instrument(skip(body))]
fn respond(body: Option<String>, opponent: OpponentKind) -> Result<ExitCode> {
    let body = match body {
        Some(body) => body.into_bytes(),
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("reading request body from stdin")?;
            buf
        }
    };

    let response = GameController::with_opponent(opponent).generate_response(&body);

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&response.body)?;
    writeln!(stdout)?;
    eprintln!("{}", response.status);

    Ok(if response.status.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
