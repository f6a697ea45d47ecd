//! HTTP server command
//!
//! Runs the usuarios web app until Ctrl+C or SIGTERM.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::FileConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:5000)
    #[arg(long, short = 'b', env = "USUARIOS_BIND")]
    pub bind: Option<SocketAddr>,

    /// SQLite database file, created if missing (default: usuarios.db)
    #[arg(long, short = 'd', env = "USUARIOS_DATABASE")]
    pub database: Option<PathBuf>,

    /// Request timeout in seconds (default: 30)
    #[arg(long)]
    pub timeout: Option<u64>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, file: &FileConfig) -> Result<()> {
    let config = file.resolve(args.bind, args.database, args.timeout);

    tracing::info!("Starting usuarios server on {}", config.bind_addr);

    // Run server (blocks until shutdown)
    usuarios_server::run_server(config)
        .await
        .context("Server error")?;

    Ok(())
}
