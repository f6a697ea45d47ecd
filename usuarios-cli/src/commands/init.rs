//! Create the database file and table without starting the server

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use usuarios_server::http::prepare_database;

use crate::config::FileConfig;

/// Arguments for the init command
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// SQLite database file to create (default: usuarios.db)
    #[arg(long, short = 'd', env = "USUARIOS_DATABASE")]
    pub database: Option<PathBuf>,
}

pub async fn run_init(args: InitArgs, file: &FileConfig) -> Result<()> {
    let config = file.resolve(None, args.database, None);

    let pool = prepare_database(&config)
        .await
        .with_context(|| format!("Failed to initialize {}", config.database_path.display()))?;
    pool.close().await;

    println!("Database ready at {}", config.database_path.display());
    Ok(())
}
