//! usuarios CLI - run and prepare the user-records web app
//!
//! - `serve`: HTTP server with the create/list/edit/delete pages
//! - `init`: create the SQLite database and table, then exit

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

use config::FileConfig;
use tracing_setup::{init_tracing, TracingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "usuarios",
    author,
    version,
    about = "Minimal web app to create, list, edit and delete user records"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// TOML config file (default: ./usuarios.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the web server
    Serve(commands::ServeArgs),
    /// Create the database file and table, then exit
    Init(commands::InitArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env first so clap's `env` lookups see its values
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&TracingConfig { debug: cli.debug }).ok();

    let file = FileConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args, &file).await?,
        Commands::Init(args) => commands::run_init(args, &file).await?,
    }

    Ok(())
}
