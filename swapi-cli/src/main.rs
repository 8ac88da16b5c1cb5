//! swapi - people, planets and favorites REST API
//!
//! - `serve`: run the HTTP server
//! - `migrate`: create missing tables and exit
//! - `user add`: insert a user (users have no HTTP create endpoint)

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use commands::{migrate::MigrateArgs, serve::ServeArgs, user::UserCommand};
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "swapi",
    author,
    version,
    about = "CRUD REST API for characters, planets and per-user favorites"
)]
struct Cli {
    /// Enable debug logging when RUST_LOG is not set
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),

    /// Create missing tables and indexes, then exit
    Migrate(MigrateArgs),

    /// Manage users
    #[command(subcommand)]
    User(UserCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await?,
        Commands::Migrate(args) => commands::migrate::run_migrate(args).await?,
        Commands::User(cmd) => commands::user::run_user(cmd).await?,
    }

    Ok(())
}
