//! User management
//!
//! There is no HTTP endpoint for creating users; this is how they get in.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use swapi_server::models::NewUser;
use swapi_server::DbError;

use super::DatabaseArgs;

#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// Add a user
    Add(UserAddArgs),
}

#[derive(Parser, Debug)]
pub struct UserAddArgs {
    /// Unique user name
    #[arg(long)]
    pub user_name: String,

    /// Unique email address
    #[arg(long)]
    pub email: String,

    /// Password (stored as given; no endpoint checks it)
    #[arg(long, env = "SWAPI_USER_PASSWORD")]
    pub password: String,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

pub async fn run_user(cmd: UserCommand) -> Result<()> {
    match cmd {
        UserCommand::Add(args) => add_user(args).await,
    }
}

async fn add_user(args: UserAddArgs) -> Result<()> {
    let db = args.database.open().await?;

    let created = db
        .users()
        .create(NewUser {
            user_name: args.user_name,
            email: args.email,
            password: args.password,
        })
        .await;
    db.close().await;

    match created {
        Ok(user) => {
            tracing::info!(id = user.id, "user created");
            println!("Created user '{}' with id {}", user.user_name, user.id);
            Ok(())
        }
        Err(DbError::Conflict { .. }) => bail!("user name or email already exists"),
        Err(e) => Err(e).context("Failed to create user"),
    }
}
