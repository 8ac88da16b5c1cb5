//! Schema command

use anyhow::Result;
use clap::Parser;

use super::DatabaseArgs;

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let db = args.database.open().await?;
    println!("Schema ready ({})", db.backend().as_str());
    db.close().await;
    Ok(())
}
