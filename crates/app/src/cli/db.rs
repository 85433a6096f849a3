use clap::{Args, Subcommand};
use restodocks_app::database;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct DbCommand {
    #[command(subcommand)]
    command: DbSubcommand,
}

#[derive(Debug, Subcommand)]
enum DbSubcommand {
    /// Apply pending schema migrations from `migrations/`
    Migrate {
        #[command(flatten)]
        database: DatabaseArgs,
    },
}

pub(crate) async fn run(command: DbCommand) -> Result<(), String> {
    match command.command {
        DbSubcommand::Migrate { database } => migrate(&database).await,
    }
}

async fn migrate(args: &DatabaseArgs) -> Result<(), String> {
    let db = args.connect().await?;

    let applied = database::migrate(db.pool()).await;

    db.close().await;

    applied.map_err(|error| format!("failed to apply migrations: {error}"))?;

    println!("migrations applied");

    Ok(())
}
