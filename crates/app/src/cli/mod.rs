use clap::{Args, Parser, Subcommand};
use restodocks_app::database::{self, Db};

mod db;
mod establishments;
mod promo;

#[derive(Debug, Parser)]
#[command(name = "restodocks-app", about = "Restodocks admin CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Establishments(establishments::EstablishmentsCommand),
    Promo(promo::PromoCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Establishments(command) => establishments::run(command).await,
            Commands::Promo(command) => promo::run(command).await,
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

impl DatabaseArgs {
    pub(crate) async fn connect(&self) -> Result<Db, String> {
        database::connect(&self.database_url)
            .await
            .map(Db::new)
            .map_err(|error| format!("failed to connect to database: {error}"))
    }
}

pub(crate) fn display_or<T: ToString>(value: Option<T>, fallback: &str) -> String {
    value.map_or_else(|| fallback.to_string(), |value| value.to_string())
}
