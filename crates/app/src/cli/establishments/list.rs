use clap::Args;
use restodocks_app::domain::establishments::{EstablishmentsService, PgEstablishmentsService};

use crate::cli::{DatabaseArgs, display_or};

#[derive(Debug, Args)]
pub(crate) struct ListEstablishmentsArgs {
    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: ListEstablishmentsArgs) -> Result<(), String> {
    let db = args.database.connect().await?;

    let directory = PgEstablishmentsService::new(db)
        .list_establishments()
        .await
        .map_err(|error| format!("failed to list establishments: {error}"))?;

    if directory.is_empty() {
        println!("no establishments found");
        return Ok(());
    }

    for establishment in directory {
        println!("id: {}", establishment.uuid);
        println!("name: {}", establishment.name);
        println!("address: {}", display_or(establishment.address, "—"));
        println!("default_currency: {}", establishment.default_currency);
        println!("created_at: {}", establishment.created_at);
        println!("employees: {}", establishment.employee_count);
        println!(
            "owner: {}",
            establishment.owner.map_or_else(
                || "—".to_string(),
                |owner| format!("{} <{}>", owner.name, owner.email)
            )
        );
        println!();
    }

    Ok(())
}
