use clap::Args;
use dialoguer::Confirm;
use restodocks_app::domain::promo_codes::{
    PgPromoCodesService, PromoCodesService, records::PromoCodeId,
};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct DeletePromoArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Promo code id
    #[arg(long)]
    id: PromoCodeId,

    /// Skip the confirmation prompt
    #[arg(long)]
    yes: bool,
}

pub(crate) async fn run(args: DeletePromoArgs) -> Result<(), String> {
    if !args.yes && !confirm(args.id)? {
        println!("aborted");
        return Ok(());
    }

    PgPromoCodesService::new(args.database.connect().await?)
        .delete_promo_code(args.id)
        .await
        .map_err(|error| format!("failed to delete promo code {}: {error}", args.id))?;

    println!("promo code {} deleted", args.id);

    Ok(())
}

fn confirm(id: PromoCodeId) -> Result<bool, String> {
    Confirm::new()
        .with_prompt(format!("Delete promo code {id} permanently?"))
        .default(false)
        .interact()
        .map_err(|error| format!("failed to read confirmation: {error}"))
}
