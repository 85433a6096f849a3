use clap::Args;
use jiff::Timestamp;
use restodocks_app::domain::{
    establishments::records::EstablishmentUuid,
    promo_codes::{PgPromoCodesService, PromoCodesService, records::PromoCodeId},
};

use crate::cli::{DatabaseArgs, promo::print_promo};

#[derive(Debug, Args)]
pub(crate) struct TogglePromoArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Promo code id
    #[arg(long)]
    id: PromoCodeId,

    /// Establishment that redeemed the code, when marking it used
    #[arg(long)]
    establishment_id: Option<EstablishmentUuid>,
}

pub(crate) async fn run(args: TogglePromoArgs) -> Result<(), String> {
    let db = args.database.connect().await?;
    let now = Timestamp::now();

    let toggled = PgPromoCodesService::new(db)
        .toggle_used(args.id, args.establishment_id, now)
        .await
        .map_err(|error| format!("failed to toggle promo code {}: {error}", args.id))?;

    print_promo(&toggled, now);

    Ok(())
}
