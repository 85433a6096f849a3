use clap::Args;
use jiff::Timestamp;
use restodocks_app::domain::promo_codes::{
    PgPromoCodesService, PromoCodesService,
    validity::{PromoCodeFilter, parse_status_filter},
};

use crate::cli::{DatabaseArgs, promo::print_promo};

#[derive(Debug, Args)]
pub(crate) struct ListPromoArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Only show codes in this status (all, free, used, expired, not_started)
    #[arg(long, default_value = "all")]
    status: String,
}

pub(crate) async fn run(args: ListPromoArgs) -> Result<(), String> {
    let status = parse_status_filter(&args.status).map_err(|error| error.to_string())?;

    let db = args.database.connect().await?;
    let now = Timestamp::now();

    let promo_codes = PgPromoCodesService::new(db)
        .list_promo_codes(
            PromoCodeFilter {
                status,
                search: None,
            },
            now,
        )
        .await
        .map_err(|error| format!("failed to list promo codes: {error}"))?;

    if promo_codes.is_empty() {
        println!("no promo codes found");
        return Ok(());
    }

    for promo in &promo_codes {
        print_promo(promo, now);
        println!();
    }

    Ok(())
}
