use clap::Args;
use restodocks_app::domain::promo_codes::{
    PgPromoCodesService, PromoCodesService, records::PromoCodeId,
};

use crate::cli::{DatabaseArgs, promo::parse_date_arg};

#[derive(Debug, Clone, Copy)]
pub(crate) enum Bound {
    Start,
    End,
}

#[derive(Debug, Args)]
pub(crate) struct SetDateArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Promo code id
    #[arg(long)]
    id: PromoCodeId,

    /// New bound (YYYY-MM-DD or RFC 3339); omit to clear it
    #[arg(long)]
    date: Option<String>,
}

pub(crate) async fn run(args: SetDateArgs, bound: Bound) -> Result<(), String> {
    let date = parse_date_arg(args.date.as_deref())?;

    let service = PgPromoCodesService::new(args.database.connect().await?);

    let result = match bound {
        Bound::Start => service.set_start_date(args.id, date).await,
        Bound::End => service.set_end_date(args.id, date).await,
    };

    result.map_err(|error| format!("failed to update promo code {}: {error}", args.id))?;

    match date {
        Some(date) => println!("promo code {} {bound:?} set to {date}", args.id),
        None => println!("promo code {} {bound:?} cleared", args.id),
    }

    Ok(())
}
