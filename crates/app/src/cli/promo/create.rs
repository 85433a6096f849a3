use clap::Args;
use jiff::Timestamp;
use restodocks_app::domain::promo_codes::{
    PgPromoCodesService, PromoCodesService, data::NewPromoCode,
};

use crate::cli::{
    DatabaseArgs,
    promo::{parse_date_arg, print_promo},
};

#[derive(Debug, Args)]
pub(crate) struct CreatePromoArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Code text; stored upper-cased
    #[arg(long)]
    code: String,

    /// Free-form note
    #[arg(long)]
    note: Option<String>,

    /// Start of the validity window (YYYY-MM-DD or RFC 3339)
    #[arg(long)]
    starts_at: Option<String>,

    /// End of the validity window (YYYY-MM-DD or RFC 3339)
    #[arg(long)]
    expires_at: Option<String>,
}

pub(crate) async fn run(args: CreatePromoArgs) -> Result<(), String> {
    let promo = NewPromoCode::new(
        &args.code.to_uppercase(),
        args.note,
        parse_date_arg(args.starts_at.as_deref())?,
        parse_date_arg(args.expires_at.as_deref())?,
    )
    .map_err(|error| error.to_string())?;

    let db = args.database.connect().await?;

    let created = PgPromoCodesService::new(db)
        .create_promo_code(promo)
        .await
        .map_err(|error| format!("failed to create promo code: {error}"))?;

    print_promo(&created, Timestamp::now());

    Ok(())
}
