use clap::{Args, Subcommand};
use jiff::Timestamp;
use restodocks_app::domain::promo_codes::{dates::parse_bound, records::PromoCodeRecord};

use crate::cli::display_or;

mod create;
mod dates;
mod delete;
mod list;
mod toggle;

#[derive(Debug, Args)]
pub(crate) struct PromoCommand {
    #[command(subcommand)]
    command: PromoSubcommand,
}

#[derive(Debug, Subcommand)]
enum PromoSubcommand {
    /// List promo codes with their current status
    List(list::ListPromoArgs),
    /// Create a new promo code
    Create(create::CreatePromoArgs),
    /// Flip a code between used and unused
    Toggle(toggle::TogglePromoArgs),
    /// Set or clear the start of a code's validity window
    SetStart(dates::SetDateArgs),
    /// Set or clear the end of a code's validity window
    SetEnd(dates::SetDateArgs),
    /// Permanently delete a promo code
    Delete(delete::DeletePromoArgs),
}

pub(crate) async fn run(command: PromoCommand) -> Result<(), String> {
    match command.command {
        PromoSubcommand::List(args) => list::run(args).await,
        PromoSubcommand::Create(args) => create::run(args).await,
        PromoSubcommand::Toggle(args) => toggle::run(args).await,
        PromoSubcommand::SetStart(args) => dates::run(args, dates::Bound::Start).await,
        PromoSubcommand::SetEnd(args) => dates::run(args, dates::Bound::End).await,
        PromoSubcommand::Delete(args) => delete::run(args).await,
    }
}

fn parse_date_arg(raw: Option<&str>) -> Result<Option<Timestamp>, String> {
    raw.map_or(Ok(None), |value| {
        parse_bound(value).map_err(|error| error.to_string())
    })
}

fn print_promo(promo: &PromoCodeRecord, now: Timestamp) {
    println!("id: {}", promo.id);
    println!("code: {}", promo.code);
    println!("status: {}", promo.validity(now));
    println!("note: {}", display_or(promo.note.as_deref(), "—"));
    println!("starts_at: {}", display_or(promo.starts_at, "—"));
    println!("expires_at: {}", display_or(promo.expires_at, "—"));
    println!("used_at: {}", display_or(promo.used_at, "—"));
    println!(
        "used_by: {}",
        display_or(promo.establishment_name.as_deref(), "—")
    );
    println!("created_at: {}", promo.created_at);
}
