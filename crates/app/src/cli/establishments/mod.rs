use clap::{Args, Subcommand};

mod list;

#[derive(Debug, Args)]
pub(crate) struct EstablishmentsCommand {
    #[command(subcommand)]
    command: EstablishmentsSubcommand,
}

#[derive(Debug, Subcommand)]
enum EstablishmentsSubcommand {
    /// List establishments with employee counts and owners
    List(list::ListEstablishmentsArgs),
}

pub(crate) async fn run(command: EstablishmentsCommand) -> Result<(), String> {
    match command.command {
        EstablishmentsSubcommand::List(args) => list::run(args).await,
    }
}
