use crate::listing::{run_driver_listing, DriverListArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use fleet_admin::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Fleet Admin",
    about = "Serve and inspect the driver approval back office",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect the seeded driver fleet from the command line
    Drivers {
        #[command(subcommand)]
        command: DriversCommand,
    },
}

#[derive(Subcommand, Debug)]
enum DriversCommand {
    /// Print one page of the driver listing with status and available actions
    List(DriverListArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Drivers {
            command: DriversCommand::List(args),
        } => run_driver_listing(args),
    }
}
