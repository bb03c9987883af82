use std::process::ExitCode;

use clap::Parser;

mod platform;

/// Look up seats for a ticket-vendor event through the scraping backend.
#[derive(Parser, Debug)]
#[command(name = "ticket-scout")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Event URL, e.g. https://www.ticketmaster.com/<org>/event/<id>
    #[arg(long)]
    url: Option<String>,

    /// Access code passed through to the backend
    #[arg(long)]
    code: Option<String>,

    /// Give up after this many status checks without a result (default: never)
    #[arg(
        long,
        env = "TICKET_SCOUT_MAX_POLLS",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    max_polls: Option<u32>,

    /// Where log output goes
    #[arg(long, value_enum, default_value_t = platform::LogDestination::File)]
    log: platform::LogDestination,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<ExitCode> {
    platform::run_app(Cli::parse())
}
