mod commands;
mod error;

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{partition, Context};
use crate::error::{exit_code_for, report_error};

#[derive(Debug, Parser)]
#[command(
    name = "phonesplit",
    version,
    about = "Separate Indian and international phone numbers in a CSV file"
)]
struct Cli {
    #[arg(long)]
    json: bool,
    #[arg(long, short)]
    verbose: bool,
    #[command(flatten)]
    partition: partition::PartitionArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        json,
        verbose: _,
        partition: args,
    } = cli;

    debug!(?args, "arguments parsed");
    let ctx = Context { json };
    partition::partition(&ctx, args)
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
