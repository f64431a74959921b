use std::io::Write;
use std::process::ExitCode;

use chefmate_core::{application::create_service, domain::common::ChefmateConfig};
use clap::Parser;

use crate::application::{commands::run, errors::report_failure, logging::init_logger};
use crate::args::Args;

mod application;
mod args;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    let args = Args::parse();
    init_logger(&args.log);

    let command_name = args.command.name();
    match execute(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_failure(command_name, &e),
    }
}

async fn execute(args: Args) -> Result<(), anyhow::Error> {
    args.ensure_credentials()?;

    let command = args.command.clone();
    let config = ChefmateConfig::from(args);
    let mut service = create_service(config).await?;

    tracing::debug!(command = command.name(), "Running command");
    let mut stdout = std::io::stdout().lock();
    run(command, &mut service, &mut stdout).await?;
    stdout.flush()?;

    Ok(())
}
