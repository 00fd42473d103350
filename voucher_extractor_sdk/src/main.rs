//! # Voucher Extractor CLI

use clap::Parser;
use voucher_extractor_sdk::{commands, install_logging, report, Cli};
use voucher_formula::logging::{self, codes};
use voucher_formula::{log_error, log_info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Err(message) = install_logging() {
        logging::safe_log_error(codes::system::INITIALIZATION_FAILURE, &message);
        return Err(message.into());
    }

    let cli = Cli::parse();
    log_info!("voucher-extract starting", "version" => env!("CARGO_PKG_VERSION"));

    let outcome = commands::execute(&cli.command).map_err(|e| {
        log_error!(e.code(), "Command failed", "error" => &e);
        e
    })?;

    report::write_report(&outcome.report, cli.output.as_deref(), cli.pretty).map_err(|e| {
        log_error!(e.code(), "Failed to write report", "error" => &e);
        e
    })?;

    if !outcome.success {
        std::process::exit(1);
    }

    Ok(())
}
