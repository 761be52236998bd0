// wscensor/src/main.rs
//! wscensor entry point.

use clap::Parser;
use log::{debug, info};
use std::process::ExitCode;

use wscensor::cli::Cli;
use wscensor::{commands, logger};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_logger(logger::level_from_flags(&cli));

    info!("wscensor started. Version: {}", env!("CARGO_PKG_VERSION"));
    debug!("Parsed command: {:?}", cli.command);

    match commands::run(&cli) {
        Ok(code) => code,
        Err(err) => {
            commands::error_msg(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
