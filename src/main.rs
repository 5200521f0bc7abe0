use clap::Parser;
use log::Level;
use std::process::ExitCode;

use ewg::commands::{execute, Cli};
use ewg::ops::RunOutcome;
use ewg::utils::{init_logger, severity_tag};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger();
    match execute(cli) {
        Ok(RunOutcome::Aborted) => ExitCode::SUCCESS,
        Ok(RunOutcome::Completed(_)) => {
            println!("\nThank you for using the EVM Wallet Generator!\n");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", severity_tag(Level::Error), e);
            ExitCode::FAILURE
        }
    }
}
