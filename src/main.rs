//! Entry point for the `themecfg` CLI. It parses arguments, dispatches to
//! the command handler, and maps errors to exit codes.

use std::process::ExitCode;
use themecfg::cli::Cli;
use themecfg::{commands, exit_codes, logging};

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
