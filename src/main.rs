// Dirgen - scratch directory name generator
// Main CLI entry point

use clap::Parser;
use std::process;

use dirgen::cli::{Cli, CliDispatcher};
use dirgen::utils::error::UserError;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    // Keep stdout clean for generated names and --json output.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = CliDispatcher::execute(cli);

    if let Err(err) = result {
        let user_error = UserError::from_dirgen_error(&err);
        user_error.print();
        process::exit(user_error.exit_code);
    }
}
