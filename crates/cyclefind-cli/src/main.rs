mod cli;
mod cmd;
mod error;
mod io;
mod logging;

use clap::Parser;
use tracing::debug;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};

use crate::error::CliError;
use crate::logging::{LoggingConfig, init_logging};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    init_logging(&LoggingConfig::from_flags(
        cli.quiet,
        cli.verbose,
        cli.log_file.clone(),
    ))?;

    let content = io::read_input(cli.command.file(), cli.max_file_size)?;
    debug!(bytes = content.len(), format = ?cli.format, "input read");

    match &cli.command {
        Command::Cycles { delimiter, .. } => cmd::cycles::run(&content, delimiter, cli.format),
        Command::Shortest {
            node, delimiter, ..
        } => cmd::shortest::run(&content, node, delimiter, cli.format),
        Command::Inspect { .. } => cmd::inspect::run(&content, cli.format),
    }
}
