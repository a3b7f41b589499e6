//! r4x-externals CLI entry point.
//!
//! Parses arguments, initializes logging, and dispatches the command.

use clap::Parser;
use miette::Result;
use r4x_cli::{cli, commands, error, logger};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);

    let result = match args.command {
        cli::Command::Configure(configure_args) => commands::configure_execute(configure_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Schema => commands::schema_execute(),
    };

    result.map_err(error::cli_error_to_miette)
}
