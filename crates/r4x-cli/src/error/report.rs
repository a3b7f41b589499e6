//! Miette report conversion for CLI errors.

use miette::Report;

use crate::error::CliError;

/// Convert a `CliError` into a miette report, keeping library diagnostics.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Assemble(e) => Report::new(e),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        _ => miette::miette!("{}", err),
    }
}
