//! Error types for source generation and descriptor assembly.

use std::path::PathBuf;

use miette::Diagnostic;
use r4x_config::ConfigError;
use thiserror::Error;

/// Fatal source generation failures.
///
/// Unusable input that only skips generation is reported through
/// [`GenerateOutcome::Skipped`](crate::GenerateOutcome::Skipped) instead.
#[derive(Debug, Error, Diagnostic)]
pub enum GenerateError {
    /// `EXTERNALS` was given as a string that isn't valid JSON
    #[error("EXTERNALS is not valid JSON: {source}")]
    #[diagnostic(
        code(r4x::externals::invalid_json),
        help("Pass an object like {{\"react-dom\": \"ReactDOM\"}} or its JSON encoding")
    )]
    InvalidExternalsJson {
        #[source]
        source: serde_json::Error,
    },

    /// The generated source couldn't be written
    #[error("failed to write generated source {}: {source}", path.display())]
    #[diagnostic(code(r4x::externals::write_failed))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error, Diagnostic)]
pub enum AssembleError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    #[diagnostic(code(r4x::config))]
    Config(#[from] ConfigError),
}

pub type Result<T, E = AssembleError> = std::result::Result<T, E>;
