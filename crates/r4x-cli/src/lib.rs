//! Command-line interface for the React4xp externals chunk build.
//!
//! - [`cli`] - argument definitions (clap derive)
//! - [`commands`] - `configure`, `check` and `schema`
//! - [`config`] - the direct option layer (environment + flags)
//! - [`error`] - error types and miette reporting
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status lines on stderr

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
