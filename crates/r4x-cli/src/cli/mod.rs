//! Command-line interface definition.
//!
//! - `r4x-externals configure` - write the externals entry and print the build descriptor
//! - `r4x-externals check` - report the resolved configuration without writing files
//! - `r4x-externals schema` - print the JSON Schema of the fallback config file

mod commands;

use clap::Parser;

pub use commands::{CheckArgs, Command, ConfigureArgs, OptionArgs};

/// Configure the React4xp externals chunk build
#[derive(Parser, Debug)]
#[command(
    name = "r4x-externals",
    version,
    about = "Configure the React4xp externals chunk build",
    long_about = "Generates an entry that exposes peer libraries as runtime globals and\n\
                  prints a bundler descriptor that compiles it into one content-hashed\n\
                  chunk plus a chunk manifest."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
