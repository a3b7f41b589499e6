use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the externals entry and emit the bundler descriptor
    ///
    /// Options come from flags, then from environment variables of the same
    /// name (BUILD_R4X, EXTERNALS, ...), then from the fallback config file.
    Configure(ConfigureArgs),

    /// Resolve and validate the configuration without writing files
    Check(CheckArgs),

    /// Print the JSON Schema of the fallback config file
    Schema,
}

/// Options shared by `configure` and `check`.
///
/// Unset flags fall back to the environment variable of the same name.
#[derive(Args, Debug, Default, Clone)]
pub struct OptionArgs {
    /// Fallback JSON or TOML config file, relative to --cwd [env: REACT4XP_CONFIG_FILE]
    #[arg(long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Compilation mode passed to the bundler [env: BUILD_ENV]
    #[arg(long, value_name = "MODE")]
    pub build_env: Option<String>,

    /// Absolute output directory for the chunk and manifest [env: BUILD_R4X]
    #[arg(long, value_name = "DIR")]
    pub build_r4x: Option<PathBuf>,

    /// JSON object mapping library ids to global names [env: EXTERNALS]
    ///
    /// Example: '{"react": "React", "react-dom": "ReactDOM"}'
    #[arg(long, value_name = "JSON")]
    pub externals: Option<String>,

    /// Chunk filename hashing: a hash length, a filename pattern, or false [env: CHUNK_CONTENTHASH]
    #[arg(long, value_name = "MODE")]
    pub chunk_contenthash: Option<String>,

    /// Manifest filename [env: EXTERNALS_CHUNKS_FILENAME]
    #[arg(long = "chunks-filename", value_name = "FILE")]
    pub externals_chunks_filename: Option<String>,

    /// Working directory for resolving the fallback config file
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}

/// Arguments for the configure command
#[derive(Args, Debug)]
pub struct ConfigureArgs {
    #[command(flatten)]
    pub options: OptionArgs,

    /// Where to write the generated entry (default: a fresh temp directory)
    #[arg(long, value_name = "FILE")]
    pub source_path: Option<PathBuf>,

    /// Write the descriptor JSON here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub options: OptionArgs,

    /// Print the resolved configuration as JSON on stdout
    #[arg(long)]
    pub json: bool,
}
