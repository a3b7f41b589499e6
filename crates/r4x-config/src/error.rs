//! Error types for configuration loading and resolution.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("unsupported configuration format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("invalid config file {}: {message}", path.display())]
    InvalidFile { path: PathBuf, message: String },

    // CHUNK_CONTENTHASH must be falsy, a filename pattern, or a hash length
    #[error("invalid CHUNK_CONTENTHASH value {value}: {hint}")]
    InvalidHashMode { value: String, hint: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
