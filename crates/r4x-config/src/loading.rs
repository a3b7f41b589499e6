//! Fallback config file loading.
//!
//! The fallback file is usually a shared build-constants file. JSON and
//! TOML are supported; the format is picked from the file extension.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::options::RawOptions;

/// Supported fallback file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Load a fallback config file.
///
/// `path` is resolved against `cwd` unless it is absolute.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` when the file doesn't exist,
/// `UnsupportedFormat` for unknown extensions and `InvalidFile` when the
/// content doesn't parse.
pub fn load_fallback(cwd: &Path, path: &Path) -> Result<RawOptions> {
    let full_path = resolve_config_path(cwd, path);
    let format = ConfigFormat::from_path(&full_path).ok_or_else(|| {
        ConfigError::UnsupportedFormat {
            path: full_path.clone(),
        }
    })?;

    if !full_path.is_file() {
        return Err(ConfigError::NotFound { path: full_path });
    }

    let content = fs::read_to_string(&full_path)?;
    let value = match format {
        ConfigFormat::Json => parse_json(&full_path, &content)?,
        ConfigFormat::Toml => parse_toml(&full_path, &content)?,
    };

    if !value.is_object() {
        return Err(ConfigError::InvalidFile {
            path: full_path,
            message: "top-level value must be an object".to_string(),
        });
    }

    RawOptions::from_value(value).map_err(|e| ConfigError::InvalidFile {
        path: full_path,
        message: e.to_string(),
    })
}

fn resolve_config_path(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

fn parse_json(path: &Path, content: &str) -> Result<Value> {
    serde_json::from_str(content).map_err(|e| ConfigError::InvalidFile {
        path: path.to_path_buf(),
        message: format!("Invalid JSON: {}", e),
    })
}

fn parse_toml(path: &Path, content: &str) -> Result<Value> {
    let toml_val: toml::Table = toml::from_str(content).map_err(|e| ConfigError::InvalidFile {
        path: path.to_path_buf(),
        message: format!("Invalid TOML syntax: {}", e),
    })?;

    serde_json::to_value(toml_val).map_err(|e| ConfigError::InvalidFile {
        path: path.to_path_buf(),
        message: format!("TOML to JSON conversion failed: {}", e),
    })
}
