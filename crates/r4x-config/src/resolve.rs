//! Layered option resolution: direct values over a fallback file.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use crate::error::Result;
use crate::hash::HashMode;
use crate::loading::load_fallback;
use crate::options::{is_truthy, RawOptions};

/// Options after layering. Anything neither layer set stays `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    pub build_env: Option<String>,
    pub build_r4x: Option<PathBuf>,
    pub externals: Option<Value>,
    pub chunk_contenthash: Option<Value>,
    pub externals_chunks_filename: Option<String>,
}

impl ResolvedConfig {
    /// Interpret `chunk_contenthash`.
    pub fn hash_mode(&self) -> Result<HashMode> {
        HashMode::from_value(self.chunk_contenthash.as_ref())
    }
}

/// Resolve every recognized option: a truthy direct value wins, otherwise
/// the fallback value is used, otherwise the option stays unset.
///
/// # Example
///
/// ```
/// use r4x_config::{resolve, RawOptions};
///
/// let direct = RawOptions {
///     build_env: Some("production".into()),
///     ..RawOptions::default()
/// };
/// let fallback = RawOptions {
///     build_env: Some("development".into()),
///     build_r4x: Some("/out".into()),
///     ..RawOptions::default()
/// };
///
/// let resolved = resolve(&direct, &fallback);
/// assert_eq!(resolved.build_env.as_deref(), Some("production"));
/// assert_eq!(resolved.build_r4x.unwrap().to_str(), Some("/out"));
/// ```
pub fn resolve(direct: &RawOptions, fallback: &RawOptions) -> ResolvedConfig {
    ResolvedConfig {
        build_env: pick_string(&direct.build_env, &fallback.build_env),
        build_r4x: pick_path(&direct.build_r4x, &fallback.build_r4x),
        externals: pick_value(&direct.externals, &fallback.externals),
        chunk_contenthash: pick_value(&direct.chunk_contenthash, &fallback.chunk_contenthash),
        externals_chunks_filename: pick_string(
            &direct.externals_chunks_filename,
            &fallback.externals_chunks_filename,
        ),
    }
}

/// Load the fallback file named by `direct.config_file` (if any) and
/// resolve against it.
///
/// A fallback file that can't be loaded is logged and treated as empty.
pub fn resolve_with_fallback_file(direct: &RawOptions, cwd: &Path) -> ResolvedConfig {
    let fallback = match direct.config_file.as_deref() {
        Some(path) if !path.as_os_str().is_empty() => match load_fallback(cwd, path) {
            Ok(options) => {
                debug!("Loaded fallback config from {}", path.display());
                options
            }
            Err(err) => {
                error!("Failed to load fallback config {}: {}", path.display(), err);
                RawOptions::default()
            }
        },
        _ => RawOptions::default(),
    };

    resolve(direct, &fallback)
}

fn pick_string(direct: &Option<String>, fallback: &Option<String>) -> Option<String> {
    direct
        .as_ref()
        .filter(|s| !s.is_empty())
        .or(fallback.as_ref())
        .cloned()
}

fn pick_path(direct: &Option<PathBuf>, fallback: &Option<PathBuf>) -> Option<PathBuf> {
    direct
        .as_ref()
        .filter(|p| !p.as_os_str().is_empty())
        .or(fallback.as_ref())
        .cloned()
}

fn pick_value(direct: &Option<Value>, fallback: &Option<Value>) -> Option<Value> {
    if is_truthy(direct.as_ref()) {
        direct.clone()
    } else {
        fallback.clone()
    }
}
