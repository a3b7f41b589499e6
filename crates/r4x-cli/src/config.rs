//! The direct option layer.
//!
//! Priority: CLI flags > environment variables. The fallback config file
//! sits below both and is handled by `r4x_config`.

use std::path::PathBuf;

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use r4x_config::{RawOptions, RECOGNIZED_KEYS};
use serde_json::{Map, Value};

use crate::cli::OptionArgs;
use crate::error::{CliError, Result};

impl OptionArgs {
    /// Options given as flags. Unset flags stay `None` and don't mask
    /// environment values.
    pub fn to_raw_options(&self) -> RawOptions {
        RawOptions {
            config_file: self.config_file.clone(),
            build_env: self.build_env.clone(),
            build_r4x: self.build_r4x.clone(),
            externals: self.externals.clone().map(Value::String),
            chunk_contenthash: self.chunk_contenthash.clone().map(Value::String),
            externals_chunks_filename: self.externals_chunks_filename.clone(),
        }
    }

    /// Working directory for the fallback config file.
    pub fn working_dir(&self) -> Result<PathBuf> {
        match &self.cwd {
            Some(cwd) => Ok(cwd.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }
}

/// Merge environment variables and flags into the direct layer.
pub fn direct_options(args: &OptionArgs) -> Result<RawOptions> {
    Figment::new()
        .merge(Serialized::defaults(environment_layer()))
        .merge(Serialized::defaults(args.to_raw_options()))
        .extract()
        .map_err(|e| CliError::InvalidArgument(e.to_string()))
}

/// Recognized environment variables as untouched strings.
///
/// Merging `Env` directly would parse `BUILD_ENV=true` into a bool and
/// `CHUNK_CONTENTHASH=08` into `8`; values are passed on verbatim instead.
fn environment_layer() -> Map<String, Value> {
    Env::raw()
        .only(&RECOGNIZED_KEYS)
        .lowercase(false)
        .iter()
        .map(|(key, value)| (key.as_str().to_string(), Value::String(value)))
        .collect()
}
