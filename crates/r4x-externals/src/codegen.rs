//! Generation of the externals entry source.
//!
//! The entry imports every external library and assigns it to the global
//! object, so bundles that treat those libraries as externals can find
//! them at runtime:
//!
//! ```text
//! // AUTO-GENERATED by r4x-externals
//!
//! import ReactDOM from 'react-dom';
//!
//! (function(window) {
//! 	window.ReactDOM = ReactDOM;
//! } )(typeof window !== 'undefined' ? window : global);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::GenerateError;
use crate::externals::{ExternalsError, ExternalsMap, SkipReason};

const HEADER: &str = "// AUTO-GENERATED by r4x-externals\n";

/// Result of a generation attempt that didn't fail outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// The source was written to this path.
    Generated(PathBuf),
    /// Nothing was written.
    Skipped(SkipReason),
}

impl GenerateOutcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Generated(path) => Some(path),
            Self::Skipped(_) => None,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, Self::Generated(_))
    }
}

/// Render the entry source for a validated map.
pub fn render_source(externals: &ExternalsMap) -> String {
    let mut imports = String::new();
    let mut assignments = String::new();

    for (library, global) in externals.iter() {
        imports.push_str(&format!(
            "import {global} from '{}';\n",
            escape_single_quoted(library)
        ));
        assignments.push_str(&format!("\twindow.{global} = {global};\n"));
    }

    format!(
        "{HEADER}\n{imports}\n(function(window) {{\n{assignments}}} )(typeof window !== 'undefined' ? window : global);\n"
    )
}

/// Validate `externals` and write the entry source to `output_path`.
///
/// Unusable input is logged and reported as [`GenerateOutcome::Skipped`].
///
/// # Errors
///
/// An `externals` string that isn't valid JSON, or a failed write.
pub fn generate(
    externals: Option<&Value>,
    output_path: &Path,
) -> Result<GenerateOutcome, GenerateError> {
    if output_path.as_os_str().to_string_lossy().trim().is_empty() {
        return Ok(skip(SkipReason::EmptyOutputPath));
    }

    let map = match ExternalsMap::from_value(externals) {
        Ok(map) => map,
        Err(ExternalsError::Fatal(err)) => return Err(err),
        Err(ExternalsError::Skip(reason)) => return Ok(skip(reason)),
    };

    write_source(output_path, &render_source(&map))?;
    debug!(
        "Generated externals entry for {} libraries at {}",
        map.len(),
        output_path.display()
    );

    Ok(GenerateOutcome::Generated(output_path.to_path_buf()))
}

fn skip(reason: SkipReason) -> GenerateOutcome {
    warn!("Skipping generation of the externals chunk: {}", reason);
    GenerateOutcome::Skipped(reason)
}

fn write_source(path: &Path, source: &str) -> Result<(), GenerateError> {
    let to_error = |source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_error)?;
    }
    fs::write(path, source).map_err(to_error)
}

fn escape_single_quoted(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            other => escaped.push(other),
        }
    }
    escaped
}
