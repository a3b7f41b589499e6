//! Assembly of the externals build descriptor.

use std::path::Path;

use indexmap::IndexMap;
use r4x_config::{resolve_with_fallback_file, RawOptions, ResolvedConfig};
use tracing::{debug, warn};

use crate::codegen::{generate, GenerateOutcome};
use crate::descriptor::{
    BuildDescriptor, ChunksManifestOptions, OutputConfig, PluginDescriptor, ENTRY_NAME,
};
use crate::error::Result;

/// Build the descriptor for a resolved configuration.
///
/// Writes the externals entry source to `source_path`. When generation is
/// skipped the descriptor has no entries and no plugins, which makes the
/// build a silent no-op.
///
/// # Errors
///
/// An invalid `CHUNK_CONTENTHASH`, an `EXTERNALS` string that isn't JSON,
/// or a failure to write the entry source.
///
/// # Example
///
/// ```no_run
/// use r4x_config::ResolvedConfig;
/// use r4x_externals::assemble;
/// use serde_json::json;
/// use std::path::Path;
///
/// let resolved = ResolvedConfig {
///     build_r4x: Some("/out".into()),
///     externals: Some(json!({ "react-dom": "ReactDOM" })),
///     chunk_contenthash: Some(json!("8")),
///     ..ResolvedConfig::default()
/// };
///
/// let descriptor = assemble(&resolved, Path::new("/tmp/_externals_.es6"))?;
/// assert_eq!(descriptor.output.filename, "[name].[contenthash:8].js");
/// # Ok::<(), r4x_externals::AssembleError>(())
/// ```
pub fn assemble(resolved: &ResolvedConfig, source_path: &Path) -> Result<BuildDescriptor> {
    let hash_mode = resolved.hash_mode()?;
    debug!("Chunk filename hashing: {}", hash_mode);

    let output = OutputConfig {
        path: resolved.build_r4x.clone(),
        filename: hash_mode.filename_pattern(),
    };
    let mut descriptor = BuildDescriptor::empty(resolved.build_env.clone(), output);

    let GenerateOutcome::Generated(entry_path) = generate(resolved.externals.as_ref(), source_path)?
    else {
        return Ok(descriptor);
    };

    check_output_dir(resolved);

    descriptor.entry = IndexMap::from([(ENTRY_NAME.to_string(), entry_path)]);
    descriptor.plugins = Some(vec![PluginDescriptor::ChunksManifest(
        ChunksManifestOptions {
            output_dir: resolved.build_r4x.clone(),
            filename: resolved.externals_chunks_filename.clone(),
        },
    )]);

    Ok(descriptor)
}

/// Resolve `direct` against its fallback file and assemble the descriptor.
///
/// `cwd` anchors a relative `REACT4XP_CONFIG_FILE`.
pub fn configure(direct: &RawOptions, cwd: &Path, source_path: &Path) -> Result<BuildDescriptor> {
    let resolved = resolve_with_fallback_file(direct, cwd);
    assemble(&resolved, source_path)
}

fn check_output_dir(resolved: &ResolvedConfig) {
    match resolved.build_r4x.as_deref() {
        None => warn!("BUILD_R4X is not set: the bundler has no output directory"),
        Some(dir) if !dir.is_absolute() => warn!(
            "BUILD_R4X should be an absolute path, got {}",
            dir.display()
        ),
        Some(_) => {}
    }
}
