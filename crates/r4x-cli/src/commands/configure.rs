//! `r4x-externals configure`.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use tracing::debug;

use crate::cli::ConfigureArgs;
use crate::config::direct_options;
use crate::error::{Result, ResultExt};
use crate::ui;

/// File name of the generated entry inside the default temp directory.
pub const SOURCE_FILE_NAME: &str = "_AUTOGENERATED_tmp_externals_.es6";

const SCRATCH_PREFIX: &str = "r4x-externals-";

/// Execute the configure command.
///
/// 1. Merge flags over environment variables
/// 2. Resolve against the fallback config file
/// 3. Write the externals entry to `--source-path` or a fresh temp dir
/// 4. Print the descriptor JSON, or write it to `--out`
pub fn execute(args: ConfigureArgs) -> Result<()> {
    let direct = direct_options(&args.options)?;
    let cwd = args.options.working_dir()?;
    let (source_path, scratch) = match &args.source_path {
        Some(path) => (path.clone(), None),
        None => {
            let dir = scratch_dir()?;
            (dir.path().join(SOURCE_FILE_NAME), Some(dir))
        }
    };
    debug!("Externals entry target: {}", source_path.display());

    let descriptor = r4x_externals::configure(&direct, &cwd, &source_path)?;

    match descriptor.externals_entry() {
        Some(entry) => {
            // The bundler reads the entry after we exit.
            if let Some(dir) = scratch {
                let kept = dir.keep();
                debug!("Keeping {}", kept.display());
            }
            ui::info(&format!("Externals entry: {}", entry.display()));
        }
        None => ui::warning("No externals entry generated: the descriptor builds nothing"),
    }

    let json = descriptor.to_json_pretty()?;
    match &args.out {
        Some(out) => {
            write_descriptor(out, &json)?;
            ui::success(&format!("Descriptor written to {}", out.display()));
        }
        None => println!("{json}"),
    }

    Ok(())
}

/// A unique directory per invocation, so parallel builds don't overwrite
/// each other's entry. Removed on drop unless kept.
fn scratch_dir() -> Result<TempDir> {
    tempfile::Builder::new()
        .prefix(SCRATCH_PREFIX)
        .tempdir()
        .context("Failed to create a directory for the externals entry")
}

fn write_descriptor(path: &Path, json: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_path(parent)?;
    }
    fs::write(path, format!("{json}\n")).with_path(path)
}
