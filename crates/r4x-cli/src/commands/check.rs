//! `r4x-externals check`.

use r4x_config::{resolve_with_fallback_file, ResolvedConfig};
use r4x_externals::{AssembleError, ExternalsError, ExternalsMap};

use crate::cli::CheckArgs;
use crate::config::direct_options;
use crate::error::{CliError, Result, ResultExt};
use crate::ui;

/// Execute the check command.
///
/// Resolves the configuration like `configure` does but writes nothing.
/// Fails on the errors `configure` would fail on, and when an externals
/// chunk would be built without `BUILD_R4X`.
pub fn execute(args: CheckArgs) -> Result<()> {
    let direct = direct_options(&args.options)?;
    let cwd = args.options.working_dir()?;
    let resolved = resolve_with_fallback_file(&direct, &cwd);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    }

    let hash_mode = resolved.hash_mode()?;
    let externals = match ExternalsMap::from_value(resolved.externals.as_ref()) {
        Ok(map) => Some(map),
        Err(ExternalsError::Fatal(err)) => return Err(AssembleError::from(err).into()),
        Err(ExternalsError::Skip(reason)) => {
            ui::warning(&format!("The externals chunk would be skipped: {reason}"));
            None
        }
    };

    report(&resolved, &hash_mode.filename_pattern());

    let Some(externals) = externals else {
        return Ok(());
    };

    ui::success(&format!("{} externals:", externals.len()));
    for (library, global) in externals.iter() {
        ui::info(&format!("  {library} -> window.{global}"));
    }

    match resolved.build_r4x.as_deref() {
        None => {
            ui::error("BUILD_R4X is not set");
            Err::<(), _>(CliError::InvalidArgument(
                "BUILD_R4X is required when externals are configured".to_string(),
            ))
            .with_hint("set BUILD_R4X or pass --build-r4x with an absolute output directory")
        }
        Some(dir) if !dir.is_absolute() => {
            ui::warning(&format!(
                "BUILD_R4X should be an absolute path, got {}",
                dir.display()
            ));
            Ok(())
        }
        Some(_) => Ok(()),
    }
}

fn report(resolved: &ResolvedConfig, filename: &str) {
    ui::info(&format!(
        "Mode: {}",
        resolved.build_env.as_deref().unwrap_or("(unset)")
    ));
    if let Some(dir) = &resolved.build_r4x {
        ui::info(&format!("Output: {}", dir.display()));
    }
    ui::info(&format!("Chunk filename: {filename}"));
    ui::info(&format!(
        "Manifest: {}",
        resolved
            .externals_chunks_filename
            .as_deref()
            .unwrap_or("(bundler default)")
    ));
}
