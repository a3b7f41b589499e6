//! `r4x-externals schema`.

use r4x_config::RawOptions;

use crate::error::Result;

/// Print the JSON Schema of the fallback config file to stdout.
pub fn execute() -> Result<()> {
    let schema = serde_json::to_string_pretty(&RawOptions::json_schema())?;
    println!("{schema}");
    Ok(())
}
