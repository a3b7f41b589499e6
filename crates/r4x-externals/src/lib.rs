//! # r4x-externals
//!
//! Builds the React4xp externals chunk configuration: a generated entry
//! that publishes peer libraries as runtime globals, and a bundler
//! descriptor that compiles it into one (optionally content-hashed) chunk
//! plus a chunk manifest.
//!
//! ## Quick Start
//!
//! ```no_run
//! use r4x_config::RawOptions;
//! use serde_json::json;
//! use std::path::Path;
//!
//! let direct = RawOptions {
//!     build_r4x: Some("/project/build/r4x".into()),
//!     externals: Some(json!({ "react": "React", "react-dom": "ReactDOM" })),
//!     chunk_contenthash: Some(json!(9)),
//!     externals_chunks_filename: Some("chunks.externals.json".into()),
//!     ..RawOptions::default()
//! };
//!
//! let descriptor = r4x_externals::configure(
//!     &direct,
//!     Path::new("."),
//!     Path::new("/tmp/_externals_.es6"),
//! )?;
//! println!("{}", descriptor.to_json_pretty()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod assemble;
pub mod codegen;
pub mod descriptor;
pub mod error;
pub mod externals;

pub use assemble::{assemble, configure};
pub use codegen::{generate, render_source, GenerateOutcome};
pub use descriptor::{
    BuildDescriptor, ChunksManifestOptions, ModuleConfig, ModuleRule, OutputConfig,
    PluginDescriptor, ResolveConfig, ENTRY_NAME, RESOLVE_EXTENSIONS,
};
pub use error::{AssembleError, GenerateError, Result};
pub use externals::{ExternalsError, ExternalsMap, SkipReason};
