//! Configuration for the React4xp externals chunk build.
//!
//! Values arrive as an environment-like object ([`RawOptions`]) and can be
//! backed by a fallback file named in `REACT4XP_CONFIG_FILE`. [`resolve`]
//! layers the two; [`HashMode`] interprets `CHUNK_CONTENTHASH`.

pub mod error;
pub mod hash;
pub mod loading;
pub mod options;
pub mod resolve;

pub use error::*;
pub use hash::HashMode;
pub use loading::{load_fallback, ConfigFormat};
pub use options::{is_truthy, RawOptions, RECOGNIZED_KEYS};
pub use resolve::{resolve, resolve_with_fallback_file, ResolvedConfig};
