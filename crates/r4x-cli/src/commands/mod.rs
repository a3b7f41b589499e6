//! Command implementations.
//!
//! - [`configure`] - write the externals entry and emit the descriptor
//! - [`check`] - validate the resolved configuration
//! - [`schema`] - print the fallback file schema

pub mod check;
pub mod configure;
pub mod schema;

pub use check::execute as check_execute;
pub use configure::execute as configure_execute;
pub use schema::execute as schema_execute;
