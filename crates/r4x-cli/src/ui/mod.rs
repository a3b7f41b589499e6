//! Status lines on stderr.

mod messages;

pub use messages::{error, info, success, warning};
