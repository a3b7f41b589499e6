//! Logging setup for the r4x-externals CLI.
//!
//! Library crates only emit `tracing` events; this installs the subscriber.
//! Output goes to stderr so stdout stays free for the descriptor JSON.
//!
//! Verbosity, in order:
//! 1. `--verbose`: DEBUG for the r4x crates
//! 2. `--quiet`: errors only
//! 3. `RUST_LOG`: custom filter
//! 4. Default: INFO for the r4x crates

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "r4x_cli=debug,r4x_config=debug,r4x_externals=debug";
const QUIET_FILTER: &str = "error";
const DEFAULT_FILTER: &str = "r4x_cli=info,r4x_config=info,r4x_externals=info";

/// Build the filter for the given flags.
pub fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the tracing subscriber. Call once, before any logging.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .compact();

    tracing_subscriber::registry()
        .with(build_filter(verbose, quiet))
        .with(fmt_layer)
        .init();
}

/// Whether stderr supports colors, honoring `NO_COLOR` and `FORCE_COLOR`.
pub fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::Term::stderr().features().colors_supported()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // The global subscriber can only be installed once per process, so
    // these only exercise the pieces around it.

    #[test]
    fn filters_build_for_every_mode() {
        let _ = build_filter(true, false);
        let _ = build_filter(false, true);
        let _ = build_filter(false, false);
    }

    #[test]
    #[serial]
    fn no_color_disables_colors() {
        unsafe {
            std::env::remove_var("FORCE_COLOR");
            std::env::set_var("NO_COLOR", "1");
        }
        assert!(!should_use_colors());
        unsafe {
            std::env::remove_var("NO_COLOR");
        }
    }

    #[test]
    #[serial]
    fn force_color_enables_colors() {
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::set_var("FORCE_COLOR", "1");
        }
        assert!(should_use_colors());
        unsafe {
            std::env::remove_var("FORCE_COLOR");
        }
    }
}
