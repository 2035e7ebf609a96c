//! Logging setup for the bundleplan CLI.
//!
//! Logs go to stderr through `tracing`, leaving stdout free for the plan
//! itself. The resolution banner is emitted by `bundleplan-config` under
//! [`BANNER_TARGET`] and gets its own layer: printed verbatim, and not
//! subject to `--quiet` or `RUST_LOG`.
//!
//! # Example
//!
//! ```rust,no_run
//! use bundleplan_cli::logger::{init_logger, LogOptions};
//! use tracing::info;
//!
//! init_logger(LogOptions::default());
//! info!("resolving plan");
//! ```

use bundleplan_config::BANNER_TARGET;
use tracing::Metadata;
use tracing_subscriber::{
    filter::filter_fn, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

pub const VERBOSE_FILTER: &str = "bundleplan_config=debug,bundleplan_cli=debug";
pub const QUIET_FILTER: &str = "bundleplan_config=error,bundleplan_cli=error";
pub const DEFAULT_FILTER: &str = "bundleplan_config=info,bundleplan_cli=info";

/// Output switches taken from the global flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOptions {
    pub verbose: bool,
    pub quiet: bool,
    pub no_color: bool,
    pub no_banner: bool,
}

/// Initialize the global tracing subscriber.
///
/// Level selection for diagnostics, first match wins:
/// 1. `--verbose`: DEBUG for bundleplan crates
/// 2. `--quiet`: ERROR only
/// 3. `RUST_LOG`
/// 4. INFO for bundleplan crates
///
/// The banner is printed unless `--no-banner` is given.
pub fn init_logger(options: LogOptions) {
    init_logger_with_filter(filter_for(options.verbose, options.quiet), options);
}

/// Initialize with an explicit diagnostics filter, e.g. for tests.
pub fn init_logger_with_filter(filter: EnvFilter, options: LogOptions) {
    let log_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!options.no_color && should_use_colors())
        .compact()
        .with_filter(filter)
        .with_filter(filter_fn(|meta| !is_banner(meta)));

    let banner_layer = (!options.no_banner).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .without_time()
            .with_level(false)
            .with_target(false)
            .with_ansi(false)
            .with_filter(filter_fn(is_banner))
    });

    // A subscriber may already be installed (tests, embedding)
    let _ = tracing_subscriber::registry()
        .with(log_layer)
        .with(banner_layer)
        .try_init();
}

pub fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

fn is_banner(meta: &Metadata<'_>) -> bool {
    meta.target() == BANNER_TARGET
}

/// Whether stderr should get ANSI colors.
///
/// `NO_COLOR` wins over `FORCE_COLOR`; otherwise terminal detection decides.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::Term::stderr().features().colors_supported()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn verbose_wins_over_quiet() {
        assert_eq!(filter_for(true, true).to_string(), EnvFilter::new(VERBOSE_FILTER).to_string());
        assert_eq!(filter_for(false, true).to_string(), EnvFilter::new(QUIET_FILTER).to_string());
    }

    #[test]
    #[serial]
    fn no_color_overrides_force_color() {
        unsafe {
            std::env::set_var("NO_COLOR", "1");
            std::env::set_var("FORCE_COLOR", "1");
        }
        assert!(!should_use_colors());
        unsafe { std::env::remove_var("NO_COLOR"); }

        assert!(should_use_colors());
        unsafe { std::env::remove_var("FORCE_COLOR"); }
    }

    #[test]
    fn repeated_init_does_not_panic() {
        let options = LogOptions {
            quiet: true,
            no_color: true,
            ..LogOptions::default()
        };
        init_logger(options);
        init_logger(options);
    }
}
