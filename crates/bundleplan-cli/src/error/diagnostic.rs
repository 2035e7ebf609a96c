//! Miette report conversion for CLI errors.

use miette::{miette, Report};

use crate::error::{CliError, ConfigError};

pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        other => miette!("{}", other),
    }
}

fn config_error_to_miette(err: ConfigError) -> Report {
    match err.hint() {
        Some(hint) => miette!(help = hint.to_string(), "{}", err),
        None => miette!("{}", err),
    }
}
