//! Init command: write a settings file with the default values spelled out.

use std::fs;
use std::path::PathBuf;

use bundleplan_config::{ResolverSettings, SETTINGS_FILE};

use crate::cli::InitArgs;
use crate::commands::utils;
use crate::error::{CliError, Result, ResultExt};
use crate::ui;

const HEADER: &str = "\
# bundleplan settings
#
# Every value below is the built-in default. Environment variables prefixed
# with BUNDLEPLAN_ override this file, e.g. BUNDLEPLAN_DEV_SERVER__PORT=8080.

";

pub fn execute(args: InitArgs) -> Result<()> {
    let path = write_settings(args)?;
    ui::success(&format!("Created {}", path.display()));
    Ok(())
}

/// Write the default settings file, returning its path.
pub fn write_settings(args: InitArgs) -> Result<PathBuf> {
    let root = utils::project_root(args.root.as_deref())?;
    let path = root.join(SETTINGS_FILE);

    if path.exists() && !args.force {
        return Err(CliError::AlreadyExists(path));
    }

    let body = ResolverSettings::default().to_toml_string()?;
    fs::write(&path, format!("{HEADER}{body}")).with_path(&path)?;
    Ok(path)
}
