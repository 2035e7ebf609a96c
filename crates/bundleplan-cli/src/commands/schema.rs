use std::io::Write;

use bundleplan_config::ResolverSettings;

use crate::error::Result;

/// Print the JSON Schema for `bundleplan.toml`.
pub fn execute() -> Result<()> {
    let schema = ResolverSettings::json_schema()?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", serde_json::to_string_pretty(&schema)?)?;
    Ok(())
}
