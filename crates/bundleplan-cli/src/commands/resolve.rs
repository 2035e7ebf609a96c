//! Resolve command: print the build plan.

use std::io::Write;

use crate::cli::ResolveArgs;
use crate::commands::utils;
use crate::error::Result;

pub fn execute(args: ResolveArgs) -> Result<()> {
    let plan = utils::load_plan(&args.plan)?;
    let value = plan.to_value()?;

    let rendered = if args.compact {
        serde_json::to_string(&value)?
    } else {
        serde_json::to_string_pretty(&value)?
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    Ok(())
}
