//! Check command implementation.
//!
//! Resolves the plan the same way `resolve` does, then validates it without
//! building anything.

use bundleplan_config::{required_files, FsValidator, PlanValidator, SchemaValidator};

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// 1. Load settings and resolve the plan
/// 2. Structural validation
/// 3. With `--fs`: entry point and HTML template exist
pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Resolving build plan...");
    let plan = utils::load_plan(&args.plan)?;

    SchemaValidator.validate(&plan)?;
    ui::success(&format!(
        "Plan is valid ({} mode, dev server on {})",
        plan.mode,
        plan.dev_server.address()
    ));

    if plan.dev_server.host == "0.0.0.0" {
        ui::warning("Dev server listens on all interfaces; set dev_server.host to restrict it");
    }

    if args.fs {
        ui::info("Checking project files...");
        if let Err(err) = FsValidator.validate(&plan) {
            ui::error(&err.to_string());
            return Err(err.into());
        }
        for path in required_files(&plan) {
            ui::success(&format!("  {} exists", path.display()));
        }
    }

    Ok(())
}
