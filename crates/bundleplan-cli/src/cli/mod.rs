//! Command-line interface definition.
//!
//! - `bundleplan resolve` - print the build plan as JSON
//! - `bundleplan check` - resolve and validate the plan
//! - `bundleplan schema` - JSON Schema for `bundleplan.toml`
//! - `bundleplan init` - write a default `bundleplan.toml`

mod commands;
mod tests;
mod validation;

use clap::Parser;

pub use commands::{CheckArgs, Command, InitArgs, PlanArgs, ResolveArgs};
pub use validation::parse_env_pair;

/// bundleplan - build plans for a front-end bundler
#[derive(Parser, Debug)]
#[command(
    name = "bundleplan",
    version,
    about = "Resolve front-end bundler build plans",
    long_about = "bundleplan turns an environment descriptor (NODE_ENV and friends) into a\n\
                  complete bundler build plan: entry, output, loader rules, dev server,\n\
                  plugins and production optimizations."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors and the resolution banner
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Do not print the resolution banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}
