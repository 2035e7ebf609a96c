use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::validation::parse_env_pair;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the build plan and print it as JSON
    ///
    /// The plan is written to stdout; the resolution banner goes to stderr.
    Resolve(ResolveArgs),

    /// Resolve the build plan and validate it
    ///
    /// Structural checks always run. With --fs, the entry point and HTML
    /// template must also exist under the project root.
    Check(CheckArgs),

    /// Print the JSON Schema of bundleplan.toml
    Schema,

    /// Write a bundleplan.toml with default settings
    Init(InitArgs),
}

/// Inputs shared by every command that resolves a plan.
#[derive(Args, Debug, Clone, Default)]
pub struct PlanArgs {
    /// Project root. Defaults to the current directory.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Settings file. Defaults to bundleplan.toml in the project root.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Environment descriptor entry, repeatable
    ///
    /// NODE_ENV=prod selects the production plan; any other value, or none,
    /// selects development. Without a NODE_ENV flag the process environment
    /// variable of the same name is used.
    ///
    /// Examples:
    ///   bundleplan resolve --env NODE_ENV=prod
    ///   bundleplan resolve -e NODE_ENV=development -e API_URL=http://localhost:8080
    #[arg(short, long = "env", value_name = "KEY=VALUE", value_parser = parse_env_pair)]
    pub env: Vec<(String, String)>,
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub plan: PlanArgs,

    /// Print compact JSON on one line
    #[arg(long)]
    pub compact: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub plan: PlanArgs,

    /// Also require the entry point and HTML template to exist
    #[arg(long)]
    pub fs: bool,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write bundleplan.toml into. Defaults to the current directory.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Overwrite an existing bundleplan.toml
    #[arg(long)]
    pub force: bool,
}
