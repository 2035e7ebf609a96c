//! bundleplan CLI - resolve front-end bundler build plans.
//!
//! Parses arguments, initializes logging and dispatches to the command.

use bundleplan_cli::logger::LogOptions;
use bundleplan_cli::{cli, commands, error, logger, ui};
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(LogOptions {
        verbose: args.verbose,
        quiet: args.quiet,
        no_color: args.no_color,
        no_banner: args.no_banner,
    });
    ui::init(args.no_color, args.quiet);

    let result = match args.command {
        cli::Command::Resolve(resolve_args) => commands::resolve_execute(resolve_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Schema => commands::schema_execute(),
        cli::Command::Init(init_args) => commands::init_execute(init_args),
    };

    result.map_err(error::cli_error_to_miette)
}
