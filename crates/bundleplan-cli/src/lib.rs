//! bundleplan CLI - resolve front-end bundler build plans from the shell.
//!
//! The heavy lifting lives in `bundleplan-config`; this crate reads the
//! environment descriptor from flags and the process environment, loads
//! project settings, and prints or checks the resolved plan.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - one module per subcommand
//! - [`error`] - error types with actionable hints
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status messages on stderr

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
