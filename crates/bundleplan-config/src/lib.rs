//! Build plan resolution for a front-end bundler.
//!
//! [`Resolver::resolve`] turns an [`EnvDescriptor`] into a [`BuildPlan`]:
//! entry, output, loader rules, dev server, plugins and optimization. The
//! plan only names the external loaders and plugins; nothing here compiles
//! anything.

pub mod env;
pub mod error;
pub mod plan;
pub mod resolver;
pub mod settings;
pub mod validation;

pub use env::{EnvDescriptor, Mode, NODE_ENV, PRODUCTION_VALUE};
pub use error::{ConfigError, Result};
pub use plan::*;
pub use resolver::{Resolver, BANNER_TARGET};
pub use settings::{
    DevServerSettings, PerformanceSettings, ResolverSettings, ENV_PREFIX, SETTINGS_FILE,
};
pub use validation::{
    required_files, validate_fs, validate_schema, FsValidator, PlanValidator, SchemaValidator,
};
