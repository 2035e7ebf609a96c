//! Pluggable plan validation strategies
//!
//! Resolution itself never fails, so checking a plan is a separate, opt-in
//! step. Structural checks never touch the filesystem; [`FsValidator`] adds
//! existence checks for the files the external tooling will read.

use std::net::IpAddr;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::plan::{BuildPlan, PluginSpec};

pub trait PlanValidator {
    fn validate(&self, plan: &BuildPlan) -> Result<()>;
}

/// Structural validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use bundleplan_config::{EnvDescriptor, PlanValidator, Resolver, SchemaValidator};
///
/// let plan = Resolver::new("/srv/app").unwrap().resolve(&EnvDescriptor::new());
/// SchemaValidator.validate(&plan).unwrap();
/// ```
pub struct SchemaValidator;

impl PlanValidator for SchemaValidator {
    fn validate(&self, plan: &BuildPlan) -> Result<()> {
        if plan.entry.len() != 1 {
            return Err(invalid(
                format!("expected exactly one entry point, found {}", plan.entry.len()),
                "The plan bundles a single application entry",
            ));
        }

        if !plan.output.path.is_absolute() {
            return Err(invalid(
                format!(
                    "output path must be absolute: {}",
                    plan.output.path.display()
                ),
                "Resolve plans through Resolver, which anchors paths at the project root",
            ));
        }

        if plan.dev_server.port == 0 {
            return Err(invalid(
                "dev server port must be non-zero",
                "Set dev_server.port in bundleplan.toml",
            ));
        }

        let host = plan.dev_server.host.trim();
        if host.is_empty() {
            return Err(invalid(
                "dev server host cannot be empty",
                "Set dev_server.host to an address such as 127.0.0.1",
            ));
        }
        if host.parse::<IpAddr>().is_err() && !is_hostname(host) {
            return Err(invalid(
                format!("dev server host is not an address or hostname: {host}"),
                "Use an IP address or a plain hostname without scheme or port",
            ));
        }

        let html = plan.html_plugins().count();
        let css = plan.css_extract_plugins().count();
        if html != 1 || css != 1 {
            return Err(invalid(
                format!("expected one HTML and one CSS-extract plugin, found {html} and {css}"),
                "Plugins are fixed by the resolver and should not be edited by hand",
            ));
        }

        for (index, rule) in plan.module.rules.iter().enumerate() {
            if rule.pipeline.is_empty() {
                return Err(invalid(
                    format!("rule {index} ({:?}) has no loader steps", rule.test),
                    "Every rule needs at least one loader",
                ));
            }
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Runs [`SchemaValidator`] first, then checks that the entry point and the
/// HTML template exist.
pub struct FsValidator;

impl PlanValidator for FsValidator {
    fn validate(&self, plan: &BuildPlan) -> Result<()> {
        SchemaValidator.validate(plan)?;

        for entry in &plan.entry {
            if !entry.exists() {
                return Err(ConfigError::EntryNotFound {
                    path: entry.clone(),
                });
            }
        }

        for template in templates(plan) {
            if !template.exists() {
                return Err(ConfigError::TemplateNotFound {
                    path: template.to_path_buf(),
                });
            }
        }

        Ok(())
    }
}

fn templates(plan: &BuildPlan) -> impl Iterator<Item = &Path> {
    plan.plugins.iter().filter_map(|plugin| match plugin {
        PluginSpec::Html { template, .. } => Some(template.as_path()),
        _ => None,
    })
}

fn is_hostname(host: &str) -> bool {
    host.split('.').all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

fn invalid(message: impl Into<String>, hint: &str) -> ConfigError {
    ConfigError::PlanValidation {
        message: message.into(),
        hint: Some(hint.to_string()),
    }
}

pub fn validate_schema(plan: &BuildPlan) -> Result<()> {
    SchemaValidator.validate(plan)
}

pub fn validate_fs(plan: &BuildPlan) -> Result<()> {
    FsValidator.validate(plan)
}

/// Files the plan expects to exist before a build can run.
pub fn required_files(plan: &BuildPlan) -> Vec<PathBuf> {
    plan.entry
        .iter()
        .cloned()
        .chain(templates(plan).map(Path::to_path_buf))
        .collect()
}
