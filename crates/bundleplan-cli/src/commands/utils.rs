//! Shared plumbing for commands that resolve a plan.

use std::path::{Path, PathBuf};

use bundleplan_config::{BuildPlan, EnvDescriptor, Resolver, ResolverSettings, NODE_ENV};
use tracing::debug;

use crate::cli::PlanArgs;
use crate::error::{CliError, Result};

/// Resolve a path relative to a working directory.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

pub fn get_cwd() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| {
        CliError::InvalidArgument(format!("Failed to get current working directory: {}", e))
    })
}

/// Project root from `--root`, anchored at the current directory.
pub fn project_root(root: Option<&Path>) -> Result<PathBuf> {
    let cwd = get_cwd()?;
    Ok(match root {
        Some(root) => resolve_path(root, &cwd),
        None => cwd,
    })
}

/// Build the environment descriptor from flags.
///
/// `process_node_env` fills in `NODE_ENV` only when no flag set it.
pub fn env_descriptor(pairs: &[(String, String)], process_node_env: Option<String>) -> EnvDescriptor {
    let mut env: EnvDescriptor = pairs.iter().cloned().collect();
    if !env.contains(NODE_ENV) {
        if let Some(value) = process_node_env {
            debug!("NODE_ENV taken from process environment");
            env = env.with(NODE_ENV, value);
        }
    }
    env
}

/// Load settings and resolve the plan described by `args`.
pub fn load_plan(args: &PlanArgs) -> Result<BuildPlan> {
    let root = project_root(args.root.as_deref())?;
    let cwd = get_cwd()?;
    let config = args.config.as_deref().map(|path| resolve_path(path, &cwd));

    let settings = ResolverSettings::load(&root, config.as_deref())?;
    let env = env_descriptor(&args.env, std::env::var(NODE_ENV).ok());

    let resolver = Resolver::new(&root)?.with_settings(settings);
    Ok(resolver.resolve(&env))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bundleplan_config::Mode;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn flag_wins_over_process_env() {
        let env = env_descriptor(&pairs(&[("NODE_ENV", "prod")]), Some("development".to_string()));
        assert_eq!(env.mode(), Mode::Production);
    }

    #[test]
    fn process_env_fills_missing_node_env() {
        let env = env_descriptor(&pairs(&[("API_URL", "x")]), Some("prod".to_string()));
        assert_eq!(env.node_env(), Some("prod"));
        assert_eq!(env.get("API_URL"), Some("x"));
    }

    #[test]
    fn nothing_set_means_development() {
        let env = env_descriptor(&[], None);
        assert!(env.is_empty());
        assert_eq!(env.mode(), Mode::Development);
    }

    #[test]
    fn relative_paths_join_cwd() {
        assert_eq!(
            resolve_path(Path::new("app"), Path::new("/work")),
            PathBuf::from("/work/app")
        );
        assert_eq!(
            resolve_path(Path::new("/srv/app"), Path::new("/work")),
            PathBuf::from("/srv/app")
        );
    }
}
