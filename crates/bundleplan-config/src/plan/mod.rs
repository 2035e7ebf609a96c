//! The resolved build plan handed to the bundler.
//!
//! Field names serialize in the bundler's camelCase shape so the JSON form of
//! a [`BuildPlan`] can be consumed as-is.

mod optimization;
mod plugin;
mod rules;

use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::env::Mode;
use crate::error::{ConfigError, Result};

pub use optimization::{CacheGroup, ChunkSelection, Optimization, RuntimeChunk, SplitChunks};
pub use plugin::{Minimizer, PluginSpec};
pub use rules::{FileRule, Loader, LoaderPipeline, LoaderStep, Pattern};

/// Source-map strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Devtool {
    /// Each module wrapped in `eval`, mapped inline. Fast rebuilds.
    #[serde(rename = "eval")]
    Eval,
    /// Separate `.map` files without a reference comment in the bundle.
    #[serde(rename = "hidden-source-map")]
    HiddenSourceMap,
}

/// Build-log verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stats {
    Minimal,
    None,
}

/// Every field that depends on the mode, chosen together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeSettings {
    pub mode: Mode,
    pub devtool: Devtool,
    pub stats: Stats,
}

impl ModeSettings {
    pub const DEVELOPMENT: ModeSettings = ModeSettings {
        mode: Mode::Development,
        devtool: Devtool::Eval,
        stats: Stats::Minimal,
    };

    pub const PRODUCTION: ModeSettings = ModeSettings {
        mode: Mode::Production,
        devtool: Devtool::HiddenSourceMap,
        stats: Stats::None,
    };

    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Development => Self::DEVELOPMENT,
            Mode::Production => Self::PRODUCTION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    /// Absolute directory for all emitted files
    pub path: PathBuf,
    /// URL of the output directory relative to the HTML page
    pub public_path: String,
    /// Filename template for entry chunks
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ModuleOptions {
    pub rules: Vec<FileRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveOptions {
    /// Searched in order. Bare names are looked up hierarchically.
    pub modules: Vec<PathBuf>,
    pub extensions: Vec<String>,
}

/// What the bundler does with oversized assets.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum HintLevel {
    #[default]
    Warning,
    Error,
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Performance {
    pub hints: HintLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServer {
    /// Directory served as static content
    pub content_base: PathBuf,
    pub port: u16,
    pub host: String,
}

impl DevServer {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Fully resolved build configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildPlan {
    /// Single-element by construction
    pub entry: Vec<PathBuf>,
    pub output: Output,
    pub mode: Mode,
    pub module: ModuleOptions,
    pub resolve: ResolveOptions,
    pub performance: Performance,
    pub stats: Stats,
    pub devtool: Devtool,
    pub dev_server: DevServer,
    pub plugins: Vec<PluginSpec>,
    pub optimization: Optimization,

    /// Paths reported in the resolution banner
    #[serde(skip)]
    pub(crate) report: PlanReport,
}

/// Inputs echoed back by the resolution banner.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct PlanReport {
    pub node_env: Option<String>,
    pub include_path: PathBuf,
    pub node_modules_path: PathBuf,
}

impl BuildPlan {
    pub fn entry_point(&self) -> Option<&Path> {
        self.entry.first().map(PathBuf::as_path)
    }

    pub fn mode_settings(&self) -> ModeSettings {
        ModeSettings {
            mode: self.mode,
            devtool: self.devtool,
            stats: self.stats,
        }
    }

    /// First rule that claims `path`, if any.
    pub fn rule_for(&self, path: &Path) -> Option<&FileRule> {
        self.module.rules.iter().find(|rule| rule.matches(path))
    }

    /// Code-splitting groups that would collect the module at `path`.
    pub fn cache_groups_for(&self, path: &Path) -> Vec<&str> {
        self.optimization.split_chunks.groups_for(path)
    }

    pub fn html_plugins(&self) -> impl Iterator<Item = &PluginSpec> {
        self.plugins.iter().filter(|p| p.is_html())
    }

    pub fn css_extract_plugins(&self) -> impl Iterator<Item = &PluginSpec> {
        self.plugins.iter().filter(|p| p.is_css_extract())
    }

    /// Source-include directory the plan resolves against.
    pub fn include_path(&self) -> &Path {
        &self.report.include_path
    }

    pub fn node_modules_path(&self) -> &Path {
        &self.report.node_modules_path
    }

    /// Lines of the banner logged on every resolution.
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            "Webpack build -".to_string(),
            format!(
                "    - ENV: {}",
                self.report.node_env.as_deref().unwrap_or("(unset)")
            ),
            format!("    - outputPath  {}", self.output.path.display()),
            format!("    - includePath {}", self.report.include_path.display()),
            format!(
                "    - nodeModulesPath: {}",
                self.report.node_modules_path.display()
            ),
        ]
    }

    /// Bundler-shaped JSON value.
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidSettings {
            message: format!("plan serialization failed: {e}"),
            hint: None,
        })
    }
}
