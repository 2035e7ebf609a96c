//! Environment descriptor to build plan.
//!
//! Resolution is pure apart from the banner it logs: no file is read and no
//! path is checked for existence. Everything mode-dependent is picked from a
//! single [`ModeSettings`] value so development and production fields never
//! mix.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use indexmap::IndexMap;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::env::{EnvDescriptor, Mode};
use crate::error::{ConfigError, Result};
use crate::plan::{
    BuildPlan, CacheGroup, ChunkSelection, DevServer, FileRule, Loader, LoaderPipeline,
    LoaderStep, Minimizer, ModeSettings, ModuleOptions, Optimization, Output, Pattern,
    Performance, PlanReport, PluginSpec, ResolveOptions, RuntimeChunk, SplitChunks,
};
use crate::settings::ResolverSettings;

// Project layout, relative to the root
pub const ENTRY_FILE: &str = "src/app.js";
pub const INCLUDE_DIR: &str = "src";
pub const NODE_MODULES_DIR: &str = "node_modules";
pub const OUTPUT_DIR: &str = "build/js";
pub const CONTENT_BASE_DIR: &str = "build";
pub const HTML_TEMPLATE: &str = "src/html/index.html";

// Emitted names, relative to the output directory
pub const PUBLIC_PATH: &str = "js";
pub const OUTPUT_FILENAME: &str = "app.js";
pub const HTML_FILENAME: &str = "../index.html";
pub const CSS_FILENAME: &str = "../css/[name].css";
pub const CSS_CHUNK_FILENAME: &str = "../css/[id].css";
pub const CSS_PUBLIC_PATH: &str = "css";

/// Identifier the define plugin substitutes with the `NODE_ENV` value.
pub const ENV_DEFINE: &str = "__ENV__";

pub const RESOLVE_EXTENSIONS: [&str; 2] = [".js", ".json"];

/// Tracing target of the resolution banner. Subscribers print these events
/// verbatim, without timestamp or level.
pub const BANNER_TARGET: &str = "bundleplan::banner";

static JS_TEST: LazyLock<Pattern> = LazyLock::new(|| fixed_pattern(r"\.js?$"));
static STYLE_TEST: LazyLock<Pattern> = LazyLock::new(|| fixed_pattern(r"\.(s*)css$"));
static VENDOR_TEST: LazyLock<Pattern> =
    LazyLock::new(|| fixed_pattern(r"[\\/]node_modules[\\/]"));
static CSS_TEST: LazyLock<Pattern> = LazyLock::new(|| fixed_pattern(r"\.css$"));

fn fixed_pattern(source: &str) -> Pattern {
    Pattern::new(source).expect("built-in pattern is a valid regex")
}

/// Produces build plans for one project root.
///
/// # Example
///
/// ```
/// use bundleplan_config::{Devtool, EnvDescriptor, Mode, Resolver};
///
/// let resolver = Resolver::new("/srv/app").unwrap();
/// let plan = resolver.resolve(&EnvDescriptor::new().with("NODE_ENV", "prod"));
///
/// assert_eq!(plan.mode, Mode::Production);
/// assert_eq!(plan.devtool, Devtool::HiddenSourceMap);
/// assert!(plan.output.path.is_absolute());
/// ```
#[derive(Debug, Clone)]
pub struct Resolver {
    root: PathBuf,
    settings: ResolverSettings,
}

impl Resolver {
    /// `root` is made absolute against the current directory if needed.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let root = std::path::absolute(root).map_err(|source| ConfigError::InvalidRoot {
            path: root.to_path_buf(),
            source,
        })?;

        Ok(Self {
            root,
            settings: ResolverSettings::default(),
        })
    }

    pub fn with_settings(mut self, settings: ResolverSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    pub fn output_path(&self) -> PathBuf {
        self.root.join(OUTPUT_DIR)
    }

    pub fn include_path(&self) -> PathBuf {
        self.root.join(INCLUDE_DIR)
    }

    pub fn node_modules_path(&self) -> PathBuf {
        self.root.join(NODE_MODULES_DIR)
    }

    /// Resolve the plan for `env`. Total: unknown modes fall back to development.
    pub fn resolve(&self, env: &EnvDescriptor) -> BuildPlan {
        let node_env = env.node_env();
        let ModeSettings {
            mode,
            devtool,
            stats,
        } = ModeSettings::for_mode(env.mode());

        let output_path = self.output_path();
        let include_path = self.include_path();
        let node_modules_path = self.node_modules_path();

        let mut plugins = vec![define_plugin(node_env)];
        plugins.push(PluginSpec::Html {
            title: self.settings.title.clone(),
            template: self.root.join(HTML_TEMPLATE),
            filename: HTML_FILENAME.to_string(),
            env: node_env.map(str::to_string),
        });
        plugins.push(PluginSpec::CssExtract {
            filename: CSS_FILENAME.to_string(),
            chunk_filename: CSS_CHUNK_FILENAME.to_string(),
        });

        let plan = BuildPlan {
            entry: vec![self.root.join(ENTRY_FILE)],
            output: Output {
                path: output_path,
                public_path: PUBLIC_PATH.to_string(),
                filename: OUTPUT_FILENAME.to_string(),
            },
            mode,
            module: ModuleOptions {
                rules: vec![script_rule(&node_modules_path), style_rule()],
            },
            resolve: ResolveOptions {
                modules: vec![PathBuf::from(NODE_MODULES_DIR), include_path.clone()],
                extensions: RESOLVE_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            },
            performance: Performance {
                hints: self.settings.performance.hints,
            },
            stats,
            devtool,
            dev_server: DevServer {
                content_base: self.root.join(CONTENT_BASE_DIR),
                port: self.settings.dev_server.port,
                host: self.settings.dev_server.host.clone(),
            },
            plugins,
            optimization: optimization(),
            report: PlanReport {
                node_env: node_env.map(str::to_string),
                include_path,
                node_modules_path,
            },
        };

        if let Some(value) = node_env.filter(|_| mode == Mode::Development) {
            debug!("NODE_ENV={value:?} selects development settings");
        }

        for line in plan.summary_lines() {
            info!(target: BANNER_TARGET, "{line}");
        }

        plan
    }
}

fn define_plugin(node_env: Option<&str>) -> PluginSpec {
    let replacement = match node_env {
        Some(value) => Value::String(value.to_string()).to_string(),
        None => "undefined".to_string(),
    };

    let mut definitions = IndexMap::new();
    definitions.insert(ENV_DEFINE.to_string(), replacement);
    PluginSpec::Define { definitions }
}

fn script_rule(node_modules_path: &Path) -> FileRule {
    FileRule::new(JS_TEST.clone(), LoaderPipeline::single(Loader::Babel))
        .excluding(node_modules_path)
}

// Declared output-first: sass runs first, extraction last.
fn style_rule() -> FileRule {
    FileRule::new(
        STYLE_TEST.clone(),
        LoaderPipeline::declared_as([
            LoaderStep::with_options(
                Loader::MiniCssExtract,
                json!({ "publicPath": CSS_PUBLIC_PATH }),
            ),
            LoaderStep::new(Loader::Css),
            LoaderStep::new(Loader::PostCss),
            LoaderStep::new(Loader::Sass),
        ]),
    )
}

fn optimization() -> Optimization {
    let mut cache_groups = IndexMap::new();
    cache_groups.insert(
        "vendor".to_string(),
        CacheGroup {
            test: VENDOR_TEST.clone(),
            name: "vendors".to_string(),
            chunks: ChunkSelection::All,
            enforce: false,
        },
    );
    cache_groups.insert(
        "styles".to_string(),
        CacheGroup {
            test: CSS_TEST.clone(),
            name: "styles".to_string(),
            chunks: ChunkSelection::All,
            enforce: true,
        },
    );

    Optimization {
        minimizer: vec![
            Minimizer::Js {
                cache: true,
                parallel: true,
                source_map: true,
            },
            Minimizer::Css,
        ],
        runtime_chunk: RuntimeChunk::Single,
        split_chunks: SplitChunks { cache_groups },
    }
}
