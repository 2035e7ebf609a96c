//! Project-level settings that feed the resolver.
//!
//! Settings are independent of the environment descriptor: they describe the
//! project, not the build being requested. Sources are layered with figment.
//! Priority: environment variables > settings file > defaults.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format as _, Serialized, Toml},
    Figment,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::plan::HintLevel;

/// Settings file looked up in the project root.
pub const SETTINGS_FILE: &str = "bundleplan.toml";

/// Prefix for environment overrides. Nested keys are separated by `__`,
/// e.g. `BUNDLEPLAN_DEV_SERVER__PORT=8080`.
pub const ENV_PREFIX: &str = "BUNDLEPLAN_";

pub const DEFAULT_TITLE: &str = "Three.js Webpack ES6 Boilerplate";
pub const DEFAULT_DEV_HOST: &str = "0.0.0.0";
pub const DEFAULT_DEV_PORT: u16 = 3000;

/// Tunable parts of the plan. Defaults reproduce the stock plan exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverSettings {
    /// Title passed to the HTML page generator
    pub title: String,

    pub dev_server: DevServerSettings,

    pub performance: PerformanceSettings,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            dev_server: DevServerSettings::default(),
            performance: PerformanceSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct DevServerSettings {
    /// Bind address. The default listens on every interface.
    pub host: String,

    pub port: u16,
}

impl Default for DevServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_DEV_HOST.to_string(),
            port: DEFAULT_DEV_PORT,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct PerformanceSettings {
    /// Reaction to oversized bundles
    pub hints: HintLevel,
}

impl ResolverSettings {
    /// Load settings for the project at `root`.
    ///
    /// `explicit` overrides the settings file location and must exist. Without
    /// it, `bundleplan.toml` in `root` is used when present.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = settings_file(root, explicit)? {
            debug!("loading settings from {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(|e| ConfigError::InvalidSettings {
            message: e.to_string(),
            hint: Some(format!(
                "Check {SETTINGS_FILE} and {ENV_PREFIX}* variables for typos and field types"
            )),
        })
    }

    /// Parse a settings document without touching the environment.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| ConfigError::InvalidSettings {
            message: e.to_string(),
            hint: Some("Invalid TOML syntax".to_string()),
        })
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidSettings {
            message: e.to_string(),
            hint: None,
        })
    }

    /// JSON Schema describing the settings file.
    pub fn json_schema() -> Result<Value> {
        let schema = schemars::schema_for!(ResolverSettings);
        serde_json::to_value(schema).map_err(|e| ConfigError::InvalidSettings {
            message: e.to_string(),
            hint: None,
        })
    }
}

fn settings_file(root: &Path, explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) if path.exists() => Ok(Some(path.to_path_buf())),
        Some(path) => Err(ConfigError::SettingsNotFound {
            path: path.to_path_buf(),
        }),
        None => {
            let path = root.join(SETTINGS_FILE);
            Ok(path.exists().then_some(path))
        }
    }
}
