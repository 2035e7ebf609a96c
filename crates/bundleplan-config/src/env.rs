//! Environment descriptor handed to the resolver.
//!
//! The descriptor is an ordered key/value map supplied by the invoking
//! process. Only `NODE_ENV` is recognized; everything else is carried along
//! untouched so callers can inspect it.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Key that selects the build mode.
pub const NODE_ENV: &str = "NODE_ENV";

/// The only `NODE_ENV` value that switches the plan to production.
pub const PRODUCTION_VALUE: &str = "prod";

/// Immutable key/value mapping describing the build environment.
///
/// # Example
///
/// ```
/// use bundleplan_config::{EnvDescriptor, Mode};
///
/// let env = EnvDescriptor::new().with("NODE_ENV", "prod");
/// assert_eq!(env.mode(), Mode::Production);
///
/// let env = EnvDescriptor::new().with("NODE_ENV", "staging");
/// assert_eq!(env.mode(), Mode::Development);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvDescriptor {
    vars: IndexMap<String, String>,
}

impl EnvDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert. Later values for the same key win.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Capture `NODE_ENV` from the process environment, if set.
    pub fn from_process() -> Self {
        match std::env::var(NODE_ENV) {
            Ok(value) => Self::new().with(NODE_ENV, value),
            Err(_) => Self::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Raw `NODE_ENV` value.
    pub fn node_env(&self) -> Option<&str> {
        self.get(NODE_ENV)
    }

    /// Mode selected by this descriptor. Anything but `"prod"` is development.
    pub fn mode(&self) -> Mode {
        Mode::from_node_env(self.node_env())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for EnvDescriptor
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Build mode, as understood by the bundler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Development,
    Production,
}

impl Mode {
    pub fn from_node_env(value: Option<&str>) -> Self {
        match value {
            Some(PRODUCTION_VALUE) => Mode::Production,
            _ => Mode::Development,
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Mode::Production)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
