use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;

/// Output-generation plugins, in the order the bundler applies them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "plugin")]
pub enum PluginSpec {
    /// Compile-time constant substitution
    #[serde(rename = "DefinePlugin")]
    Define {
        /// Identifier to replacement source text
        definitions: IndexMap<String, String>,
    },

    /// Generates the HTML page that loads the bundle
    #[serde(rename = "HtmlWebpackPlugin", rename_all = "camelCase")]
    Html {
        title: String,
        template: PathBuf,
        /// Relative to the output directory
        filename: String,
        /// `NODE_ENV` exposed to template interpolation
        env: Option<String>,
    },

    /// Writes extracted CSS chunks
    #[serde(rename = "MiniCssExtractPlugin", rename_all = "camelCase")]
    CssExtract {
        filename: String,
        chunk_filename: String,
    },
}

impl PluginSpec {
    pub fn name(&self) -> &'static str {
        match self {
            PluginSpec::Define { .. } => "DefinePlugin",
            PluginSpec::Html { .. } => "HtmlWebpackPlugin",
            PluginSpec::CssExtract { .. } => "MiniCssExtractPlugin",
        }
    }

    pub fn is_html(&self) -> bool {
        matches!(self, PluginSpec::Html { .. })
    }

    pub fn is_css_extract(&self) -> bool {
        matches!(self, PluginSpec::CssExtract { .. })
    }
}

/// Asset minimizers run during optimization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "plugin")]
pub enum Minimizer {
    #[serde(rename = "UglifyJsPlugin", rename_all = "camelCase")]
    Js {
        cache: bool,
        parallel: bool,
        source_map: bool,
    },

    #[serde(rename = "OptimizeCSSAssetsPlugin")]
    Css,
}

impl Minimizer {
    pub fn name(&self) -> &'static str {
        match self {
            Minimizer::Js { .. } => "UglifyJsPlugin",
            Minimizer::Css => "OptimizeCSSAssetsPlugin",
        }
    }
}
