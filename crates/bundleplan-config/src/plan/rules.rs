//! File-type rules and their loader pipelines.
//!
//! Loader pipelines follow the bundler convention: steps are *declared*
//! output-first but *executed* source-first. The last declared step sees the
//! raw file, the first declared step produces what ends up in the bundle.
//! [`LoaderPipeline`] keeps the declared order for serialization and exposes
//! [`LoaderPipeline::execution_order`] for anything that needs to reason
//! about what actually runs first.

use std::fmt;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// Regular expression tested against module paths.
#[derive(Clone)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Regex::new(source).map(Pattern)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Match against a path, lossily converted to UTF-8.
    pub fn matches_path(&self, path: &Path) -> bool {
        self.0.is_match(&path.to_string_lossy())
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Pattern {}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.as_str())
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// External processing steps a rule can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Loader {
    /// JavaScript transpilation
    #[serde(rename = "babel-loader")]
    Babel,
    /// Pulls compiled CSS out of the JS bundle into standalone files
    #[serde(rename = "mini-css-extract-plugin/loader")]
    MiniCssExtract,
    /// Resolves `@import` / `url()` and turns CSS into a module
    #[serde(rename = "css-loader")]
    Css,
    #[serde(rename = "postcss-loader")]
    PostCss,
    #[serde(rename = "sass-loader")]
    Sass,
}

impl Loader {
    pub fn name(self) -> &'static str {
        match self {
            Loader::Babel => "babel-loader",
            Loader::MiniCssExtract => "mini-css-extract-plugin/loader",
            Loader::Css => "css-loader",
            Loader::PostCss => "postcss-loader",
            Loader::Sass => "sass-loader",
        }
    }
}

impl fmt::Display for Loader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One named step plus the options forwarded to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoaderStep {
    pub loader: Loader,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

impl LoaderStep {
    pub fn new(loader: Loader) -> Self {
        Self {
            loader,
            options: None,
        }
    }

    pub fn with_options(loader: Loader, options: Value) -> Self {
        Self {
            loader,
            options: Some(options),
        }
    }
}

impl From<Loader> for LoaderStep {
    fn from(loader: Loader) -> Self {
        LoaderStep::new(loader)
    }
}

/// Ordered loader steps for one rule.
///
/// Stored in declaration order, executed in reverse: the step closest to the
/// source (last declared) runs first and feeds its output forward.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct LoaderPipeline {
    steps: Vec<LoaderStep>,
}

impl LoaderPipeline {
    /// Build from steps in declaration (output-first) order.
    pub fn declared_as<I, S>(steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<LoaderStep>,
    {
        Self {
            steps: steps.into_iter().map(Into::into).collect(),
        }
    }

    pub fn single(step: impl Into<LoaderStep>) -> Self {
        Self {
            steps: vec![step.into()],
        }
    }

    pub fn declared(&self) -> &[LoaderStep] {
        &self.steps
    }

    /// Steps in the order they run against a source file.
    pub fn execution_order(&self) -> impl DoubleEndedIterator<Item = &LoaderStep> + '_ {
        self.steps.iter().rev()
    }

    pub fn loaders_in_execution_order(&self) -> Vec<Loader> {
        self.execution_order().map(|step| step.loader).collect()
    }

    pub fn step(&self, loader: Loader) -> Option<&LoaderStep> {
        self.steps.iter().find(|step| step.loader == loader)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Matches files by path and routes them through a loader pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileRule {
    pub test: Pattern,

    /// Paths under this prefix are skipped even when `test` matches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<PathBuf>,

    #[serde(rename = "use")]
    pub pipeline: LoaderPipeline,
}

impl FileRule {
    pub fn new(test: Pattern, pipeline: LoaderPipeline) -> Self {
        Self {
            test,
            exclude: None,
            pipeline,
        }
    }

    pub fn excluding(mut self, prefix: impl Into<PathBuf>) -> Self {
        self.exclude = Some(prefix.into());
        self
    }

    pub fn is_excluded(&self, path: &Path) -> bool {
        self.exclude
            .as_deref()
            .is_some_and(|prefix| path.starts_with(prefix))
    }

    pub fn matches(&self, path: &Path) -> bool {
        self.test.matches_path(path) && !self.is_excluded(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn css_pipeline() -> LoaderPipeline {
        LoaderPipeline::declared_as([
            LoaderStep::with_options(Loader::MiniCssExtract, json!({ "publicPath": "css" })),
            Loader::Css.into(),
            Loader::PostCss.into(),
            Loader::Sass.into(),
        ])
    }

    #[test]
    fn execution_runs_last_declared_first() {
        let pipeline = css_pipeline();
        assert_eq!(pipeline.declared()[0].loader, Loader::MiniCssExtract);
        assert_eq!(
            pipeline.loaders_in_execution_order(),
            vec![
                Loader::Sass,
                Loader::PostCss,
                Loader::Css,
                Loader::MiniCssExtract
            ]
        );
    }

    #[test]
    fn pipeline_serializes_in_declared_order() {
        let value = serde_json::to_value(css_pipeline()).unwrap();
        assert_eq!(
            value,
            json!([
                { "loader": "mini-css-extract-plugin/loader", "options": { "publicPath": "css" } },
                { "loader": "css-loader" },
                { "loader": "postcss-loader" },
                { "loader": "sass-loader" }
            ])
        );
    }

    #[test]
    fn exclusion_is_a_path_prefix() {
        let rule = FileRule::new(
            Pattern::new(r"\.js?$").unwrap(),
            LoaderPipeline::single(Loader::Babel),
        )
        .excluding("/project/node_modules");

        assert!(rule.matches(Path::new("/project/src/app.js")));
        assert!(!rule.matches(Path::new("/project/node_modules/three/build/three.js")));
        // Sibling directory sharing the prefix text is not excluded
        assert!(rule.matches(Path::new("/project/node_modules_local/a.js")));
        assert!(!rule.matches(Path::new("/project/src/style.css")));
    }

    #[test]
    fn pattern_equality_uses_source() {
        assert_eq!(Pattern::new(r"\.css$").unwrap(), Pattern::new(r"\.css$").unwrap());
        assert_eq!(format!("{:?}", Pattern::new(r"\.css$").unwrap()), r"/\.css$/");
        assert!(Pattern::new("(").is_err());
    }
}
