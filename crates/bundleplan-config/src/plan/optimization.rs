use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;

use super::plugin::Minimizer;
use super::rules::Pattern;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Optimization {
    pub minimizer: Vec<Minimizer>,
    pub runtime_chunk: RuntimeChunk,
    pub split_chunks: SplitChunks,
}

/// Where the bundler's own bootstrap code goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeChunk {
    /// One runtime chunk shared by every entry
    Single,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitChunks {
    /// Keyed by group id, kept in declaration order
    pub cache_groups: IndexMap<String, CacheGroup>,
}

impl SplitChunks {
    /// Ids of every group whose test matches `module_path`, in declaration order.
    pub fn groups_for(&self, module_path: &Path) -> Vec<&str> {
        self.cache_groups
            .iter()
            .filter(|(_, group)| group.matches(module_path))
            .map(|(id, _)| id.as_str())
            .collect()
    }
}

/// Which chunks a group may pull modules out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkSelection {
    All,
}

/// Collects matched modules into a separately emitted chunk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheGroup {
    pub test: Pattern,
    /// Output chunk name
    pub name: String,
    pub chunks: ChunkSelection,
    /// Emit the chunk even when it falls under the size thresholds
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub enforce: bool,
}

impl CacheGroup {
    pub fn matches(&self, module_path: &Path) -> bool {
        self.test.matches_path(module_path)
    }
}
