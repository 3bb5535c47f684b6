//! Configuration loading and management

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Default bound on fragment nesting along one recursion path
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Configuration for field collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectorConfig {
    /// Maximum number of nested inline fragments and fragment spreads
    /// entered along one path of a single collection call
    ///
    /// `parse_document` already rejects nesting far shallower than the default,
    /// so the default only bites for ASTs built by hand; documents from the
    /// parser reach the limit only when it is configured lower.
    pub max_depth: usize,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CollectorConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Set the maximum fragment nesting depth
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
