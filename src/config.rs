//! Configuration for the synonym expander.
//!
//! Settings can be read from a JSON file; every field is optional in the file
//! and falls back to [`ExpanderConfig::default`]. Command-line flags override
//! file values.
//!
//! ```json
//! {
//!   "level2_graph": "graphs/level2.json",
//!   "level3_graph": "graphs/level3.json",
//!   "default_level": 3,
//!   "max_results": 20,
//!   "min_score": 0.1
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MutaradifError, Result};
use crate::synonym::level::SUPPORTED_LEVELS;
use crate::synonym::synset::DEFAULT_DELIMITER;

/// Configuration for [`SynonymExpander`](crate::synonym::SynonymExpander).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpanderConfig {
    /// Path to the level 2 chain table (JSON).
    pub level2_graph: Option<PathBuf>,
    /// Path to the level 3 chain table (JSON).
    pub level3_graph: Option<PathBuf>,
    /// Level used when a command does not name one.
    pub default_level: u32,
    /// Maximum number of expansion candidates to return.
    pub max_results: Option<usize>,
    /// Candidates scoring below this are dropped from expansions.
    pub min_score: f64,
    /// Delimiter between synset members.
    pub delimiter: char,
}

impl Default for ExpanderConfig {
    fn default() -> Self {
        ExpanderConfig {
            level2_graph: None,
            level3_graph: None,
            default_level: 2,
            max_results: None,
            min_score: 0.0,
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl ExpanderConfig {
    /// Load a configuration from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            MutaradifError::config(format!(
                "Failed to read configuration file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: ExpanderConfig = serde_json::from_str(&content).map_err(|e| {
            MutaradifError::config(format!(
                "Failed to parse configuration JSON from '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Configured chain table path for a level, if the level has one.
    pub fn graph_path(&self, level: u32) -> Option<&Path> {
        match level {
            2 => self.level2_graph.as_deref(),
            3 => self.level3_graph.as_deref(),
            _ => None,
        }
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if !SUPPORTED_LEVELS.contains(&self.default_level) {
            return Err(MutaradifError::config(format!(
                "default_level must be one of {:?}, got {}",
                SUPPORTED_LEVELS, self.default_level
            )));
        }
        if !(0.0..=1.0).contains(&self.min_score) {
            return Err(MutaradifError::config(format!(
                "min_score must be within [0, 1], got {}",
                self.min_score
            )));
        }
        if self.max_results == Some(0) {
            return Err(MutaradifError::config("max_results must be positive"));
        }
        if self.delimiter.is_whitespace() {
            return Err(MutaradifError::config(
                "delimiter cannot be whitespace; synset members are trimmed",
            ));
        }
        Ok(())
    }
}
