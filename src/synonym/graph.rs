//! Relation graphs: raw word adjacency and precomputed chain tables.
//!
//! A [`RelationGraph`] maps every word to the short cycles ("chains") that
//! leave the word and come back to it through its synonyms. Chain tables are
//! normally produced offline, one per level, and handed to the scoring engine
//! read-only through a [`RelationGraphProvider`]. An [`AdjacencyGraph`] is the
//! plain word → neighbours relation the chains are derived from.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use ahash::AHashMap;
use log::{info, warn};

use crate::error::{MutaradifError, Result};
use crate::synonym::path::enumerate_cycles;

/// A cyclic path of words starting and ending at the same word.
pub type Chain = Vec<String>;

/// Word → ordered neighbour list.
///
/// Neighbour order is significant: it decides which cycles a bounded
/// enumeration finds.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    neighbors: AHashMap<String, Vec<String>>,
}

impl AdjacencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(word, neighbours)` entries.
    pub fn from_neighbors<I, K, N, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, N)>,
        K: Into<String>,
        N: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut graph = Self::new();
        for (word, neighbors) in entries {
            graph.insert(word, neighbors);
        }
        graph
    }

    /// Set the neighbour list of `word`, replacing any previous one.
    pub fn insert<K, N, S>(&mut self, word: K, neighbors: N)
    where
        K: Into<String>,
        N: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.neighbors.insert(
            word.into(),
            neighbors.into_iter().map(Into::into).collect(),
        );
    }

    /// Load an adjacency graph from a JSON object of `word -> [neighbour, ...]`.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let entries: HashMap<String, Vec<String>> = serde_json::from_str(&content)?;
        info!(
            "loaded adjacency graph with {} words from {}",
            entries.len(),
            path.display()
        );
        Ok(Self::from_neighbors(entries))
    }

    pub fn neighbors(&self, word: &str) -> Option<&[String]> {
        self.neighbors.get(word).map(Vec::as_slice)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.neighbors.contains_key(word)
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.neighbors.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}

/// Precomputed chain table for one level.
#[derive(Debug, Clone, Default)]
pub struct RelationGraph {
    chains: AHashMap<String, Vec<Chain>>,
}

impl RelationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a chain table from `(word, chains)` entries.
    pub fn from_chains<I, K, C, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<C>)>,
        K: Into<String>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut graph = Self::new();
        for (word, chains) in entries {
            let chains = chains
                .into_iter()
                .map(|chain| chain.into_iter().map(Into::into).collect())
                .collect();
            graph.chains.insert(word.into(), chains);
        }
        graph
    }

    /// Load a chain table from a JSON object of `word -> [[word, ...], ...]`.
    ///
    /// Empty chains are rejected. Chains whose endpoints differ are accepted
    /// but logged.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let graph = Self::from_json(&content)?;
        info!(
            "loaded relation graph with {} words and {} chains from {}",
            graph.len(),
            graph.chain_count(),
            path.display()
        );
        Ok(graph)
    }

    /// Parse a chain table from JSON text.
    pub fn from_json(content: &str) -> Result<Self> {
        let entries: HashMap<String, Vec<Chain>> = serde_json::from_str(content)?;

        for (word, chains) in &entries {
            for chain in chains {
                match (chain.first(), chain.last()) {
                    (Some(first), Some(last)) => {
                        if first != last {
                            warn!("chain {chain:?} of '{word}' does not return to its source");
                        }
                    }
                    _ => {
                        return Err(MutaradifError::graph(format!(
                            "empty chain in the chain list of '{word}'"
                        )));
                    }
                }
            }
        }

        Ok(Self {
            chains: entries.into_iter().collect(),
        })
    }

    /// Serialize the chain table as JSON with words in sorted order.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let sorted: BTreeMap<&String, &Vec<Chain>> = self.chains.iter().collect();
        let json = if pretty {
            serde_json::to_string_pretty(&sorted)?
        } else {
            serde_json::to_string(&sorted)?
        };
        Ok(json)
    }

    /// Derive a chain table from an adjacency graph.
    ///
    /// Every word of `adjacency` becomes a key. Its chains are the cycles
    /// found by [`enumerate_cycles`] with `max_len`, prefixed with the word
    /// itself and kept when they hold at most `max_len` words.
    pub fn derive(adjacency: &AdjacencyGraph, max_len: usize) -> Self {
        let mut graph = Self::new();
        for word in adjacency.words() {
            let chains = enumerate_cycles(adjacency, word, max_len)
                .map(|path| chain_from_path(word, &path))
                .filter(|chain| chain.len() <= max_len)
                .collect();
            graph.chains.insert(word.to_string(), chains);
        }
        graph
    }

    pub fn chains(&self, word: &str) -> Option<&[Chain]> {
        self.chains.get(word).map(Vec::as_slice)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.chains.contains_key(word)
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.chains.keys().map(String::as_str)
    }

    /// Number of words with a chain list.
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// Total number of chains over all words.
    pub fn chain_count(&self) -> usize {
        self.chains.values().map(Vec::len).sum()
    }
}

/// Prefix an enumerated path with its source word.
pub(crate) fn chain_from_path(source: &str, path: &[&str]) -> Chain {
    std::iter::once(source)
        .chain(path.iter().copied())
        .map(str::to_string)
        .collect()
}

/// Supplies the chain table used for a level.
pub trait RelationGraphProvider: Send + Sync {
    /// The chain table for `level`, or `None` when the level is unsupported.
    fn graph_for_level(&self, level: u32) -> Option<&RelationGraph>;
}

/// The stock provider: one chain table for level 2 and one for level 3.
#[derive(Debug, Clone, Default)]
pub struct LeveledGraphs {
    pub level2: RelationGraph,
    pub level3: RelationGraph,
}

impl LeveledGraphs {
    pub fn new(level2: RelationGraph, level3: RelationGraph) -> Self {
        Self { level2, level3 }
    }
}

impl RelationGraphProvider for LeveledGraphs {
    fn graph_for_level(&self, level: u32) -> Option<&RelationGraph> {
        match level {
            2 => Some(&self.level2),
            3 => Some(&self.level3),
            _ => None,
        }
    }
}

impl RelationGraphProvider for HashMap<u32, RelationGraph> {
    fn graph_for_level(&self, level: u32) -> Option<&RelationGraph> {
        self.get(&level)
    }
}
