//! Synonym-graph expansion and synset evaluation.
//!
//! A synset is a small group of words meant to be mutual synonyms. Expansion
//! proposes new members for it; evaluation measures how well each existing
//! member is supported by the others. Both work on relation graphs that map
//! every word to short cycles through its synonyms ("chains"), one graph per
//! level of cycle length.
//!
//! # Components
//!
//! - [`path`] - bounded enumeration of cycles through an adjacency graph
//! - [`graph`] - chain tables, adjacency graphs and per-level providers
//! - [`aggregate`] - collection of a synset's chains and reached candidates
//! - [`scoring`] - fuzzy scoring and ranking of candidates
//! - [`evaluate`] - leave-one-out scoring of synset members
//! - [`expander`] - string-level entry points and the batch expander
//!
//! # Examples
//!
//! ```
//! use mutaradif::synonym::{LeveledGraphs, RelationGraph, extend_synonyms};
//!
//! let level2 = RelationGraph::from_chains([
//!     ("A", vec![vec!["A", "B", "A"], vec!["A", "C", "A"]]),
//!     ("B", vec![vec!["B", "A", "B"]]),
//! ]);
//! let graphs = LeveledGraphs::new(level2, RelationGraph::new());
//!
//! let candidates = extend_synonyms(&graphs, "A|B", 2).ok().unwrap();
//! assert_eq!(candidates[0].word, "C");
//! ```

pub mod aggregate;
pub mod evaluate;
pub mod expander;
pub mod graph;
pub mod level;
pub mod path;
pub mod scoring;
pub mod synset;

pub use aggregate::{Aggregation, aggregate, aggregate_adjacency};
pub use evaluate::evaluate_synset;
pub use expander::{SynonymExpander, evaluate_synonyms, extend_synonyms};
pub use graph::{AdjacencyGraph, Chain, LeveledGraphs, RelationGraph, RelationGraphProvider};
pub use level::{LevelOutcome, Weights};
pub use path::enumerate_cycles;
pub use scoring::{FuzzyScore, score_candidates};
pub use synset::{effective_synset, parse_synset};
