//! # Mutaradif
//!
//! Synonym-graph expansion and fuzzy synset scoring for Arabic lexical
//! resources.
//!
//! ## Features
//!
//! - Bounded cycle enumeration over word relation graphs
//! - Candidate expansion of a synset with level-weighted fuzzy scores
//! - Leave-one-out evaluation of synset cohesion
//! - Parallel batch processing
//! - Jaccard comparison of word lists with Arabic diacritic normalization

pub mod cli;
pub mod config;
pub mod error;
pub mod similarity;
pub mod synonym;

pub mod prelude {
    pub use crate::config::ExpanderConfig;
    pub use crate::error::{MutaradifError, Result};
    pub use crate::synonym::{
        FuzzyScore, LevelOutcome, LeveledGraphs, RelationGraph, RelationGraphProvider,
        SynonymExpander, evaluate_synonyms, extend_synonyms,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
