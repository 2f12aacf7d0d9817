//! Candidate aggregation over the chains of a synset.

use ahash::{AHashMap, AHashSet};

use crate::synonym::graph::{AdjacencyGraph, Chain, RelationGraph, chain_from_path};
use crate::synonym::path::enumerate_cycles;

/// Chains and candidate words collected for a synset.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    /// Every chain contributed by every member, in member order. Chains shared
    /// by several members appear once per member.
    pub chains: Vec<Chain>,
    /// Distinct words reached by each member through its own chains.
    pub unique_candidates: AHashMap<String, AHashSet<String>>,
    /// Distinct words over all chains.
    pub candidate_words: AHashSet<String>,
    /// Sum of the per-member chain list lengths.
    pub total_chain_count: usize,
}

impl Aggregation {
    fn add_chain(&mut self, member: &str, chain: &Chain) {
        let reached = self.unique_candidates.entry(member.to_string()).or_default();
        for word in chain {
            reached.insert(word.clone());
            self.candidate_words.insert(word.clone());
        }
    }

    /// A fresh aggregation without the chains sourced at `member` and without
    /// `member`'s own candidate set.
    ///
    /// A chain is sourced at `member` when `member` is its first word. The
    /// chain total becomes the number of remaining chains.
    pub fn without_source(&self, member: &str) -> Aggregation {
        let chains: Vec<Chain> = self
            .chains
            .iter()
            .filter(|chain| chain.first().map(String::as_str) != Some(member))
            .cloned()
            .collect();

        let unique_candidates = self
            .unique_candidates
            .iter()
            .filter(|(source, _)| source.as_str() != member)
            .map(|(source, reached)| (source.clone(), reached.clone()))
            .collect();

        let candidate_words = chains.iter().flatten().cloned().collect();

        Aggregation {
            total_chain_count: chains.len(),
            chains,
            unique_candidates,
            candidate_words,
        }
    }
}

/// Collect the chains of every member of `synset` from a precomputed table.
///
/// `synset` is expected to hold only words known to `graph`; unknown words
/// contribute nothing.
pub fn aggregate(graph: &RelationGraph, synset: &[String]) -> Aggregation {
    let mut aggregation = Aggregation::default();

    for member in synset {
        let Some(chains) = graph.chains(member) else {
            continue;
        };

        aggregation.unique_candidates.insert(member.clone(), AHashSet::new());
        aggregation.total_chain_count += chains.len();
        for chain in chains {
            aggregation.add_chain(member, chain);
            aggregation.chains.push(chain.clone());
        }
    }

    aggregation
}

/// Collect chains for `synset` by enumerating cycles in an adjacency graph.
///
/// Only cycles of at most `max_len` words are kept as chains, while every
/// enumerated cycle, kept or not, feeds its member's candidate set. Members
/// missing from `adjacency` are skipped.
pub fn aggregate_adjacency(
    adjacency: &AdjacencyGraph,
    synset: &[String],
    max_len: usize,
) -> Aggregation {
    let mut aggregation = Aggregation::default();

    for member in synset {
        if !adjacency.contains(member) {
            continue;
        }

        aggregation.unique_candidates.insert(member.clone(), AHashSet::new());
        for path in enumerate_cycles(adjacency, member, max_len) {
            let chain = chain_from_path(member, &path);
            let reached = aggregation
                .unique_candidates
                .entry(member.clone())
                .or_default();
            reached.extend(chain.iter().cloned());

            if chain.len() <= max_len {
                aggregation.candidate_words.extend(chain.iter().cloned());
                aggregation.chains.push(chain);
            }
        }
    }

    aggregation.total_chain_count = aggregation.chains.len();
    aggregation
}
