//! Fuzzy scoring of candidate synonyms.
//!
//! A candidate's score blends two ratios: the share of collected chains that
//! pass through it, and the share of synset members that reach it. The
//! level's [`Weights`] decide the mix:
//!
//! ```text
//! score(w) = chain_freq(w) / total_chains * theta1
//!          + member_freq(w) / |synset|     * theta2
//! ```
//!
//! A ratio with a zero denominator contributes `0.0`.

use std::cmp::Ordering;

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::synonym::aggregate::Aggregation;
use crate::synonym::level::Weights;

/// A word with its fuzzy membership score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyScore {
    pub word: String,
    pub score: f64,
}

impl FuzzyScore {
    pub fn new<S: Into<String>>(word: S, score: f64) -> Self {
        FuzzyScore {
            word: word.into(),
            score,
        }
    }
}

impl Eq for FuzzyScore {}

impl Ord for FuzzyScore {
    /// Ranking order: higher scores first, ties by word in descending order.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| other.word.cmp(&self.word))
    }
}

impl PartialOrd for FuzzyScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn ratio(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

/// Score every candidate word of `aggregation` that is not in `synset`.
///
/// `synset` is the effective synset the aggregation was built from; its
/// length is the member-coverage denominator. The result is ranked.
pub fn score_candidates(level: u32, synset: &[String], aggregation: &Aggregation) -> Vec<FuzzyScore> {
    let weights = Weights::for_level(level);

    let mut chain_freq: AHashMap<&str, usize> = AHashMap::new();
    for chain in &aggregation.chains {
        let distinct: AHashSet<&str> = chain.iter().map(String::as_str).collect();
        for word in distinct {
            *chain_freq.entry(word).or_default() += 1;
        }
    }

    let mut member_freq: AHashMap<&str, usize> = AHashMap::new();
    for reached in aggregation.unique_candidates.values() {
        for word in reached {
            *member_freq.entry(word.as_str()).or_default() += 1;
        }
    }

    let mut scores: Vec<FuzzyScore> = aggregation
        .candidate_words
        .iter()
        .filter(|word| !synset.contains(*word))
        .map(|word| {
            let in_chains = chain_freq.get(word.as_str()).copied().unwrap_or(0);
            let in_members = member_freq.get(word.as_str()).copied().unwrap_or(0);
            let score = ratio(in_chains, aggregation.total_chain_count) * weights.theta1
                + ratio(in_members, synset.len()) * weights.theta2;
            FuzzyScore::new(word.clone(), score)
        })
        .collect();

    scores.sort();
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synonym::aggregate::aggregate;
    use crate::synonym::graph::RelationGraph;

    const EPSILON: f64 = 1e-12;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_score_formula() {
        let graph = RelationGraph::from_chains([
            ("a", vec![vec!["a", "b", "a"], vec!["a", "c", "a"]]),
            ("b", vec![vec!["b", "a", "b"]]),
        ]);
        let synset = words(&["a", "b"]);
        let scores = score_candidates(2, &synset, &aggregate(&graph, &synset));

        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].word, "c");
        let expected = (1.0 / 3.0) * 0.4 + (1.0 / 2.0) * 0.6;
        assert!((scores[0].score - expected).abs() < EPSILON);
    }

    #[test]
    fn test_ordering_breaks_ties_by_descending_word() {
        let mut scores = vec![
            FuzzyScore::new("alpha", 0.5),
            FuzzyScore::new("gamma", 0.9),
            FuzzyScore::new("beta", 0.5),
        ];
        scores.sort();

        let ranked: Vec<&str> = scores.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(ranked, vec!["gamma", "beta", "alpha"]);
    }

    #[test]
    fn test_tied_candidates_from_graph() {
        let graph = RelationGraph::from_chains([(
            "s",
            vec![vec!["s", "x", "s"], vec!["s", "y", "s"], vec!["s", "z", "s"]],
        )]);
        let synset = words(&["s"]);
        let scores = score_candidates(3, &synset, &aggregate(&graph, &synset));

        let ranked: Vec<&str> = scores.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(ranked, vec!["z", "y", "x"]);
        assert!(scores.windows(2).all(|pair| pair[0].score == pair[1].score));
    }

    #[test]
    fn test_chain_frequency_counts_chains_not_occurrences() {
        // "x" appears twice in the first chain but counts once.
        let graph = RelationGraph::from_chains([(
            "s",
            vec![vec!["s", "x", "y", "x", "s"], vec!["s", "y", "s"]],
        )]);
        let synset = words(&["s"]);
        let scores = score_candidates(2, &synset, &aggregate(&graph, &synset));

        let x = scores.iter().find(|s| s.word == "x").unwrap();
        let y = scores.iter().find(|s| s.word == "y").unwrap();
        assert!((x.score - (0.5 * 0.4 + 0.6)).abs() < EPSILON);
        assert!((y.score - (1.0 * 0.4 + 0.6)).abs() < EPSILON);
    }

    #[test]
    fn test_zero_denominators_score_zero() {
        let mut aggregation = Aggregation::default();
        aggregation.candidate_words.insert("orphan".to_string());

        let scores = score_candidates(2, &[], &aggregation);
        assert_eq!(scores, vec![FuzzyScore::new("orphan", 0.0)]);
    }

    #[test]
    fn test_unsupported_level_collapses_scores() {
        let graph = RelationGraph::from_chains([("a", vec![vec!["a", "b", "a"]])]);
        let synset = words(&["a"]);
        let scores = score_candidates(7, &synset, &aggregate(&graph, &synset));

        assert_eq!(scores, vec![FuzzyScore::new("b", 0.0)]);
    }

    #[test]
    fn test_level_four_weights() {
        let graph = RelationGraph::from_chains([("a", vec![vec!["a", "b", "a"], vec!["a", "c", "a"]])]);
        let synset = words(&["a"]);
        let scores = score_candidates(4, &synset, &aggregate(&graph, &synset));

        assert_eq!(scores.len(), 2);
        assert!(scores.iter().all(|s| (s.score - 0.75).abs() < EPSILON));
    }
}
