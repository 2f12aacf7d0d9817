//! Leave-one-out evaluation of synset members.
//!
//! Each member is removed in turn and the remaining members are asked to
//! re-derive it as a candidate. A member the rest of the synset cannot reach
//! scores `0.0`; a member every remaining chain passes through scores close to
//! `1.0`.

use log::debug;

use crate::synonym::aggregate::aggregate;
use crate::synonym::graph::RelationGraph;
use crate::synonym::scoring::{FuzzyScore, score_candidates};

/// Score every member of an effective synset against the rest of it.
///
/// `synset` must already be resolved against `graph`. Returns `None` when it
/// holds fewer than two members. A duplicated member is scored once per
/// occurrence.
pub fn evaluate_synset(graph: &RelationGraph, level: u32, synset: &[String]) -> Option<Vec<FuzzyScore>> {
    if synset.len() < 2 {
        return None;
    }

    let full = aggregate(graph, synset);

    let mut results: Vec<FuzzyScore> = synset
        .iter()
        .enumerate()
        .map(|(position, member)| {
            let mut remaining = synset.to_vec();
            remaining.remove(position);

            let reduced = full.without_source(member);
            let score = score_candidates(level, &remaining, &reduced)
                .into_iter()
                .find(|candidate| candidate.word == *member)
                .map(|candidate| candidate.score)
                .unwrap_or(0.0);

            debug!(
                "member '{member}' scores {score} from {} remaining chains",
                reduced.total_chain_count
            );
            FuzzyScore::new(member.clone(), score)
        })
        .collect();

    results.sort();
    Some(results)
}
