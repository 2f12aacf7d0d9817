//! Synset parsing and resolution against a relation graph.

use log::debug;

use crate::synonym::graph::RelationGraph;

/// Default delimiter between synset members.
pub const DEFAULT_DELIMITER: char = '|';

/// Split a synset string into trimmed members.
///
/// Empty entries are kept; they can never match a graph key and are dropped
/// when the synset is resolved.
pub fn parse_synset(synset: &str, delimiter: char) -> Vec<String> {
    synset
        .split(delimiter)
        .map(|member| member.trim().to_string())
        .collect()
}

/// Keep only the members that are keys of `graph`, in input order.
///
/// Unknown members are dropped silently; duplicates are retained.
pub fn effective_synset(members: &[String], graph: &RelationGraph) -> Vec<String> {
    members
        .iter()
        .filter(|member| {
            let known = graph.contains(member);
            if !known {
                debug!("dropping synset member '{member}' absent from relation graph");
            }
            known
        })
        .cloned()
        .collect()
}
