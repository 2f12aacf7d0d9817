//! Bounded enumeration of simple cycles through an adjacency graph.

use crate::synonym::graph::AdjacencyGraph;

/// Lazily enumerate the simple paths that lead from `start` back to `start`.
///
/// Each yielded path excludes the leading `start` and ends with it, so the
/// chain it describes is `[start] + path`. The search is depth-first over an
/// explicit stack, most recently pushed branch first. `max_len - 2` bounds the
/// depth: once the path leading to a word is longer than that, only the first
/// entry of the word's neighbour list is considered.
///
/// A `start` that is not in the graph yields nothing.
pub fn enumerate_cycles<'a>(graph: &'a AdjacencyGraph, start: &'a str, max_len: usize) -> Cycles<'a> {
    Cycles::new(graph, start, max_len)
}

/// Iterator returned by [`enumerate_cycles`].
pub struct Cycles<'a> {
    graph: &'a AdjacencyGraph,
    start: &'a str,
    depth_bound: isize,
    stack: Vec<(&'a str, Vec<&'a str>)>,
}

impl<'a> Cycles<'a> {
    fn new(graph: &'a AdjacencyGraph, start: &'a str, max_len: usize) -> Self {
        let stack = if graph.contains(start) {
            vec![(start, Vec::new())]
        } else {
            Vec::new()
        };

        Cycles {
            graph,
            start,
            depth_bound: isize::try_from(max_len)
                .unwrap_or(isize::MAX)
                .saturating_sub(2),
            stack,
        }
    }
}

impl<'a> Iterator for Cycles<'a> {
    type Item = Vec<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((state, path)) = self.stack.pop() {
            if !path.is_empty() && state == self.start {
                return Some(path);
            }

            let Some(neighbors) = self.graph.neighbors(state) else {
                continue;
            };

            for next in neighbors {
                let next = next.as_str();
                if !path.contains(&next) {
                    let mut extended = Vec::with_capacity(path.len() + 1);
                    extended.extend_from_slice(&path);
                    extended.push(next);
                    self.stack.push((next, extended));
                }

                // Over the bound, the scan stops after the first neighbour.
                if path.len() as isize > self.depth_bound {
                    break;
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(graph: &AdjacencyGraph, start: &str, max_len: usize) -> Vec<Vec<String>> {
        enumerate_cycles(graph, start, max_len)
            .map(|path| path.into_iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn test_missing_start_yields_nothing() {
        let graph = AdjacencyGraph::from_neighbors([("a", vec!["b"])]);
        assert!(collect(&graph, "zzz", 4).is_empty());
    }

    #[test]
    fn test_two_cycle() {
        let graph = AdjacencyGraph::from_neighbors([("a", vec!["b"]), ("b", vec!["a"])]);
        assert_eq!(collect(&graph, "a", 3), vec![vec!["b", "a"]]);
    }

    #[test]
    fn test_self_loop() {
        let graph = AdjacencyGraph::from_neighbors([("a", vec!["a"])]);
        assert_eq!(collect(&graph, "a", 2), vec![vec!["a"]]);
    }

    #[test]
    fn test_lifo_order_and_truncation() {
        let graph = AdjacencyGraph::from_neighbors([
            ("a", vec!["b", "c"]),
            ("b", vec!["a", "c"]),
            ("c", vec!["a", "b"]),
        ]);

        // Bound 1: two-word paths scan only their first neighbour.
        let cycles = collect(&graph, "a", 3);
        assert_eq!(
            cycles,
            vec![
                vec!["c", "b", "a"],
                vec!["c", "a"],
                vec!["b", "c", "a"],
                vec!["b", "a"],
            ]
        );
    }

    #[test]
    fn test_truncation_depends_on_neighbor_order() {
        // "b" lists "c" first, so once over the bound the direct return to
        // "a" is never pushed from "b".
        let graph = AdjacencyGraph::from_neighbors([
            ("a", vec!["b"]),
            ("b", vec!["c", "a"]),
            ("c", vec!["a"]),
        ]);

        assert_eq!(collect(&graph, "a", 2), vec![vec!["b", "c", "a"]]);
        assert_eq!(
            collect(&graph, "a", 3),
            vec![vec!["b", "a"], vec!["b", "c", "a"]]
        );
    }

    #[test]
    fn test_huge_max_len_is_unbounded() {
        let graph = AdjacencyGraph::from_neighbors([
            ("a", vec!["b"]),
            ("b", vec!["c", "a"]),
            ("c", vec!["a"]),
        ]);

        assert_eq!(collect(&graph, "a", usize::MAX), collect(&graph, "a", 3));
        assert_eq!(collect(&graph, "a", usize::MAX).len(), 2);
    }

    #[test]
    fn test_unknown_interior_word_is_a_dead_end() {
        let graph = AdjacencyGraph::from_neighbors([("a", vec!["x", "b"]), ("b", vec!["a"])]);
        assert_eq!(collect(&graph, "a", 4), vec![vec!["b", "a"]]);
    }

    #[test]
    fn test_restartable() {
        let graph = AdjacencyGraph::from_neighbors([("a", vec!["b"]), ("b", vec!["a"])]);
        assert_eq!(collect(&graph, "a", 3), collect(&graph, "a", 3));
    }
}
