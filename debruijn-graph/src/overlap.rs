use crate::graph::DeBruijnGraph;
use crate::kmer::{prefix, suffix};
use std::collections::{HashMap, HashSet};

/// Builds the overlap graph of a collection of patterns.
///
/// There is an edge from `p` to every occurrence of a pattern `q != p` in the input with `suffix(p) == prefix(q)`.
/// Repeated patterns are a single node, but each of their occurrences is a separate edge target.
/// Sources are inserted in order of first occurrence, targets in input order.
pub fn overlap_graph<Pattern: AsRef<str>>(
    patterns: impl IntoIterator<Item = Pattern>,
) -> DeBruijnGraph<String> {
    let patterns: Vec<String> = patterns
        .into_iter()
        .map(|pattern| pattern.as_ref().to_owned())
        .collect();

    let mut patterns_by_prefix: HashMap<&str, Vec<&str>> = HashMap::new();
    for pattern in &patterns {
        patterns_by_prefix
            .entry(prefix(pattern))
            .or_default()
            .push(pattern);
    }

    let mut seen = HashSet::new();
    let adjacency_list: Vec<_> = patterns
        .iter()
        .filter(|pattern| seen.insert(pattern.as_str()))
        .map(|pattern| {
            let neighbors: Vec<String> = patterns_by_prefix
                .get(suffix(pattern))
                .into_iter()
                .flatten()
                .filter(|&&neighbor| neighbor != pattern.as_str())
                .map(|&neighbor| neighbor.to_owned())
                .collect();
            (pattern.clone(), neighbors)
        })
        .collect();

    let graph = DeBruijnGraph::from_adjacency_list(adjacency_list);
    debug!(
        "Built overlap graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    graph
}
