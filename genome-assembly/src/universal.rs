use crate::error::{ErrorKind, Result};
use crate::spelling::circular_path_to_string;
use debruijn_graph::algo::eulerian::eulerian_cycle;
use debruijn_graph::DeBruijnGraph;
use itertools::Itertools;

/// Returns all `2^k` strings of length `k` over the alphabet {0, 1} in lexicographic order.
pub fn binary_kmers(k: usize) -> Vec<String> {
    itertools::repeat_n("01".chars(), k)
        .multi_cartesian_product()
        .map(|characters| characters.into_iter().collect())
        .collect()
}

/// Computes a k-universal circular binary string, i.e. a circular string of length `2^k`
/// that contains every binary k-mer exactly once.
///
/// The string is spelled from a Eulerian cycle of the De Bruijn graph of all binary k-mers.
pub fn k_universal_circular_string(k: usize) -> Result<String> {
    ensure!(
        k >= 2,
        ErrorKind::MalformedInput(format!(
            "a universal string needs k-mers with at least two characters, but k is {}",
            k
        ))
    );
    ensure!(
        k < usize::BITS as usize,
        ErrorKind::MalformedInput(format!(
            "a {}-universal string is too long to be represented",
            k
        ))
    );
    let target_length = 1usize << k;

    let graph = DeBruijnGraph::from_kmers(binary_kmers(k));
    info!(
        "Computing a {}-universal circular string from a De Bruijn graph with {} nodes and {} edges",
        k,
        graph.node_count(),
        graph.edge_count()
    );

    let cycle = eulerian_cycle(&graph)?;
    Ok(circular_path_to_string(&cycle, k, target_length))
}
