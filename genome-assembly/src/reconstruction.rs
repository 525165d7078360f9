use crate::error::Result;
use crate::spelling::{gapped_patterns_from_path, path_to_string, spell_gapped_patterns};
use debruijn_graph::algo::eulerian::eulerian_path;
use debruijn_graph::{DeBruijnGraph, ReadPair};

/// Reconstructs a string from its k-mer composition by spelling a Eulerian path of its De Bruijn graph.
///
/// If the graph has more than one Eulerian path, the one found deterministically by
/// [`eulerian_path`] is spelled. No k-mers yield the empty string.
pub fn string_reconstruction<Kmer: AsRef<str>>(
    kmers: impl IntoIterator<Item = Kmer>,
) -> Result<String> {
    let graph = DeBruijnGraph::from_kmers(kmers);
    info!(
        "Reconstructing string from a De Bruijn graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let path = eulerian_path(&graph)?;
    debug!("Found Eulerian path with {} nodes", path.len());
    Ok(path_to_string(&path))
}

/// Reconstructs a string from its (k,d)-mers by spelling a Eulerian path of their paired De Bruijn graph.
///
/// The path is turned back into a sequence of gapped patterns, which is spelled by
/// [`spell_gapped_patterns`]. Fails with `Inconsistent` if the path found does not spell a consistent string.
pub fn string_reconstruction_from_read_pairs(
    read_pairs: &[ReadPair],
    k: usize,
    d: usize,
) -> Result<String> {
    let graph = DeBruijnGraph::from_read_pairs(read_pairs);
    info!(
        "Reconstructing string from a paired De Bruijn graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let path = eulerian_path(&graph)?;
    let patterns = gapped_patterns_from_path(&path);
    debug!("Found Eulerian path spelling {} gapped patterns", patterns.len());
    spell_gapped_patterns(&patterns, k, d)
}
