use crate::spelling::path_to_string;
use debruijn_graph::algo::non_branching_paths::maximal_non_branching_paths;
use debruijn_graph::DeBruijnGraph;

/// Generates the contigs of a collection of k-mers: the spellings of all maximal non-branching paths
/// of their De Bruijn graph, sorted lexicographically.
pub fn generate_contigs<Kmer: AsRef<str>>(kmers: impl IntoIterator<Item = Kmer>) -> Vec<String> {
    let graph = DeBruijnGraph::from_kmers(kmers);
    info!(
        "Generating contigs of a De Bruijn graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let mut contigs: Vec<_> = maximal_non_branching_paths(&graph)
        .iter()
        .map(|path| path_to_string(path))
        .collect();
    contigs.sort_unstable();
    contigs
}

#[cfg(test)]
mod tests {
    use super::generate_contigs;
    use debruijn_graph::kmer::composition;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_generate_contigs() {
        assert_eq!(
            generate_contigs(vec!["ATG", "ATG", "TGT", "TGG", "CAT", "GGA", "GAT", "AGA"]),
            vec!["AGA", "ATG", "ATG", "CAT", "GAT", "TGGA", "TGT"]
        );
        assert!(generate_contigs(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_circular_genome_is_one_contig() {
        assert_eq!(generate_contigs(vec!["ACG", "CGT", "GTA", "TAC"]), vec!["ACGTAC"]);
    }

    #[test]
    fn test_contigs_cover_every_kmer() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..30 {
            let length: usize = rng.gen_range(5..300);
            let genome: String = (0..length)
                .map(|_| ['A', 'C', 'G', 'T'][rng.gen_range(0..4)])
                .collect();
            let k = rng.gen_range(3..=length.min(10));
            let kmers = composition(&genome, k).unwrap();

            let contigs = generate_contigs(&kmers);
            let mut contig_kmers: Vec<_> = contigs
                .iter()
                .flat_map(|contig| composition(contig, k).unwrap())
                .collect();
            let mut expected_kmers = kmers.clone();
            contig_kmers.sort_unstable();
            expected_kmers.sort_unstable();
            assert_eq!(contig_kmers, expected_kmers);
        }
    }
}
