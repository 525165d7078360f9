use crate::algo::degree::Degrees;
use crate::graph::{DeBruijnGraph, NodeId};
use bitvector::BitVector;

/// Computes all maximal non-branching paths of the graph as sequences of node indices.
///
/// A node is non-branching if it has indegree and outdegree one.
/// From every branching node with outgoing edges, one path is started per outgoing edge and extended
/// through non-branching nodes up to and including the next branching node.
/// Non-branching nodes that are not covered by these paths form isolated cycles,
/// each of which is reported once as a closed path whose first node equals its last node.
///
/// Every edge of the graph is contained in exactly one path.
pub fn maximal_non_branching_path_ids<Node>(graph: &DeBruijnGraph<Node>) -> Vec<Vec<NodeId>> {
    let degrees = Degrees::compute(graph);
    let mut visited = BitVector::new(graph.node_count());
    let mut paths = Vec::new();

    for node_id in graph.node_ids() {
        if degrees.is_biunivocal(node_id) || degrees.out_degree(node_id) == 0 {
            continue;
        }

        for neighbor in graph.out_neighbors(node_id) {
            let mut path = vec![node_id, neighbor];
            let mut current_node = neighbor;

            while degrees.is_biunivocal(current_node) {
                visited.insert(current_node.index());
                current_node = graph.out_neighbors(current_node)[0];
                path.push(current_node);
            }

            trace!("Found non-branching path with {} edges", path.len() - 1);
            paths.push(path);
        }
    }

    for node_id in graph.node_ids() {
        if !degrees.is_biunivocal(node_id) || visited.contains(node_id.index()) {
            continue;
        }

        // The node is unreachable from any branching node, so its component is a cycle of non-branching nodes.
        visited.insert(node_id.index());
        let mut cycle = vec![node_id];
        let mut current_node = graph.out_neighbors(node_id)[0];

        while current_node != node_id {
            visited.insert(current_node.index());
            cycle.push(current_node);
            current_node = graph.out_neighbors(current_node)[0];
        }

        cycle.push(node_id);
        trace!("Found isolated cycle with {} edges", cycle.len() - 1);
        paths.push(cycle);
    }

    debug!("Found {} maximal non-branching paths", paths.len());
    paths
}

/// Computes all maximal non-branching paths of the graph.
/// See [`maximal_non_branching_path_ids`] for details.
pub fn maximal_non_branching_paths<Node: Clone>(graph: &DeBruijnGraph<Node>) -> Vec<Vec<Node>> {
    maximal_non_branching_path_ids(graph)
        .into_iter()
        .map(|path| {
            path.into_iter()
                .map(|node_id| graph.node(node_id).clone())
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::maximal_non_branching_paths;
    use crate::graph::DeBruijnGraph;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_paths_and_isolated_cycle() {
        let graph = DeBruijnGraph::from_adjacency_list(vec![
            (1, vec![2]),
            (2, vec![3]),
            (3, vec![4, 5]),
            (6, vec![7]),
            (7, vec![6]),
        ]);
        assert_eq!(
            maximal_non_branching_paths(&graph),
            vec![vec![1, 2, 3], vec![3, 4], vec![3, 5], vec![6, 7, 6]]
        );
    }

    #[test]
    fn test_parallel_edges() {
        let graph = DeBruijnGraph::from_kmers(vec!["ATG", "ATG", "TGT"]);
        let paths = maximal_non_branching_paths(&graph);
        assert_eq!(
            paths,
            vec![
                vec!["AT".to_owned(), "TG".to_owned()],
                vec!["AT".to_owned(), "TG".to_owned()],
                vec!["TG".to_owned(), "GT".to_owned()],
            ]
        );
    }

    #[test]
    fn test_single_cycle() {
        let graph = DeBruijnGraph::from_adjacency_list(vec![(0, vec![1]), (1, vec![2]), (2, vec![0])]);
        assert_eq!(maximal_non_branching_paths(&graph), vec![vec![0, 1, 2, 0]]);
    }

    #[test]
    fn test_empty_graph() {
        let graph = DeBruijnGraph::from_kmers(Vec::<String>::new());
        assert!(maximal_non_branching_paths(&graph).is_empty());
    }

    #[test]
    fn test_every_edge_is_covered_once() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..30 {
            let kmer_count = rng.gen_range(1..150);
            let kmers: Vec<String> = (0..kmer_count)
                .map(|_| {
                    (0..4)
                        .map(|_| ['A', 'C', 'G', 'T'][rng.gen_range(0..4)])
                        .collect()
                })
                .collect();
            let graph = DeBruijnGraph::from_kmers(&kmers);

            let paths = maximal_non_branching_paths(&graph);
            let mut path_edges: Vec<_> = paths
                .iter()
                .flat_map(|path| path.windows(2).map(|pair| (pair[0].clone(), pair[1].clone())))
                .collect();
            let mut graph_edges: Vec<_> = graph
                .edges()
                .map(|(from, to)| (graph.node(from).clone(), graph.node(to).clone()))
                .collect();
            path_edges.sort();
            graph_edges.sort();
            assert_eq!(path_edges, graph_edges);
        }
    }
}
