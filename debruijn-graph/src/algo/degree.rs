use crate::graph::{DeBruijnGraph, NodeId};
use std::collections::HashMap;

/// The indegree and outdegree of every node of a graph.
///
/// Degrees are derived from the edges of the graph in a single pass and are not kept in sync with it.
/// Nodes that are not part of the graph have degree zero.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Degrees {
    in_degrees: Vec<usize>,
    out_degrees: Vec<usize>,
}

impl Degrees {
    /// Computes the degrees of all nodes of the graph.
    pub fn compute<Node>(graph: &DeBruijnGraph<Node>) -> Self {
        let mut in_degrees = vec![0; graph.node_count()];
        let mut out_degrees = vec![0; graph.node_count()];

        for (from_node, to_node) in graph.edges() {
            out_degrees[from_node.index()] += 1;
            in_degrees[to_node.index()] += 1;
        }

        Self {
            in_degrees,
            out_degrees,
        }
    }

    /// Returns the indegree of a node.
    pub fn in_degree(&self, node_id: NodeId) -> usize {
        self.in_degrees.get(node_id.index()).copied().unwrap_or(0)
    }

    /// Returns the outdegree of a node.
    pub fn out_degree(&self, node_id: NodeId) -> usize {
        self.out_degrees.get(node_id.index()).copied().unwrap_or(0)
    }

    /// Returns outdegree - indegree of a node.
    pub fn difference(&self, node_id: NodeId) -> isize {
        self.out_degree(node_id) as isize - self.in_degree(node_id) as isize
    }

    /// Returns true if the given node has indegree == 1 and outdegree == 1.
    pub fn is_biunivocal(&self, node_id: NodeId) -> bool {
        self.in_degree(node_id) == 1 && self.out_degree(node_id) == 1
    }

    /// Returns the sum of all indegrees.
    pub fn total_in_degree(&self) -> usize {
        self.in_degrees.iter().sum()
    }

    /// Returns the sum of all outdegrees.
    pub fn total_out_degree(&self) -> usize {
        self.out_degrees.iter().sum()
    }
}

/// Computes the indegree and outdegree of every node that is the tail or head of an edge,
/// keyed by node value.
pub fn degrees<Node: std::hash::Hash + Eq>(
    graph: &DeBruijnGraph<Node>,
) -> (HashMap<&Node, usize>, HashMap<&Node, usize>) {
    let degrees = Degrees::compute(graph);
    let mut in_degrees = HashMap::new();
    let mut out_degrees = HashMap::new();

    for node_id in graph.node_ids() {
        let node = graph.node(node_id);
        in_degrees.insert(node, degrees.in_degree(node_id));
        out_degrees.insert(node, degrees.out_degree(node_id));
    }

    (in_degrees, out_degrees)
}

/// Returns true if every node has indegree == outdegree, i.e. if each weakly connected component has a Eulerian cycle.
pub fn decomposes_into_eulerian_cycles<Node>(graph: &DeBruijnGraph<Node>) -> bool {
    find_non_eulerian_nodes_with_differences(graph).is_empty()
}

/// Compute a vector of tuples of nodes and outdegree - indegree for all nodes with indegree != outdegree.
/// The nodes are ordered by insertion order.
pub fn find_non_eulerian_nodes_with_differences<Node>(
    graph: &DeBruijnGraph<Node>,
) -> Vec<(NodeId, isize)> {
    let degrees = Degrees::compute(graph);
    graph
        .node_ids()
        .map(|node_id| (node_id, degrees.difference(node_id)))
        .filter(|&(_, difference)| difference != 0)
        .collect()
}

/// Returns true if every node has indegree == outdegree.
pub fn is_balanced<Node>(graph: &DeBruijnGraph<Node>) -> bool {
    decomposes_into_eulerian_cycles(graph)
}

/// Returns the value and outdegree - indegree of every node with indegree != outdegree, in insertion order.
pub fn unbalanced_nodes<Node>(graph: &DeBruijnGraph<Node>) -> Vec<(&Node, isize)> {
    find_non_eulerian_nodes_with_differences(graph)
        .into_iter()
        .map(|(node_id, difference)| (graph.node(node_id), difference))
        .collect()
}

/// Returns true if the degrees of the graph allow a Eulerian path:
/// either all nodes are balanced, or exactly one node has one more outgoing than incoming edge,
/// exactly one node has one more incoming than outgoing edge, and all other nodes are balanced.
///
/// Connectivity is not checked.
pub fn has_eulerian_path_degrees<Node>(graph: &DeBruijnGraph<Node>) -> bool {
    let differences = find_non_eulerian_nodes_with_differences(graph);
    match differences.as_slice() {
        [] => true,
        [(_, first), (_, second)] => {
            (*first == 1 && *second == -1) || (*first == -1 && *second == 1)
        }
        _ => false,
    }
}

/// Returns the node a Eulerian traversal should start at.
///
/// This is the first node with outdegree - indegree == 1 if there is one.
/// Otherwise it is the first node with outgoing edges, which is the start of a Eulerian cycle if the graph has one.
/// Returns `None` if the graph has no edges.
pub fn find_start_node_id<Node>(graph: &DeBruijnGraph<Node>) -> Option<NodeId> {
    let degrees = Degrees::compute(graph);
    graph
        .node_ids()
        .find(|&node_id| degrees.difference(node_id) == 1)
        .or_else(|| {
            graph
                .node_ids()
                .find(|&node_id| degrees.out_degree(node_id) > 0)
        })
}

/// Like [`find_start_node_id`], but returns the value of the start node.
pub fn find_start_node<Node>(graph: &DeBruijnGraph<Node>) -> Option<&Node> {
    find_start_node_id(graph).map(|node_id| graph.node(node_id))
}

#[cfg(test)]
mod tests {
    use super::{
        decomposes_into_eulerian_cycles, degrees, find_non_eulerian_nodes_with_differences,
        find_start_node, has_eulerian_path_degrees, is_balanced, unbalanced_nodes, Degrees,
    };
    use crate::graph::DeBruijnGraph;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn cycle_graph() -> DeBruijnGraph<u32> {
        DeBruijnGraph::from_adjacency_list(vec![
            (0, vec![3]),
            (1, vec![0]),
            (2, vec![1, 6]),
            (3, vec![2]),
            (4, vec![2]),
            (5, vec![4]),
            (6, vec![5, 8]),
            (7, vec![9]),
            (8, vec![7]),
            (9, vec![6]),
        ])
    }

    #[test]
    fn test_degrees_of_cycle_graph() {
        let graph = cycle_graph();
        let (in_degrees, out_degrees) = degrees(&graph);
        assert_eq!(in_degrees[&2], 2);
        assert_eq!(out_degrees[&2], 2);
        assert_eq!(in_degrees[&6], 2);
        assert_eq!(out_degrees[&7], 1);
        assert!(decomposes_into_eulerian_cycles(&graph));
        assert!(has_eulerian_path_degrees(&graph));
        assert_eq!(find_start_node(&graph), Some(&0));
    }

    #[test]
    fn test_start_node_of_path_graph() {
        let graph = DeBruijnGraph::from_adjacency_list(vec![
            (0, vec![2]),
            (1, vec![3]),
            (2, vec![1]),
            (3, vec![0, 4]),
            (6, vec![3, 7]),
            (7, vec![8]),
            (8, vec![9]),
            (9, vec![6]),
        ]);
        assert!(!decomposes_into_eulerian_cycles(&graph));
        assert!(has_eulerian_path_degrees(&graph));
        assert_eq!(find_start_node(&graph), Some(&6));

        let differences: Vec<_> = find_non_eulerian_nodes_with_differences(&graph)
            .into_iter()
            .map(|(node_id, difference)| (*graph.node(node_id), difference))
            .collect();
        assert_eq!(differences, vec![(4, -1), (6, 1)]);
        assert_eq!(unbalanced_nodes(&graph), vec![(&4, -1), (&6, 1)]);
        assert!(!is_balanced(&graph));
    }

    #[test]
    fn test_unbalanced_graph() {
        let graph = DeBruijnGraph::from_adjacency_list(vec![(0, vec![1, 2]), (3, vec![1])]);
        assert!(!has_eulerian_path_degrees(&graph));
        assert_eq!(find_start_node(&graph), Some(&3));
    }

    #[test]
    fn test_empty_graph_has_no_start_node() {
        let graph = DeBruijnGraph::<String>::from_kmers(Vec::<String>::new());
        assert_eq!(find_start_node(&graph), None);
        assert!(decomposes_into_eulerian_cycles(&graph));

        let isolated = DeBruijnGraph::from_adjacency_list(vec![(0, Vec::<i32>::new())]);
        assert_eq!(find_start_node(&isolated), None);
    }

    #[test]
    fn test_missing_nodes_have_zero_degree() {
        let graph = DeBruijnGraph::from_kmers(vec!["ACG"]);
        let degrees = Degrees::compute(&graph);
        let missing = petgraph::graph::NodeIndex::<usize>::new(17);
        assert_eq!(degrees.in_degree(missing), 0);
        assert_eq!(degrees.out_degree(missing), 0);
    }

    #[test]
    fn test_degree_sums_equal_edge_count() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..20 {
            let kmer_count = rng.gen_range(0..200);
            let k = rng.gen_range(2..6);
            let kmers: Vec<String> = (0..kmer_count)
                .map(|_| {
                    (0..k)
                        .map(|_| ['A', 'C', 'G', 'T'][rng.gen_range(0..4)])
                        .collect()
                })
                .collect();
            let graph = DeBruijnGraph::from_kmers(&kmers);
            let degrees = Degrees::compute(&graph);

            assert_eq!(graph.edge_count(), kmer_count);
            assert_eq!(degrees.total_in_degree(), kmer_count);
            assert_eq!(degrees.total_out_degree(), kmer_count);
        }
    }
}
