use crate::error::{ErrorKind, Result};
use crate::kmer::{self, ReadPair};
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::HashMap;
use std::hash::Hash;

/// The index of a node in a [`DeBruijnGraph`].
pub type NodeId = NodeIndex<usize>;
/// The index of an edge in a [`DeBruijnGraph`].
pub type EdgeId = EdgeIndex<usize>;

/// A directed multigraph whose nodes are identified by value.
///
/// Nodes are indexed in the order they are first seen, either as tail or as head of an edge.
/// Edges are indexed in insertion order and are never deduplicated, so a k-mer that occurs `n` times
/// is represented by `n` parallel edges.
/// The outgoing edges of a node are always reported in insertion order, which makes all traversals
/// deterministic for identical input.
///
/// The graph cannot be modified once it has been built from its input.
#[derive(Debug, Clone)]
pub struct DeBruijnGraph<Node> {
    graph: DiGraph<Node, (), usize>,
    node_ids: HashMap<Node, NodeId>,
}

impl<Node> Default for DeBruijnGraph<Node> {
    fn default() -> Self {
        Self {
            graph: DiGraph::default(),
            node_ids: HashMap::new(),
        }
    }
}

impl<Node: Clone + Eq + Hash> DeBruijnGraph<Node> {
    fn get_or_insert_node(&mut self, node: Node) -> NodeId {
        if let Some(&node_id) = self.node_ids.get(&node) {
            return node_id;
        }

        let node_id = self.graph.add_node(node.clone());
        self.node_ids.insert(node, node_id);
        node_id
    }

    fn add_edge(&mut self, from: Node, to: Node) -> EdgeId {
        let from = self.get_or_insert_node(from);
        let to = self.get_or_insert_node(to);
        self.graph.add_edge(from, to, ())
    }

    /// Builds a graph from a sequence of edges, given as pairs of node values.
    pub fn from_edges(edges: impl IntoIterator<Item = (Node, Node)>) -> Self {
        let mut graph = Self::default();
        for (from, to) in edges {
            graph.add_edge(from, to);
        }
        graph
    }

    /// Builds a graph from an adjacency list.
    /// Nodes listed without neighbors are still added to the graph.
    pub fn from_adjacency_list<Neighbors: IntoIterator<Item = Node>>(
        adjacency_list: impl IntoIterator<Item = (Node, Neighbors)>,
    ) -> Self {
        let mut graph = Self::default();
        for (node, neighbors) in adjacency_list {
            graph.get_or_insert_node(node.clone());
            for neighbor in neighbors {
                graph.add_edge(node.clone(), neighbor);
            }
        }
        graph
    }

    /// Returns the index of the given node, or `None` if the graph does not contain it.
    pub fn node_id(&self, node: &Node) -> Option<NodeId> {
        self.node_ids.get(node).copied()
    }

    /// Returns the heads of the outgoing edges of `node` in insertion order.
    /// A node that is not part of the graph has no successors.
    pub fn successors(&self, node: &Node) -> Vec<&Node> {
        self.node_id(node)
            .map(|node_id| {
                self.out_neighbors(node_id)
                    .into_iter()
                    .map(|neighbor| self.node(neighbor))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl<Node> DeBruijnGraph<Node> {
    /// Returns the amount of distinct nodes in this graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the amount of edges in this graph, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns true if the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.edge_count() == 0
    }

    /// Returns the value of the node with the given index.
    pub fn node(&self, node_id: NodeId) -> &Node {
        &self.graph[node_id]
    }

    /// Returns an iterator over the node indices in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        self.graph.node_indices()
    }

    /// Returns an iterator over the node values in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.graph.node_indices().map(move |node_id| &self.graph[node_id])
    }

    /// Returns the tail and head of every edge in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.graph
            .raw_edges()
            .iter()
            .map(|edge| (edge.source(), edge.target()))
    }

    /// Returns the heads of the outgoing edges of a node in insertion order.
    pub fn out_neighbors(&self, node_id: NodeId) -> Vec<NodeId> {
        let mut out_edges: Vec<_> = self
            .graph
            .edges_directed(node_id, Direction::Outgoing)
            .map(|edge| (edge.id(), edge.target()))
            .collect();
        // petgraph lists the most recently inserted edge first.
        out_edges.sort_unstable_by_key(|&(edge_id, _)| edge_id);
        out_edges.into_iter().map(|(_, target)| target).collect()
    }

    /// Returns the amount of outgoing edges of a node.
    pub fn out_degree(&self, node_id: NodeId) -> usize {
        self.graph
            .edges_directed(node_id, Direction::Outgoing)
            .count()
    }

    /// Returns the amount of incoming edges of a node.
    pub fn in_degree(&self, node_id: NodeId) -> usize {
        self.graph
            .edges_directed(node_id, Direction::Incoming)
            .count()
    }

    /// Returns the adjacency list of this graph: every node that has outgoing edges, together with the heads of its outgoing edges.
    /// Nodes are listed in insertion order, heads in edge insertion order.
    pub fn adjacency_list(&self) -> Vec<(&Node, Vec<&Node>)> {
        self.node_ids()
            .filter_map(|node_id| {
                let neighbors = self.out_neighbors(node_id);
                if neighbors.is_empty() {
                    None
                } else {
                    Some((
                        self.node(node_id),
                        neighbors
                            .into_iter()
                            .map(|neighbor| self.node(neighbor))
                            .collect(),
                    ))
                }
            })
            .collect()
    }
}

impl DeBruijnGraph<String> {
    /// Builds the De Bruijn graph of a collection of k-mers.
    ///
    /// Each k-mer becomes an edge from its prefix to its suffix, in input order.
    /// All k-mers are expected to have the same length of at least two characters.
    /// This is not enforced, but a warning is logged if the lengths differ.
    pub fn from_kmers<Kmer: AsRef<str>>(kmers: impl IntoIterator<Item = Kmer>) -> Self {
        let mut graph = Self::default();
        let mut kmer_length = None;

        for kmer in kmers {
            let kmer = kmer.as_ref();
            match kmer_length {
                None => kmer_length = Some(kmer.len()),
                Some(length) if length != kmer.len() => {
                    warn!(
                        "k-mer '{}' has length {}, but the first k-mer has length {}",
                        kmer,
                        kmer.len(),
                        length
                    );
                }
                _ => {}
            }

            graph.add_edge(kmer::prefix(kmer).to_owned(), kmer::suffix(kmer).to_owned());
        }

        debug!(
            "Built De Bruijn graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        graph
    }

    /// Builds the De Bruijn graph of the k-mer composition of `text`.
    pub fn from_text(text: &str, k: usize) -> Result<Self> {
        ensure!(
            k >= 2,
            ErrorKind::MalformedInput(format!(
                "k-mers of a De Bruijn graph need at least two characters, but k is {}",
                k
            ))
        );
        Ok(Self::from_kmers(kmer::composition(text, k)?))
    }
}

impl DeBruijnGraph<ReadPair> {
    /// Builds the paired De Bruijn graph of a collection of (k,d)-mers.
    ///
    /// Each read pair becomes an edge from the pair of its prefixes to the pair of its suffixes.
    pub fn from_read_pairs<'a>(read_pairs: impl IntoIterator<Item = &'a ReadPair>) -> Self {
        let graph = Self::from_edges(
            read_pairs
                .into_iter()
                .map(|read_pair| (read_pair.prefix(), read_pair.suffix())),
        );

        debug!(
            "Built paired De Bruijn graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::DeBruijnGraph;
    use crate::kmer::ReadPair;

    fn adjacency_list_strings(graph: &DeBruijnGraph<String>) -> Vec<(String, Vec<String>)> {
        graph
            .adjacency_list()
            .into_iter()
            .map(|(node, neighbors)| (node.clone(), neighbors.into_iter().cloned().collect()))
            .collect()
    }

    #[test]
    fn test_from_text() {
        let graph = DeBruijnGraph::from_text("AAGATTCTCTAAGA", 4).unwrap();
        assert_eq!(graph.edge_count(), 11);
        assert_eq!(
            graph.successors(&"AAG".to_owned()),
            vec!["AGA", "AGA"]
        );
        assert_eq!(
            graph.successors(&"TCT".to_owned()),
            vec!["CTC", "CTA"]
        );
        assert!(graph.successors(&"GGG".to_owned()).is_empty());
        assert!(DeBruijnGraph::from_text("AAGA", 1).is_err());
    }

    #[test]
    fn test_from_kmers_keeps_parallel_edges_in_order() {
        let graph = DeBruijnGraph::from_kmers(vec![
            "GAGG", "CAGG", "GGGG", "GGGA", "CAGG", "AGGG", "GGAG",
        ]);
        assert_eq!(graph.edge_count(), 7);
        assert_eq!(
            adjacency_list_strings(&graph),
            vec![
                ("GAG".to_owned(), vec!["AGG".to_owned()]),
                ("AGG".to_owned(), vec!["GGG".to_owned()]),
                (
                    "CAG".to_owned(),
                    vec!["AGG".to_owned(), "AGG".to_owned()]
                ),
                (
                    "GGG".to_owned(),
                    vec!["GGG".to_owned(), "GGA".to_owned()]
                ),
                ("GGA".to_owned(), vec!["GAG".to_owned()]),
            ]
        );
    }

    #[test]
    fn test_nodes_without_outgoing_edges() {
        let graph = DeBruijnGraph::from_kmers(vec!["ACG", "CGT"]);
        let gt = graph.node_id(&"GT".to_owned()).unwrap();
        assert_eq!(graph.out_degree(gt), 0);
        assert_eq!(graph.in_degree(gt), 1);
        assert!(graph.out_neighbors(gt).is_empty());
        assert_eq!(graph.adjacency_list().len(), 2);
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn test_from_adjacency_list() {
        let graph = DeBruijnGraph::from_adjacency_list(vec![
            (0, vec![3]),
            (1, vec![0]),
            (2, vec![1, 6]),
            (3, vec![]),
        ]);
        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.successors(&2), vec![&1, &6]);
        assert!(graph.successors(&3).is_empty());
        assert_eq!(graph.nodes().copied().collect::<Vec<_>>(), vec![0, 3, 1, 2, 6]);
    }

    #[test]
    fn test_from_read_pairs() {
        let pairs = vec![ReadPair::new("GAGA", "TTGA"), ReadPair::new("AGAT", "TGAC")];
        let graph = DeBruijnGraph::from_read_pairs(&pairs);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(
            graph.successors(&ReadPair::new("GAG", "TTG")),
            vec![&ReadPair::new("AGA", "TGA")]
        );
        assert_eq!(
            graph.successors(&ReadPair::new("AGA", "TGA")),
            vec![&ReadPair::new("GAT", "GAC")]
        );
    }
}
