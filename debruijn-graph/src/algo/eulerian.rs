use crate::algo::degree::{
    decomposes_into_eulerian_cycles, find_non_eulerian_nodes_with_differences,
    find_start_node_id, has_eulerian_path_degrees,
};
use crate::error::{ErrorKind, Result};
use crate::graph::{DeBruijnGraph, NodeId};
use std::collections::VecDeque;
use std::hash::Hash;

/// The edges of a graph that have not been traversed yet.
/// Owned by a single traversal, the graph itself is never modified.
struct UnusedEdges {
    out_neighbors: Vec<VecDeque<NodeId>>,
    count: usize,
}

impl UnusedEdges {
    fn new<Node>(graph: &DeBruijnGraph<Node>) -> Self {
        Self {
            out_neighbors: graph
                .node_ids()
                .map(|node_id| graph.out_neighbors(node_id).into_iter().collect())
                .collect(),
            count: graph.edge_count(),
        }
    }

    fn has_unused_out_edges(&self, node_id: NodeId) -> bool {
        !self.out_neighbors[node_id.index()].is_empty()
    }

    /// Walks from `start` along unused edges until reaching a node without unused outgoing edges.
    /// At each node, the unused edge that was inserted first is taken.
    fn walk(&mut self, start: NodeId) -> Vec<NodeId> {
        let mut walk = vec![start];
        let mut current_node = start;

        while let Some(next_node) = self.out_neighbors[current_node.index()].pop_front() {
            self.count -= 1;
            walk.push(next_node);
            current_node = next_node;
        }

        trace!(
            "Walked {} edges from node {}",
            walk.len() - 1,
            start.index()
        );
        walk
    }
}

/// Computes a walk starting at `start` that uses every edge of the graph exactly once, as a sequence of node indices.
///
/// The first walk from `start` is extended by repeatedly finding the first node in the current walk
/// that still has unused outgoing edges, walking from there until getting stuck, and splicing the new closed walk
/// into the current walk at the position of that node.
///
/// Fails with `Disconnected` if some edges cannot be reached from the walk,
/// and with `Unbalanced` if a spliced walk does not return to its start, which happens only if the degrees of the graph do not allow a Eulerian traversal from `start`.
pub fn eulerian_walk_from<Node>(graph: &DeBruijnGraph<Node>, start: NodeId) -> Result<Vec<NodeId>> {
    let mut unused_edges = UnusedEdges::new(graph);
    let mut walk = unused_edges.walk(start);
    // All nodes in front of the last splice position have no unused edges left.
    let mut scan_start = 0;

    while unused_edges.count > 0 {
        let splice_index = match walk[scan_start..]
            .iter()
            .position(|&node_id| unused_edges.has_unused_out_edges(node_id))
        {
            Some(offset) => scan_start + offset,
            None => bail!(ErrorKind::Disconnected(unused_edges.count)),
        };

        let splice_node = walk[splice_index];
        let closed_walk = unused_edges.walk(splice_node);
        if let Some(&end_node) = closed_walk.last() {
            ensure!(
                end_node == splice_node,
                ErrorKind::Unbalanced(format!(
                    "a walk starting at node {} got stuck at node {}",
                    splice_node.index(),
                    end_node.index()
                ))
            );
        }

        debug!(
            "Splicing closed walk of {} edges into position {} of the current walk",
            closed_walk.len() - 1,
            splice_index
        );
        walk.splice(splice_index..=splice_index, closed_walk);
        scan_start = splice_index;
    }

    debug_assert_eq!(walk.len(), graph.edge_count() + 1);
    Ok(walk)
}

fn node_values<Node: Clone>(graph: &DeBruijnGraph<Node>, walk: Vec<NodeId>) -> Vec<Node> {
    walk.into_iter()
        .map(|node_id| graph.node(node_id).clone())
        .collect()
}

/// Computes a Eulerian path of the graph, i.e. a walk that uses every edge exactly once.
///
/// The path starts at the node returned by [`find_start_node_id`](crate::algo::degree::find_start_node_id).
/// If all nodes are balanced, the path is a Eulerian cycle.
/// A graph without edges has the empty path.
pub fn eulerian_path<Node: Clone>(graph: &DeBruijnGraph<Node>) -> Result<Vec<Node>> {
    if !has_eulerian_path_degrees(graph) {
        bail!(ErrorKind::Unbalanced(format!(
            "{} nodes have indegree != outdegree, which does not allow a Eulerian path",
            find_non_eulerian_nodes_with_differences(graph).len()
        )));
    }

    let start = match find_start_node_id(graph) {
        Some(start) => start,
        None => {
            debug!("The graph has no edges, its Eulerian path is empty");
            return Ok(Vec::new());
        }
    };

    let walk = eulerian_walk_from(graph, start)?;
    Ok(node_values(graph, walk))
}

/// Computes a Eulerian cycle of the graph.
/// The first node of the cycle equals its last node.
///
/// Fails with `Unbalanced` if some node has indegree != outdegree.
/// A graph without edges has the empty cycle.
pub fn eulerian_cycle<Node: Clone>(graph: &DeBruijnGraph<Node>) -> Result<Vec<Node>> {
    if !decomposes_into_eulerian_cycles(graph) {
        bail!(ErrorKind::Unbalanced(format!(
            "{} nodes have indegree != outdegree, which does not allow a Eulerian cycle",
            find_non_eulerian_nodes_with_differences(graph).len()
        )));
    }

    let start = match find_start_node_id(graph) {
        Some(start) => start,
        None => {
            debug!("The graph has no edges, its Eulerian cycle is empty");
            return Ok(Vec::new());
        }
    };

    let walk = eulerian_walk_from(graph, start)?;
    debug_assert_eq!(walk.first(), walk.last());
    Ok(node_values(graph, walk))
}

/// Computes a walk that uses every edge exactly once, starting at the given node.
pub fn eulerian_path_from<Node: Clone + Eq + Hash>(
    graph: &DeBruijnGraph<Node>,
    start: &Node,
) -> Result<Vec<Node>> {
    let start = match graph.node_id(start) {
        Some(start) => start,
        None => bail!(ErrorKind::MalformedInput(
            "the start node is not part of the graph".to_owned()
        )),
    };

    let walk = eulerian_walk_from(graph, start)?;
    Ok(node_values(graph, walk))
}
