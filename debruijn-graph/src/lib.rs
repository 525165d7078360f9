//! A crate to build De Bruijn graphs and to run the classic assembly algorithms on them.
//!
//! The graph is a directed multigraph whose nodes are (k-1)-mers (or pairs of (k-1)-mers for read pairs)
//! and whose edges are the k-mers of the input, stored in insertion order.
//! Every algorithm takes the graph by shared reference, so one graph can be analysed, traversed and compacted
//! without being rebuilt.
#![warn(missing_docs)]
#![recursion_limit = "1024"]
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;

/// Algorithms on De Bruijn graphs: degrees, Eulerian traversals and maximal non-branching paths.
pub mod algo;
/// Contains the error types used by this crate.
pub mod error;
/// The De Bruijn multigraph itself.
pub mod graph;
/// Splitting strings into k-mers and read pairs.
pub mod kmer;
/// The overlap graph of a collection of patterns.
pub mod overlap;

pub use graph::{DeBruijnGraph, EdgeId, NodeId};
pub use kmer::ReadPair;
