//! A crate to reconstruct genome strings from k-mers, read pairs and gapped patterns.
//!
//! The reconstructions build a De Bruijn graph with the `debruijn-graph` crate, find a Eulerian path
//! or the maximal non-branching paths, and spell the resulting walks as strings.
#![warn(missing_docs)]
#![recursion_limit = "1024"]
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;

/// Maximal non-branching paths spelled as contigs.
pub mod contigs;
/// Contains the error types used by this crate.
pub mod error;
/// End-to-end reconstruction of a genome from its k-mers or read pairs.
pub mod reconstruction;
/// Spelling strings from walks of overlapping k-mers.
pub mod spelling;
/// k-universal circular binary strings.
pub mod universal;

pub use debruijn_graph;
