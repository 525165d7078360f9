//! A crate to read the datasets of the genome assembly exercises and to write their results.
//!
//! Datasets are small text files, usually a header line with numeric parameters followed by
//! whitespace-separated k-mers, read pairs or gapped patterns, or an adjacency list of a graph.
//! Parsers work on the text of a dataset, so they can be used without touching the file system.
#![warn(missing_docs)]
#![recursion_limit = "1024"]
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;

/// Parsers for the dataset formats.
pub mod datasets;
/// Contains the error types used by this crate.
pub mod error;
/// Rendering of results in the textual output formats.
pub mod render;
