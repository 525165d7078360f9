use crate::error::{ErrorKind, Result};
use std::fmt::{Display, Formatter};
use std::iter;

/// Returns the first `k - 1` characters of a k-mer.
///
/// A k-mer without characters has an empty prefix.
pub fn prefix(kmer: &str) -> &str {
    kmer.char_indices()
        .last()
        .map(|(last_offset, _)| &kmer[..last_offset])
        .unwrap_or("")
}

/// Returns the last `k - 1` characters of a k-mer.
pub fn suffix(kmer: &str) -> &str {
    let mut characters = kmer.chars();
    characters.next();
    characters.as_str()
}

/// Returns the last character of a k-mer, or `None` if it is empty.
pub fn last_character(kmer: &str) -> Option<char> {
    kmer.chars().next_back()
}

/// Byte offsets of all character boundaries of `text`, including `text.len()`.
fn character_boundaries(text: &str) -> Vec<usize> {
    text.char_indices()
        .map(|(offset, _)| offset)
        .chain(iter::once(text.len()))
        .collect()
}

/// Returns the k-mer composition of `text`: every substring of length `k` in order of occurrence, including repeats.
///
/// If `k` is larger than the text, the composition is empty.
pub fn composition(text: &str, k: usize) -> Result<Vec<&str>> {
    ensure!(
        k > 0,
        ErrorKind::MalformedInput("k-mers must have at least one character".to_owned())
    );

    let boundaries = character_boundaries(text);
    let length = boundaries.len() - 1;
    if k > length {
        return Ok(Vec::new());
    }

    Ok((0..=length - k)
        .map(|start| &text[boundaries[start]..boundaries[start + k]])
        .collect())
}

/// A pair of strings separated by a gap, rendered as `first|second`.
///
/// Read pairs are used both as paired k-mers ((k,d)-mers) and as the nodes of a paired De Bruijn graph,
/// which are pairs of (k-1)-mers.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ReadPair {
    /// The read that comes first in the genome.
    pub first: String,
    /// The read that starts `k + d` characters after `first`.
    pub second: String,
}

impl ReadPair {
    /// Creates a new read pair.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// The pair of prefixes of both reads.
    pub fn prefix(&self) -> Self {
        Self::new(prefix(&self.first), prefix(&self.second))
    }

    /// The pair of suffixes of both reads.
    pub fn suffix(&self) -> Self {
        Self::new(suffix(&self.first), suffix(&self.second))
    }
}

impl Display for ReadPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}|{}", self.first, self.second)
    }
}

/// Returns all (k,d)-mers of `text` in order of occurrence.
/// A (k,d)-mer is a pair of k-mers where the second starts `k + d` characters after the first.
pub fn paired_composition(text: &str, k: usize, d: usize) -> Result<Vec<ReadPair>> {
    ensure!(
        k > 0,
        ErrorKind::MalformedInput("k-mers must have at least one character".to_owned())
    );

    let boundaries = character_boundaries(text);
    let length = boundaries.len() - 1;
    let span = 2 * k + d;
    if span > length {
        return Ok(Vec::new());
    }

    Ok((0..=length - span)
        .map(|start| {
            let second_start = start + k + d;
            ReadPair::new(
                &text[boundaries[start]..boundaries[start + k]],
                &text[boundaries[second_start]..boundaries[second_start + k]],
            )
        })
        .collect())
}
