use crate::error::{ErrorKind, Result};
use debruijn_graph::kmer::last_character;
use debruijn_graph::ReadPair;
use std::iter;

/// Spells the string of a walk of overlapping strings:
/// the first string followed by the last character of every subsequent string.
///
/// The empty walk spells the empty string.
pub fn path_to_string<S: AsRef<str>>(path: &[S]) -> String {
    let (first, rest) = match path.split_first() {
        Some(split) => split,
        None => return String::new(),
    };

    let mut result = first.as_ref().to_owned();
    result.extend(rest.iter().filter_map(|node| last_character(node.as_ref())));
    result
}

/// Spells a circular string of length `target_length` from a cycle of overlapping (k-1)-mers.
///
/// The string consists of the first node followed by the last characters of the next `target_length - (k - 1)` nodes.
/// The remaining nodes of the cycle wrap around the start of the string and are ignored.
pub fn circular_path_to_string<S: AsRef<str>>(path: &[S], k: usize, target_length: usize) -> String {
    let (first, rest) = match path.split_first() {
        Some(split) => split,
        None => return String::new(),
    };

    let tail_length = target_length.saturating_sub(k.saturating_sub(1));
    let mut result = first.as_ref().to_owned();
    result.extend(
        rest.iter()
            .take(tail_length)
            .filter_map(|node| last_character(node.as_ref())),
    );
    result
}

/// Merges the spellings of the first and second strings of a paired walk, where `second` starts at `offset` in the genome.
///
/// If `second` starts inside `first`, their overlap has to agree.
/// Otherwise, the genome between the end of `first` and the start of `second` is unknown,
/// and is filled with copies of the first character of `second`.
fn merge_paired_spellings(first: &str, second: &str, offset: usize) -> Result<String> {
    let first_length = first.chars().count();
    let mut result = first.to_owned();

    if offset < first_length {
        let overlap_length = first_length - offset;
        for (index, (first_character, second_character)) in
            first.chars().skip(offset).zip(second.chars()).enumerate()
        {
            ensure!(
                first_character == second_character,
                ErrorKind::Inconsistent(offset + index)
            );
        }

        result.extend(second.chars().skip(overlap_length));
    } else if let Some(fill_character) = second.chars().next() {
        let gap_length = offset - first_length;
        if gap_length > 0 {
            warn!(
                "The paired walk does not cover {} characters of the genome, filling them with '{}'",
                gap_length, fill_character
            );
        }

        result.extend(iter::repeat(fill_character).take(gap_length));
        result.push_str(second);
    }

    Ok(result)
}

/// Spells the genome of a sequence of gapped patterns ((k,d)-mers), where each pattern starts one character after its predecessor.
///
/// The first and second k-mers are spelled separately with [`path_to_string`].
/// The second spelling starts `k + d` characters after the first.
/// If the spellings overlap, they must agree on the overlap, else `Inconsistent` is returned
/// with the first genome position at which they differ.
/// If they do not overlap, the gap between them is filled with copies of the first character
/// of the second spelling. This is a best-effort heuristic, since the genome is not determined in the gap.
///
/// The empty sequence spells the empty string.
pub fn spell_gapped_patterns(patterns: &[ReadPair], k: usize, d: usize) -> Result<String> {
    if patterns.is_empty() {
        return Ok(String::new());
    }

    let first: Vec<_> = patterns.iter().map(|pattern| pattern.first.as_str()).collect();
    let second: Vec<_> = patterns.iter().map(|pattern| pattern.second.as_str()).collect();
    merge_paired_spellings(&path_to_string(&first), &path_to_string(&second), k + d)
}

/// Spells the genome of a walk in a paired De Bruijn graph of (k,d)-mers, whose nodes are pairs of (k-1)-mers.
///
/// The second (k-1)-mer of each node starts `k + d` characters after the first, so the spelling follows
/// the same rules as [`spell_gapped_patterns`], including the gap filling heuristic.
pub fn paired_path_to_string(path: &[ReadPair], k: usize, d: usize) -> Result<String> {
    spell_gapped_patterns(path, k, d)
}

/// Joins consecutive nodes of a walk in a paired De Bruijn graph back into the (k,d)-mers of its edges.
pub fn gapped_patterns_from_path(path: &[ReadPair]) -> Vec<ReadPair> {
    path.windows(2)
        .map(|window| {
            let (from, to) = (&window[0], &window[1]);
            let mut first = from.first.clone();
            first.extend(last_character(&to.first));
            let mut second = from.second.clone();
            second.extend(last_character(&to.second));
            ReadPair::new(first, second)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        circular_path_to_string, gapped_patterns_from_path, paired_path_to_string,
        path_to_string, spell_gapped_patterns,
    };
    use crate::error::ErrorKind;
    use debruijn_graph::kmer::composition;
    use debruijn_graph::ReadPair;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_genome(rng: &mut StdRng, length: usize) -> String {
        (0..length)
            .map(|_| ['A', 'C', 'G', 'T'][rng.gen_range(0..4)])
            .collect()
    }

    fn read_pairs(patterns: &str) -> Vec<ReadPair> {
        patterns
            .split_whitespace()
            .map(|pattern| {
                let (first, second) = pattern.split_at(pattern.find('|').unwrap());
                ReadPair::new(first, &second[1..])
            })
            .collect()
    }

    #[test]
    fn test_path_to_string() {
        assert_eq!(
            path_to_string(&["ACCGA", "CCGAA", "CGAAG", "GAAGC", "AAGCT"]),
            "ACCGAAGCT"
        );
        assert_eq!(path_to_string(&["ACG"]), "ACG");
        assert_eq!(path_to_string::<&str>(&[]), "");
    }

    #[test]
    fn test_composition_round_trip() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let length: usize = rng.gen_range(2..200);
            let genome = random_genome(&mut rng, length);
            let k = rng.gen_range(2..=length);
            assert_eq!(path_to_string(&composition(&genome, k).unwrap()), genome);
        }
    }

    #[test]
    fn test_spell_gapped_patterns() {
        let patterns = read_pairs("GACC|GCGC ACCG|CGCC CCGA|GCCG CGAG|CCGG GAGC|CGGA");
        assert_eq!(
            spell_gapped_patterns(&patterns, 4, 2).unwrap(),
            "GACCGAGCGCCGGA"
        );
        assert_eq!(spell_gapped_patterns(&[], 4, 2).unwrap(), "");
    }

    #[test]
    fn test_inconsistent_patterns() {
        let patterns = read_pairs("ACG|CTT CGT|TTA");
        match spell_gapped_patterns(&patterns, 3, 0) {
            Err(error) => assert!(matches!(error.kind(), ErrorKind::Inconsistent(3))),
            Ok(genome) => panic!("Spelled {} from inconsistent patterns", genome),
        }
    }

    #[test]
    fn test_gap_is_filled() {
        let patterns = read_pairs("AC|GT");
        assert_eq!(spell_gapped_patterns(&patterns, 2, 5).unwrap(), "ACGGGGGGT");
        assert_eq!(spell_gapped_patterns(&patterns, 2, 0).unwrap(), "ACGT");
    }

    #[test]
    fn test_paired_path_round_trip() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let k = rng.gen_range(2..8);
            let d = rng.gen_range(0..10);
            let length = rng.gen_range(2 * (k + d)..100);
            let genome = random_genome(&mut rng, length);
            let genome: Vec<char> = genome.chars().collect();

            let path: Vec<_> = (0..=length - (2 * k + d - 1))
                .map(|start| {
                    let second_start = start + k + d;
                    ReadPair::new(
                        genome[start..start + k - 1].iter().collect::<String>(),
                        genome[second_start..second_start + k - 1]
                            .iter()
                            .collect::<String>(),
                    )
                })
                .collect();

            assert_eq!(
                paired_path_to_string(&path, k, d).unwrap(),
                genome.iter().collect::<String>()
            );
        }
    }

    #[test]
    fn test_circular_path_to_string() {
        let cycle = ["00", "00", "01", "11", "11", "10", "01", "10", "00"];
        assert_eq!(circular_path_to_string(&cycle, 3, 8), "00011101");
        assert_eq!(circular_path_to_string::<&str>(&[], 3, 8), "");
    }

    #[test]
    fn test_gapped_patterns_from_path() {
        let path = vec![
            ReadPair::new("GAG", "TTG"),
            ReadPair::new("AGA", "TGA"),
            ReadPair::new("GAT", "GAC"),
        ];
        assert_eq!(
            gapped_patterns_from_path(&path),
            vec![ReadPair::new("GAGA", "TTGA"), ReadPair::new("AGAT", "TGAC")]
        );
        assert!(gapped_patterns_from_path(&path[..1]).is_empty());
    }
}
