use crate::error::{Error, ErrorKind, Result};
use debruijn_graph::ReadPair;
use regex::Regex;
use std::path::Path;

/// Reads the whole text of a dataset file.
pub fn read_dataset<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    debug!("Reading dataset from {:?}", path);
    Ok(std::fs::read_to_string(path)?)
}

/// The non-empty lines of a dataset, trimmed, together with their one-based line numbers.
fn content_lines(text: &str) -> Vec<(usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect()
}

fn nth_content_line<'a>(lines: &[(usize, &'a str)], index: usize) -> Result<(usize, &'a str)> {
    lines
        .get(index)
        .copied()
        .ok_or_else(|| ErrorKind::MissingLine(index + 1).into())
}

fn parse_number(line_number: usize, token: &str) -> Result<usize> {
    token.parse().map_err(|error| {
        Error::with_chain(
            error,
            ErrorKind::MalformedDataset(line_number, format!("'{}' is not a number", token)),
        )
    })
}

/// Parses a dataset consisting only of the parameter `k`.
pub fn parse_k(text: &str) -> Result<usize> {
    let lines = content_lines(text);
    let (line_number, line) = nth_content_line(&lines, 0)?;
    parse_number(line_number, line)
}

/// Parses a dataset with `k` in its first line and a text in its second line.
pub fn parse_k_and_text(text: &str) -> Result<(usize, &str)> {
    let lines = content_lines(text);
    let (line_number, line) = nth_content_line(&lines, 0)?;
    let k = parse_number(line_number, line)?;
    let (_, text) = nth_content_line(&lines, 1)?;
    Ok((k, text))
}

/// Parses a dataset of whitespace-separated k-mers, possibly spread over multiple lines.
pub fn parse_kmers(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Parses a dataset with `k` in its first line followed by whitespace-separated k-mers.
///
/// A warning is logged for every k-mer whose length is not `k`.
pub fn parse_k_and_kmers(text: &str) -> Result<(usize, Vec<&str>)> {
    let lines = content_lines(text);
    let (line_number, line) = nth_content_line(&lines, 0)?;
    let k = parse_number(line_number, line)?;

    let kmers: Vec<_> = lines[1..]
        .iter()
        .flat_map(|(_, line)| line.split_whitespace())
        .collect();
    for kmer in kmers.iter().filter(|kmer| kmer.chars().count() != k) {
        warn!("k-mer '{}' does not have length {}", kmer, k);
    }

    Ok((k, kmers))
}

/// Parses the header line `k d` of a paired dataset.
fn parse_k_and_d(line_number: usize, line: &str) -> Result<(usize, usize)> {
    let parameters: Vec<_> = line.split_whitespace().collect();
    match parameters.as_slice() {
        [k, d] => Ok((parse_number(line_number, k)?, parse_number(line_number, d)?)),
        _ => bail!(ErrorKind::MalformedDataset(
            line_number,
            format!("expected the two parameters 'k d', but got '{}'", line)
        )),
    }
}

/// Parses a read pair `first|second`.
pub fn parse_read_pair(token: &str) -> Result<ReadPair> {
    let mut reads = token.split('|');
    match (reads.next(), reads.next(), reads.next()) {
        (Some(first), Some(second), None) => Ok(ReadPair::new(first, second)),
        _ => bail!(ErrorKind::MalformedToken(
            token.to_owned(),
            "first|second".to_owned()
        )),
    }
}

/// A parser for gapped patterns `(first|second)`.
pub struct GappedPatternParser {
    pattern: Regex,
}

impl GappedPatternParser {
    /// Creates a new parser.
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(r"^\(([^()|]*)\|([^()|]*)\)$")?,
        })
    }

    /// Parses a gapped pattern `(first|second)`.
    pub fn parse(&self, token: &str) -> Result<ReadPair> {
        match self.pattern.captures(token) {
            Some(captures) => Ok(ReadPair::new(&captures[1], &captures[2])),
            None => bail!(ErrorKind::MalformedToken(
                token.to_owned(),
                "(first|second)".to_owned()
            )),
        }
    }
}

fn parse_paired_dataset(
    text: &str,
    parse_token: impl Fn(&str) -> Result<ReadPair>,
) -> Result<(usize, usize, Vec<ReadPair>)> {
    let lines = content_lines(text);
    let (line_number, line) = nth_content_line(&lines, 0)?;
    let (k, d) = parse_k_and_d(line_number, line)?;

    let mut read_pairs = Vec::new();
    for &(line_number, line) in &lines[1..] {
        for token in line.split_whitespace() {
            read_pairs.push(parse_token(token).map_err(|error| {
                Error::with_chain(
                    error,
                    ErrorKind::MalformedDataset(line_number, "expected a read pair".to_owned()),
                )
            })?);
        }
    }

    debug!("Parsed {} read pairs with k = {} and d = {}", read_pairs.len(), k, d);
    Ok((k, d, read_pairs))
}

/// Parses a dataset with `k d` in its first line followed by whitespace-separated read pairs `first|second`.
pub fn parse_read_pairs_dataset(text: &str) -> Result<(usize, usize, Vec<ReadPair>)> {
    parse_paired_dataset(text, parse_read_pair)
}

/// Parses a dataset with `k d` in its first line followed by whitespace-separated gapped patterns `(first|second)`.
pub fn parse_gapped_patterns_dataset(text: &str) -> Result<(usize, usize, Vec<ReadPair>)> {
    let parser = GappedPatternParser::new()?;
    parse_paired_dataset(text, |token| parser.parse(token))
}

/// Parses an adjacency list with one node per line.
///
/// A line is either `node: neighbor neighbor ...` or `node -> neighbor,neighbor,...`.
/// Nodes without neighbors may be listed with an empty neighbor list.
pub fn parse_adjacency_list(text: &str) -> Result<Vec<(String, Vec<String>)>> {
    content_lines(text)
        .into_iter()
        .map(|(line_number, line)| -> Result<(String, Vec<String>)> {
            let (node, neighbors) = match line.split_once("->").or_else(|| line.split_once(':')) {
                Some(split) => split,
                None => bail!(ErrorKind::MalformedDataset(
                    line_number,
                    format!("'{}' is neither of the form 'node: neighbors' nor 'node -> neighbors'", line)
                )),
            };

            let node = node.trim();
            ensure!(
                !node.is_empty(),
                ErrorKind::MalformedDataset(line_number, "the node is missing".to_owned())
            );

            let neighbors = neighbors
                .split(|character: char| character == ',' || character.is_whitespace())
                .filter(|neighbor| !neighbor.is_empty())
                .map(ToOwned::to_owned)
                .collect();
            Ok((node.to_owned(), neighbors))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        parse_adjacency_list, parse_gapped_patterns_dataset, parse_k, parse_k_and_kmers,
        parse_k_and_text, parse_kmers, parse_read_pair, parse_read_pairs_dataset,
    };
    use crate::error::ErrorKind;
    use debruijn_graph::ReadPair;

    #[test]
    fn test_parse_k_and_text() {
        assert_eq!(parse_k_and_text("5\nCAATCCAAC\n").unwrap(), (5, "CAATCCAAC"));
        assert_eq!(parse_k_and_text("\n 4 \r\nAAGATTCTCTAAGA").unwrap(), (4, "AAGATTCTCTAAGA"));
        assert_eq!(parse_k("3\n").unwrap(), 3);

        match parse_k_and_text("5\n") {
            Err(error) => assert!(matches!(error.kind(), ErrorKind::MissingLine(2))),
            Ok(parsed) => panic!("Parsed {:?} from a dataset without text", parsed),
        }
        match parse_k("five") {
            Err(error) => assert!(matches!(error.kind(), ErrorKind::MalformedDataset(1, _))),
            Ok(k) => panic!("Parsed k = {}", k),
        }
    }

    #[test]
    fn test_parse_kmers() {
        assert_eq!(
            parse_kmers("ACCGA CCGAA\nCGAAG\n\nGAAGC AAGCT\n"),
            vec!["ACCGA", "CCGAA", "CGAAG", "GAAGC", "AAGCT"]
        );
        assert_eq!(
            parse_k_and_kmers("4\nCTTA ACCA TACC\nGGCT GCTT TTAC").unwrap(),
            (4, vec!["CTTA", "ACCA", "TACC", "GGCT", "GCTT", "TTAC"])
        );
        assert!(parse_kmers("").is_empty());
    }

    #[test]
    fn test_parse_read_pairs() {
        let (k, d, read_pairs) = parse_read_pairs_dataset("4 2\nGAGA|TTGA TCGT|GATG\n").unwrap();
        assert_eq!((k, d), (4, 2));
        assert_eq!(
            read_pairs,
            vec![ReadPair::new("GAGA", "TTGA"), ReadPair::new("TCGT", "GATG")]
        );

        match parse_read_pair("GAGA") {
            Err(error) => assert!(matches!(error.kind(), ErrorKind::MalformedToken(_, _))),
            Ok(read_pair) => panic!("Parsed {:?} from a single read", read_pair),
        }
        assert!(parse_read_pair("GA|GA|TT").is_err());
        match parse_read_pairs_dataset("4 2\nGAGA|TTGA\nTCGT") {
            Err(error) => assert!(matches!(error.kind(), ErrorKind::MalformedDataset(3, _))),
            Ok(parsed) => panic!("Parsed {:?} from a malformed dataset", parsed),
        }
        match parse_read_pairs_dataset("4\nGAGA|TTGA") {
            Err(error) => assert!(matches!(error.kind(), ErrorKind::MalformedDataset(1, _))),
            Ok(parsed) => panic!("Parsed {:?} from a dataset without d", parsed),
        }
    }

    #[test]
    fn test_parse_gapped_patterns() {
        let (k, d, patterns) =
            parse_gapped_patterns_dataset("4 2\n(GACC|GCGC) (ACCG|CGCC)\n(CCGA|GCCG)").unwrap();
        assert_eq!((k, d), (4, 2));
        assert_eq!(
            patterns,
            vec![
                ReadPair::new("GACC", "GCGC"),
                ReadPair::new("ACCG", "CGCC"),
                ReadPair::new("CCGA", "GCCG"),
            ]
        );
        assert!(parse_gapped_patterns_dataset("4 2\nGACC|GCGC").is_err());
    }

    #[test]
    fn test_parse_adjacency_list() {
        assert_eq!(
            parse_adjacency_list("0: 3\n2: 1 6\n4:\n").unwrap(),
            vec![
                ("0".to_owned(), vec!["3".to_owned()]),
                ("2".to_owned(), vec!["1".to_owned(), "6".to_owned()]),
                ("4".to_owned(), vec![]),
            ]
        );
        assert_eq!(
            parse_adjacency_list("0 -> 3\n6 -> 5,8\n").unwrap(),
            vec![
                ("0".to_owned(), vec!["3".to_owned()]),
                ("6".to_owned(), vec!["5".to_owned(), "8".to_owned()]),
            ]
        );
        assert!(parse_adjacency_list("0 3").is_err());
        assert!(parse_adjacency_list(": 3").is_err());
    }
}
