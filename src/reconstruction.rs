use crate::{CliOptions, ErrorKind};
use assembly_io::datasets::{
    parse_gapped_patterns_dataset, parse_k, parse_k_and_kmers, parse_read_pairs_dataset,
    read_dataset,
};
use assembly_io::render::write_output;
use clap::Parser;
use error_chain::bail;
use debruijn_graph::ReadPair;
use genome_assembly::reconstruction;
use genome_assembly::spelling::spell_gapped_patterns;
use genome_assembly::universal::k_universal_circular_string;
use log::{error, info};

#[derive(Parser)]
pub struct StringReconstructionCommand {
    #[clap(
        short,
        long,
        help = "A file containing k in its first line followed by whitespace-separated k-mers"
    )]
    pub input: String,

    #[clap(short, long, help = "The file the reconstructed string is written to")]
    pub output: String,
}

#[derive(Parser)]
pub struct UniversalStringCommand {
    #[clap(short, long, help = "A file containing k")]
    pub input: String,

    #[clap(
        short,
        long,
        help = "The file the k-universal circular string is written to"
    )]
    pub output: String,
}

#[derive(Parser)]
pub struct ReadPairsCommand {
    #[clap(
        short,
        long,
        help = "A file containing 'k d' in its first line followed by whitespace-separated read pairs 'first|second'"
    )]
    pub input: String,

    #[clap(short, long, help = "The file the reconstructed string is written to")]
    pub output: String,
}

#[derive(Parser)]
pub struct GappedPatternsCommand {
    #[clap(
        short,
        long,
        help = "A file containing 'k d' in its first line followed by whitespace-separated gapped patterns '(first|second)'"
    )]
    pub input: String,

    #[clap(short, long, help = "The file the spelled string is written to")]
    pub output: String,
}

/// Fails with `Parameter` if a read pair does not consist of two k-mers.
fn check_read_pair_lengths(read_pairs: &[ReadPair], k: usize) -> crate::Result<()> {
    let mut malformed_count = 0;
    for read_pair in read_pairs {
        if read_pair.first.chars().count() != k || read_pair.second.chars().count() != k {
            error!("Read pair {} does not consist of two {}-mers", read_pair, k);
            malformed_count += 1;
        }
    }

    if malformed_count > 0 {
        error!("{} read pairs do not match k = {}", malformed_count, k);
        bail!(ErrorKind::Parameter);
    }
    Ok(())
}

pub(crate) fn string_reconstruction(
    _options: &CliOptions,
    subcommand: &StringReconstructionCommand,
) -> crate::Result<()> {
    info!("Reading dataset from '{}'", subcommand.input);
    let dataset = read_dataset(&subcommand.input)?;
    let (k, kmers) = parse_k_and_kmers(&dataset)?;

    info!("Reconstructing string from {} {}-mers", kmers.len(), k);
    let genome = reconstruction::string_reconstruction(kmers)?;
    info!("Reconstructed a string of length {}", genome.len());

    info!("Writing string to '{}'", subcommand.output);
    write_output(&subcommand.output, &genome)?;
    Ok(())
}

pub(crate) fn universal_string(
    _options: &CliOptions,
    subcommand: &UniversalStringCommand,
) -> crate::Result<()> {
    info!("Reading dataset from '{}'", subcommand.input);
    let dataset = read_dataset(&subcommand.input)?;
    let k = parse_k(&dataset)?;

    info!("Computing {}-universal circular string", k);
    let universal = k_universal_circular_string(k)?;

    info!("Writing string to '{}'", subcommand.output);
    write_output(&subcommand.output, &universal)?;
    Ok(())
}

pub(crate) fn read_pairs(_options: &CliOptions, subcommand: &ReadPairsCommand) -> crate::Result<()> {
    info!("Reading dataset from '{}'", subcommand.input);
    let dataset = read_dataset(&subcommand.input)?;
    let (k, d, read_pairs) = parse_read_pairs_dataset(&dataset)?;
    check_read_pair_lengths(&read_pairs, k)?;

    info!(
        "Reconstructing string from {} ({}, {})-mers",
        read_pairs.len(),
        k,
        d
    );
    let genome = reconstruction::string_reconstruction_from_read_pairs(&read_pairs, k, d)?;
    info!("Reconstructed a string of length {}", genome.len());

    info!("Writing string to '{}'", subcommand.output);
    write_output(&subcommand.output, &genome)?;
    Ok(())
}

pub(crate) fn gapped_patterns(
    _options: &CliOptions,
    subcommand: &GappedPatternsCommand,
) -> crate::Result<()> {
    info!("Reading dataset from '{}'", subcommand.input);
    let dataset = read_dataset(&subcommand.input)?;
    let (k, d, patterns) = parse_gapped_patterns_dataset(&dataset)?;
    check_read_pair_lengths(&patterns, k)?;

    info!(
        "Spelling string of {} ({}, {})-mers",
        patterns.len(),
        k,
        d
    );
    let genome = spell_gapped_patterns(&patterns, k, d)?;
    info!("Spelled a string of length {}", genome.len());

    info!("Writing string to '{}'", subcommand.output);
    write_output(&subcommand.output, &genome)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::check_read_pair_lengths;
    use crate::ErrorKind;
    use debruijn_graph::ReadPair;

    #[test]
    fn test_check_read_pair_lengths() {
        let read_pairs = vec![ReadPair::new("GAGA", "TTGA"), ReadPair::new("TCGT", "GATG")];
        assert!(check_read_pair_lengths(&read_pairs, 4).is_ok());

        match check_read_pair_lengths(&read_pairs, 3) {
            Err(error) => assert!(matches!(error.kind(), ErrorKind::Parameter)),
            Ok(()) => panic!("Accepted read pairs of the wrong length"),
        }
    }
}
