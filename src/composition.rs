use crate::CliOptions;
use assembly_io::datasets::{parse_k_and_text, parse_kmers, read_dataset};
use assembly_io::render::{render_adjacency_list, render_path, write_output};
use clap::Parser;
use debruijn_graph::kmer;
use debruijn_graph::overlap;
use genome_assembly::spelling::path_to_string;
use log::info;

#[derive(Parser)]
pub struct CompositionCommand {
    #[clap(
        short,
        long,
        help = "A file containing k in its first line and the text in its second line"
    )]
    pub input: String,

    #[clap(
        short,
        long,
        help = "The file the space-separated k-mers are written to"
    )]
    pub output: String,
}

#[derive(Parser)]
pub struct PathToGenomeCommand {
    #[clap(
        short,
        long,
        help = "A file containing a path of whitespace-separated k-mers, each overlapping its predecessor in k - 1 characters"
    )]
    pub input: String,

    #[clap(short, long, help = "The file the genome is written to")]
    pub output: String,
}

#[derive(Parser)]
pub struct OverlapGraphCommand {
    #[clap(
        short,
        long,
        help = "A file containing whitespace-separated patterns"
    )]
    pub input: String,

    #[clap(
        short,
        long,
        help = "The file the overlap graph is written to as adjacency list"
    )]
    pub output: String,
}

pub(crate) fn composition(
    _options: &CliOptions,
    subcommand: &CompositionCommand,
) -> crate::Result<()> {
    info!("Reading dataset from '{}'", subcommand.input);
    let dataset = read_dataset(&subcommand.input)?;
    let (k, text) = parse_k_and_text(&dataset)?;

    info!("Computing the {}-mer composition of a text of length {}", k, text.len());
    let kmers = kmer::composition(text, k)?;
    info!("Found {} {}-mers", kmers.len(), k);

    info!("Writing k-mers to '{}'", subcommand.output);
    write_output(&subcommand.output, &render_path(kmers))?;
    Ok(())
}

pub(crate) fn path_to_genome(
    _options: &CliOptions,
    subcommand: &PathToGenomeCommand,
) -> crate::Result<()> {
    info!("Reading dataset from '{}'", subcommand.input);
    let dataset = read_dataset(&subcommand.input)?;
    let path = parse_kmers(&dataset);

    info!("Spelling a path of {} k-mers", path.len());
    let genome = path_to_string(&path);
    info!("Spelled a genome of length {}", genome.len());

    info!("Writing genome to '{}'", subcommand.output);
    write_output(&subcommand.output, &genome)?;
    Ok(())
}

pub(crate) fn overlap_graph(
    _options: &CliOptions,
    subcommand: &OverlapGraphCommand,
) -> crate::Result<()> {
    info!("Reading dataset from '{}'", subcommand.input);
    let dataset = read_dataset(&subcommand.input)?;
    let patterns = parse_kmers(&dataset);

    info!("Computing the overlap graph of {} patterns", patterns.len());
    let graph = overlap::overlap_graph(patterns);
    info!(
        "The overlap graph has {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    info!("Writing adjacency list to '{}'", subcommand.output);
    write_output(
        &subcommand.output,
        &render_adjacency_list(graph.adjacency_list()),
    )?;
    Ok(())
}
