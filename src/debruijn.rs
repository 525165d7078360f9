use crate::CliOptions;
use assembly_io::datasets::{parse_k_and_text, parse_kmers, read_dataset};
use assembly_io::render::{render_adjacency_list, write_output};
use clap::Parser;
use debruijn_graph::algo::degree::{find_non_eulerian_nodes_with_differences, is_balanced};
use debruijn_graph::DeBruijnGraph;
use log::info;

#[derive(Parser)]
pub struct DeBruijnFromTextCommand {
    #[clap(
        short,
        long,
        help = "A file containing k in its first line and the text in its second line"
    )]
    pub input: String,

    #[clap(
        short,
        long,
        help = "The file the De Bruijn graph is written to as adjacency list"
    )]
    pub output: String,
}

#[derive(Parser)]
pub struct DeBruijnFromKmersCommand {
    #[clap(
        short,
        long,
        help = "A file containing whitespace-separated k-mers of equal length"
    )]
    pub input: String,

    #[clap(
        short,
        long,
        help = "The file the De Bruijn graph is written to as adjacency list"
    )]
    pub output: String,
}

fn print_graph_statistics(graph: &DeBruijnGraph<String>) {
    info!(
        "The De Bruijn graph has {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    if is_balanced(graph) {
        info!("All nodes are balanced");
    } else {
        info!(
            "{} nodes have indegree != outdegree",
            find_non_eulerian_nodes_with_differences(graph).len()
        );
    }
}

pub(crate) fn debruijn_from_text(
    _options: &CliOptions,
    subcommand: &DeBruijnFromTextCommand,
) -> crate::Result<()> {
    info!("Reading dataset from '{}'", subcommand.input);
    let dataset = read_dataset(&subcommand.input)?;
    let (k, text) = parse_k_and_text(&dataset)?;

    info!("Building the De Bruijn graph of order {} of a text of length {}", k, text.len());
    let graph = DeBruijnGraph::from_text(text, k)?;
    print_graph_statistics(&graph);

    info!("Writing adjacency list to '{}'", subcommand.output);
    write_output(
        &subcommand.output,
        &render_adjacency_list(graph.adjacency_list()),
    )?;
    Ok(())
}

pub(crate) fn debruijn_from_kmers(
    _options: &CliOptions,
    subcommand: &DeBruijnFromKmersCommand,
) -> crate::Result<()> {
    info!("Reading dataset from '{}'", subcommand.input);
    let dataset = read_dataset(&subcommand.input)?;
    let kmers = parse_kmers(&dataset);

    info!("Building the De Bruijn graph of {} k-mers", kmers.len());
    let graph = DeBruijnGraph::from_kmers(kmers);
    print_graph_statistics(&graph);

    info!("Writing adjacency list to '{}'", subcommand.output);
    write_output(
        &subcommand.output,
        &render_adjacency_list(graph.adjacency_list()),
    )?;
    Ok(())
}
