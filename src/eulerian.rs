use crate::CliOptions;
use assembly_io::datasets::{parse_adjacency_list, read_dataset};
use assembly_io::render::{render_path, write_output};
use clap::Parser;
use debruijn_graph::algo::eulerian;
use debruijn_graph::DeBruijnGraph;
use log::info;

#[derive(Parser)]
pub struct EulerianCycleCommand {
    #[clap(
        short,
        long,
        help = "A file containing the adjacency list of a graph, one node per line as 'node: neighbors' or 'node -> neighbors'"
    )]
    pub input: String,

    #[clap(
        short,
        long,
        help = "The file the space-separated nodes of the cycle are written to"
    )]
    pub output: String,
}

#[derive(Parser)]
pub struct EulerianPathCommand {
    #[clap(
        short,
        long,
        help = "A file containing the adjacency list of a graph, one node per line as 'node: neighbors' or 'node -> neighbors'"
    )]
    pub input: String,

    #[clap(
        short,
        long,
        help = "The file the space-separated nodes of the path are written to"
    )]
    pub output: String,

    #[clap(
        short,
        long,
        help = "Start the path at this node instead of the node with one more outgoing than incoming edge"
    )]
    pub start: Option<String>,
}

fn read_graph(input: &str) -> crate::Result<DeBruijnGraph<String>> {
    info!("Reading adjacency list from '{}'", input);
    let dataset = read_dataset(input)?;
    let graph = DeBruijnGraph::from_adjacency_list(parse_adjacency_list(&dataset)?);
    info!(
        "The graph has {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

pub(crate) fn eulerian_cycle(
    _options: &CliOptions,
    subcommand: &EulerianCycleCommand,
) -> crate::Result<()> {
    let graph = read_graph(&subcommand.input)?;

    info!("Computing Eulerian cycle");
    let cycle = eulerian::eulerian_cycle(&graph)?;

    info!("Writing cycle to '{}'", subcommand.output);
    write_output(&subcommand.output, &render_path(cycle))?;
    Ok(())
}

pub(crate) fn eulerian_path(
    _options: &CliOptions,
    subcommand: &EulerianPathCommand,
) -> crate::Result<()> {
    let graph = read_graph(&subcommand.input)?;

    let path = if let Some(start) = &subcommand.start {
        info!("Computing Eulerian path starting at node '{}'", start);
        eulerian::eulerian_path_from(&graph, start)?
    } else {
        info!("Computing Eulerian path");
        eulerian::eulerian_path(&graph)?
    };

    info!("Writing path to '{}'", subcommand.output);
    write_output(&subcommand.output, &render_path(path))?;
    Ok(())
}
