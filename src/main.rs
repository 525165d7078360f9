#![recursion_limit = "1024"]

use clap::Parser;
use error_chain::{error_chain, ChainedError, ExitCode};
use log::{error, info};
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};

mod composition;
mod contigs;
mod debruijn;
mod eulerian;
mod reconstruction;

error_chain! {
    foreign_links {
        Io(std::io::Error);
        Logger(log::SetLoggerError);
    }

    links {
        Graph(debruijn_graph::error::Error, debruijn_graph::error::ErrorKind);
        Assembly(genome_assembly::error::Error, genome_assembly::error::ErrorKind);
        Dataset(assembly_io::error::Error, assembly_io::error::ErrorKind);
    }

    errors {
        Parameter {
            description("a parameter was missing, superfluous or had an illegal value, see the log for more details")
            display("a parameter was missing, superfluous or had an illegal value, see the log for more details")
        }
    }
}

#[derive(Parser)]
#[clap(name = "De Bruijn Assembly", version = env!("CARGO_PKG_VERSION"))]
struct CliOptions {
    #[clap(subcommand)]
    pub subcommand: Command,

    #[clap(
        long,
        default_value = "Info",
        help = "The log level to use, one of Error, Warn, Info, Debug, Trace"
    )]
    pub log_level: LevelFilter,
}

#[derive(Parser)]
enum Command {
    #[clap(about = "Computes the k-mer composition of a text.")]
    Composition(composition::CompositionCommand),
    #[clap(about = "Spells the genome of a path of overlapping k-mers.")]
    PathToGenome(composition::PathToGenomeCommand),
    #[clap(about = "Computes the overlap graph of a collection of patterns.")]
    OverlapGraph(composition::OverlapGraphCommand),
    #[clap(about = "Computes the De Bruijn graph of the k-mer composition of a text.")]
    DebruijnFromText(debruijn::DeBruijnFromTextCommand),
    #[clap(about = "Computes the De Bruijn graph of a collection of k-mers.")]
    DebruijnFromKmers(debruijn::DeBruijnFromKmersCommand),
    #[clap(about = "Computes a Eulerian cycle of a balanced graph given as adjacency list.")]
    EulerianCycle(eulerian::EulerianCycleCommand),
    #[clap(about = "Computes a Eulerian path of a graph given as adjacency list.")]
    EulerianPath(eulerian::EulerianPathCommand),
    #[clap(about = "Reconstructs a string from its k-mer composition.")]
    StringReconstruction(reconstruction::StringReconstructionCommand),
    /// Computes a k-universal circular binary string.
    UniversalString(reconstruction::UniversalStringCommand),
    /// Reconstructs a string from its (k,d)-mer composition.
    ReadPairs(reconstruction::ReadPairsCommand),
    /// Spells the string of a sequence of gapped patterns.
    GappedPatterns(reconstruction::GappedPatternsCommand),
    /// Generates the contigs of a collection of k-mers.
    Contigs(contigs::ContigsCommand),
}

// Expanded form of error-chain's quick_main, the actual work happens in run().
fn main() {
    ::std::process::exit(match run() {
        Ok(()) => ExitCode::code(()),
        Err(ref e) => {
            error!("{}", ChainedError::display_chain(e));
            1
        }
    });
}

fn initialise_logging(level_filter: LevelFilter) -> Result<()> {
    CombinedLogger::init(vec![TermLogger::new(
        level_filter,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])?;

    info!("Logging initialised successfully");
    Ok(())
}

fn run() -> Result<()> {
    let options = &CliOptions::parse();
    initialise_logging(options.log_level)?;

    info!("Hello");

    match &options.subcommand {
        Command::Composition(subcommand) => composition::composition(options, subcommand),
        Command::PathToGenome(subcommand) => composition::path_to_genome(options, subcommand),
        Command::OverlapGraph(subcommand) => composition::overlap_graph(options, subcommand),
        Command::DebruijnFromText(subcommand) => {
            debruijn::debruijn_from_text(options, subcommand)
        }
        Command::DebruijnFromKmers(subcommand) => {
            debruijn::debruijn_from_kmers(options, subcommand)
        }
        Command::EulerianCycle(subcommand) => eulerian::eulerian_cycle(options, subcommand),
        Command::EulerianPath(subcommand) => eulerian::eulerian_path(options, subcommand),
        Command::StringReconstruction(subcommand) => {
            reconstruction::string_reconstruction(options, subcommand)
        }
        Command::UniversalString(subcommand) => {
            reconstruction::universal_string(options, subcommand)
        }
        Command::ReadPairs(subcommand) => reconstruction::read_pairs(options, subcommand),
        Command::GappedPatterns(subcommand) => {
            reconstruction::gapped_patterns(options, subcommand)
        }
        Command::Contigs(subcommand) => contigs::contigs(options, subcommand),
    }?;

    info!("Goodbye");
    Ok(())
}
