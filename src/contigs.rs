use crate::CliOptions;
use assembly_io::datasets::{parse_kmers, read_dataset};
use assembly_io::render::{render_path, write_output};
use clap::Parser;
use genome_assembly::contigs::generate_contigs;
use log::{info, warn};
use std::fs::File;
use std::io::{BufWriter, Write};

#[derive(Parser)]
pub struct ContigsCommand {
    #[clap(
        short,
        long,
        help = "A file containing whitespace-separated k-mers of equal length"
    )]
    pub input: String,

    #[clap(
        short,
        long,
        help = "The file the space-separated contigs are written to, sorted lexicographically"
    )]
    pub output: String,

    #[clap(
        short,
        long,
        help = "A file to output the statistics computed by this command formatted as a LaTeX table"
    )]
    pub latex: Option<String>,
}

fn print_contig_statistics(
    contigs: &[String],
    latex_file: &mut Option<BufWriter<File>>,
) -> crate::Result<()> {
    info!("");
    info!(" === Contig Statistics === ");
    info!("");

    let lengths: Vec<_> = contigs.iter().map(|contig| contig.chars().count()).collect();
    let (min_contig_len, max_contig_len) =
        match (lengths.iter().min(), lengths.iter().max()) {
            (Some(&min), Some(&max)) => (min, max),
            _ => {
                warn!("There are no contigs");
                return Ok(());
            }
        };
    let median_contig_len = statistical::median(&lengths);
    let mean_contig_len = statistical::mean(
        &lengths
            .iter()
            .map(|&length| length as f64)
            .collect::<Vec<_>>(),
    );

    info!("Number of contigs: {}", contigs.len());
    info!("Minimum contig length: {}", min_contig_len);
    info!("Maximum contig length: {}", max_contig_len);
    info!("Median contig length: {}", median_contig_len);
    info!("Mean contig length: {:.1}", mean_contig_len);

    if let Some(latex_file) = latex_file.as_mut() {
        writeln!(latex_file, "number of contigs & {} \\\\", contigs.len())?;
        writeln!(latex_file, "min contig length & {} \\\\", min_contig_len)?;
        writeln!(latex_file, "max contig length & {} \\\\", max_contig_len)?;
        writeln!(
            latex_file,
            "median contig length & {} \\\\",
            median_contig_len
        )?;
        writeln!(latex_file, "mean contig length & {:.1} \\\\", mean_contig_len)?;
    }

    info!("");
    Ok(())
}

pub(crate) fn contigs(_options: &CliOptions, subcommand: &ContigsCommand) -> crate::Result<()> {
    let mut latex_file = if let Some(latex_file_name) = &subcommand.latex {
        info!("Creating/truncating LaTeX file '{}'", latex_file_name);
        Some(BufWriter::new(File::create(latex_file_name)?))
    } else {
        None
    };

    info!("Reading dataset from '{}'", subcommand.input);
    let dataset = read_dataset(&subcommand.input)?;
    let kmers = parse_kmers(&dataset);

    info!("Computing contigs of {} k-mers", kmers.len());
    let contigs = generate_contigs(kmers);
    print_contig_statistics(&contigs, &mut latex_file)?;

    info!("Writing contigs to '{}'", subcommand.output);
    write_output(&subcommand.output, &render_path(&contigs))?;
    Ok(())
}
