use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use dagpath::config::RunConfig;
use dagpath::export::{self, CsvExporter, CsvTable, ExportData, ExportFormat, Exporter};
use dagpath::graph::DependencyGraph;
use dagpath::logger;

#[derive(Parser)]
#[command(name = "dagpath")]
#[command(author = "Zachary Woods <143150513+zach-fau@users.noreply.github.com>")]
#[command(version)]
#[command(about = "Validate dependency records as a DAG and enumerate every source-to-sink path", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored log output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate every path from a source to a sink
    Paths(PathsArgs),
    /// Check that the records form a DAG and print a topological order
    Validate {
        /// JSON record file (defaults to the built-in sample)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Show version information
    Version,
}

#[derive(Args)]
struct PathsArgs {
    /// JSON record file (defaults to the built-in sample)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Report format: text, csv, json or markdown
    #[arg(short, long, default_value = "text")]
    format: ExportFormat,

    /// CSV table to print: steps or summary
    #[arg(short, long, default_value = "steps")]
    table: CsvTable,

    /// Also write the list, steps and summary files into this directory
    #[arg(short, long)]
    out_dir: Option<PathBuf>,
}

impl From<PathsArgs> for RunConfig {
    fn from(args: PathsArgs) -> Self {
        RunConfig {
            input: args.input,
            format: args.format,
            table: args.table,
            out_dir: args.out_dir,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose, cli.quiet, cli.no_color);

    match cli.command {
        Some(Commands::Paths(args)) => run_paths(&args.into()),
        Some(Commands::Validate { input }) => run_validate(&RunConfig {
            input,
            ..Default::default()
        }),
        Some(Commands::Version) => {
            println!("dagpath v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        None => {
            println!("dagpath - DAG validation and path enumeration");
            println!("Run 'dagpath paths' to enumerate paths of the sample dataset");
            println!("Run 'dagpath --help' for more information");
            Ok(())
        }
    }
}

fn load_graph(config: &RunConfig) -> Result<DependencyGraph> {
    config.validate()?;
    let records = config.load_records().context("failed to load records")?;
    Ok(DependencyGraph::from_records(&records))
}

fn run_paths(config: &RunConfig) -> Result<()> {
    let graph = load_graph(config)?;
    let dag = graph.validate()?;

    info!(expected = dag.count_paths(), "enumerating paths");
    let data = ExportData::new(&dag);
    info!(
        paths = data.path_count(),
        sources = data.sources.len(),
        sinks = data.sinks.len(),
        "enumeration complete"
    );

    let mut report = Vec::new();
    match config.format {
        ExportFormat::Csv => CsvExporter::new(config.table).export(&data, &mut report)?,
        format => export::export(format, &data, &mut report)?,
    }

    if let Some(dir) = &config.out_dir {
        let written = export::write_report_files(dir, &data)
            .with_context(|| format!("failed to write reports to {}", dir.display()))?;
        for path in written {
            info!(path = %path.display(), "saved");
        }
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(&report)?;
    stdout.flush()?;

    Ok(())
}

fn run_validate(config: &RunConfig) -> Result<()> {
    let graph = load_graph(config)?;
    let dag = graph.validate()?;

    println!(
        "OK: {} nodes, {} edges, acyclic",
        graph.node_count(),
        graph.edge_count()
    );
    println!("order:   {}", dag.topological_order().join(", "));
    println!("sources: [{}]", dag.sources().join(", "));
    println!("sinks:   [{}]", dag.sinks().join(", "));
    Ok(())
}
