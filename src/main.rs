//! ecore-graph CLI entry point

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use ecore_graph::extract::{AttributeCollision, ExtractOptions, Extractor};
use ecore_graph::graph::{EdgeIdGenerator, Graph, SequentialEdgeIds, UuidEdgeIds};
use ecore_graph::interchange::{Backend, EcoreXmi, IdRefScanner, ModelSource, detect_source};

#[derive(Parser)]
#[command(name = "ecore-graph")]
#[command(about = "Extract a node/edge graph from an Ecore/XMI metamodel", long_about = None)]
#[command(version)]
struct Cli {
    /// Metamodel document (.ecore, .xmi or .xml)
    input: PathBuf,

    /// Backend to read the document with (defaults to detection by extension)
    #[arg(short, long, value_enum)]
    backend: Option<BackendArg>,

    /// TOML file with extraction options
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip features whose type cannot be resolved instead of failing
    #[arg(long)]
    lenient: bool,

    /// Process the classifiers of each package in parallel
    #[arg(long)]
    parallel: bool,

    /// How to handle two entries with the same key on one node
    #[arg(long, value_enum)]
    collision: Option<CollisionArg>,

    /// Edge id scheme
    #[arg(long, value_enum, default_value_t = IdsArg::Uuid)]
    ids: IdsArg,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Write the graph to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum BackendArg {
    Ecore,
    Scan,
}

impl From<BackendArg> for Backend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Ecore => Backend::Ecore,
            BackendArg::Scan => Backend::Scan,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum CollisionArg {
    Suffix,
    LastWins,
    Error,
}

impl From<CollisionArg> for AttributeCollision {
    fn from(arg: CollisionArg) -> Self {
        match arg {
            CollisionArg::Suffix => AttributeCollision::Suffix,
            CollisionArg::LastWins => AttributeCollision::LastWins,
            CollisionArg::Error => AttributeCollision::Error,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum IdsArg {
    Uuid,
    Sequential,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the graph
    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ecore_graph={log_level}")));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let graph = run(&cli)?;

    let rendered = match cli.format {
        OutputFormat::Json => graph.to_json(cli.pretty)?,
        OutputFormat::Yaml => graph.to_yaml()?,
    };
    match &cli.output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{rendered}"),
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<Graph> {
    let input = std::fs::read(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let backend = match cli.backend {
        Some(arg) => arg.into(),
        None => detect_source(&cli.input).with_context(|| {
            format!(
                "cannot pick a backend for {}; pass --backend",
                cli.input.display()
            )
        })?,
    };
    tracing::info!(input = %cli.input.display(), %backend, "reading metamodel");

    match backend {
        Backend::Scan => IdRefScanner
            .scan(&input)
            .with_context(|| format!("failed to scan {}", cli.input.display())),
        Backend::Ecore => {
            EcoreXmi
                .validate(&input)
                .with_context(|| format!("{} is not an Ecore document", cli.input.display()))?;
            let model = EcoreXmi
                .read(&input)
                .with_context(|| format!("failed to read {}", cli.input.display()))?;

            let options = options(cli.config.as_deref(), cli)?;
            let ids: Box<dyn EdgeIdGenerator> = match cli.ids {
                IdsArg::Uuid => Box::new(UuidEdgeIds),
                IdsArg::Sequential => Box::new(SequentialEdgeIds::new()),
            };

            let extraction = Extractor::new(ids.as_ref())
                .with_options(options)
                .extract(&model)
                .with_context(|| format!("failed to extract a graph from {}", cli.input.display()))?;
            if !extraction.skipped.is_empty() {
                tracing::info!(skipped = extraction.skipped.len(), "some features were skipped");
            }
            Ok(extraction.graph)
        }
    }
}

/// File options first, then command-line overrides.
fn options(config: Option<&Path>, cli: &Cli) -> Result<ExtractOptions> {
    let mut options = match config {
        Some(path) => ExtractOptions::load(path)
            .with_context(|| format!("failed to load options from {}", path.display()))?,
        None => ExtractOptions::default(),
    };
    if cli.lenient {
        options = options.lenient();
    }
    if cli.parallel {
        options = options.with_parallel(true);
    }
    if let Some(collision) = cli.collision {
        options = options.with_collision(collision.into());
    }
    Ok(options)
}
