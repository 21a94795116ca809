//! Road Tiles CLI
//!
//! Usage:
//!   road-tiles [OPTIONS] [COMMAND]
//!
//! Commands:
//!   roads     Generate curve, sharp and straight road tiles
//!   markers   Generate the start and goal marker tiles
//!   all       Generate road tiles and markers (default)
//!
//! Options:
//!   -c, --config <FILE>      Generator configuration (TOML format)
//!   -s, --stylesheet <FILE>  Stylesheet file for tile colors (TOML format)
//!   -v, --verbose            Log every written file
//!   -h, --help               Print help

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use road_tiles::{
    generate_marker_tiles, generate_road_tiles, GenerateError, GenerationReport,
    GeneratorConfig, MarkerKind, Naming, RenderConfig, Stylesheet, TileTables,
};

#[derive(Parser)]
#[command(name = "road-tiles")]
#[command(about = "Generate SVG road and marker tiles for the maze game")]
struct Cli {
    /// Generator configuration (TOML format)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Stylesheet file for tile colors (TOML format)
    #[arg(short, long, global = true)]
    stylesheet: Option<PathBuf>,

    /// Log every written file
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate curve, sharp and straight road tiles
    Roads {
        /// File naming scheme: `mask` (hex mask) or `key` (legacy tile key)
        #[arg(long)]
        naming: Option<Naming>,

        /// Output directory
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Generate the start and goal marker tiles
    Markers {
        /// Port the start tile connects to (default: E0)
        #[arg(long)]
        start: Option<String>,

        /// Port the goal tile connects to (default: W0)
        #[arg(long)]
        goal: Option<String>,

        /// Output directory
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Generate road tiles and markers with the configured defaults
    All,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => match GeneratorConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                error!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => GeneratorConfig::default(),
    };

    // Load stylesheet
    let stylesheet = match &cli.stylesheet {
        Some(path) => match Stylesheet::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                error!("Error loading stylesheet '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Stylesheet::default(),
    };

    let render_config = RenderConfig::new().with_stylesheet(stylesheet);
    let tables = TileTables::standard();

    let result = match cli.command.unwrap_or(Command::All) {
        Command::Roads { naming, out } => {
            if let Some(naming) = naming {
                config = config.with_naming(naming);
            }
            if let Some(out) = out {
                let naming = config.naming;
                config = config.with_road_dir(naming, out);
            }
            run_roads(&config, &tables, &render_config)
        }
        Command::Markers { start, goal, out } => {
            if let Some(start) = start {
                config = config.with_marker_port(MarkerKind::Start, start);
            }
            if let Some(goal) = goal {
                config = config.with_marker_port(MarkerKind::Goal, goal);
            }
            if let Some(out) = out {
                config = config.with_marker_dir(out);
            }
            run_markers(&config, &tables, &render_config)
        }
        Command::All => run_roads(&config, &tables, &render_config)
            .and_then(|()| run_markers(&config, &tables, &render_config)),
    };

    if let Err(e) = result {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_roads(
    config: &GeneratorConfig,
    tables: &TileTables,
    render_config: &RenderConfig,
) -> Result<(), GenerateError> {
    let report = generate_road_tiles(
        config.road_dir(config.naming),
        config.naming,
        tables,
        render_config,
    )?;
    log_report("road", &report);
    Ok(())
}

fn run_markers(
    config: &GeneratorConfig,
    tables: &TileTables,
    render_config: &RenderConfig,
) -> Result<(), GenerateError> {
    let report = generate_marker_tiles(
        config.marker_dir(),
        config.markers.port_name(MarkerKind::Start),
        config.markers.port_name(MarkerKind::Goal),
        &tables.codec,
        render_config,
    )?;
    log_report("marker", &report);
    Ok(())
}

fn log_report(kind: &str, report: &GenerationReport) {
    info!(
        "Generated {} {} tiles in '{}'",
        report.written.len(),
        kind,
        report.directory.display()
    );
}
