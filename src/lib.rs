//! Road Tiles - SVG asset generator for a tile-based road/maze game
//!
//! Each road tile connects a pair of lane ports on the edges of a 40×40
//! tile. Connectivity is encoded as an 8-bit [`PortMask`], which the game
//! engine switches on to pick compatible tiles. This library derives every
//! orientation of the hand-authored base tiles, folds duplicate masks, and
//! renders one SVG per tile.
//!
//! # Example
//!
//! ```rust
//! use road_tiles::{render_road_tiles, Naming, RenderConfig, TileTables};
//!
//! let tables = TileTables::standard();
//! let tiles = render_road_tiles(Naming::Mask, &tables, &RenderConfig::default()).unwrap();
//! assert_eq!(tiles.len(), 34);
//! assert!(tiles.iter().any(|t| t.file_name == "road-tile-straight-48.svg"));
//! ```

pub mod config;
pub mod error;
pub mod family;
pub mod geometry;
pub mod key;
pub mod marker;
pub mod output;
pub mod port;
pub mod renderer;
pub mod rotation;
pub mod stylesheet;

use std::path::Path;

use tracing::info;

pub use config::{ConfigError, GeneratorConfig};
pub use error::{GenerateError, TileError};
pub use family::{dedup_by_mask, family_candidates, plan_family, Naming, TileCandidate, TileTables};
pub use geometry::{ShapeCatalog, TileShape};
pub use key::TileKey;
pub use marker::{MarkerKind, MarkerTile};
pub use output::{write_tiles, GenerationReport};
pub use port::{Port, PortCodec, PortMask};
pub use renderer::{RenderedTile, SvgConfig};
pub use rotation::{Rotation, RotationTable};
pub use stylesheet::Stylesheet;

/// Configuration for rendering tiles
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Stylesheet for color resolution
    pub stylesheet: Stylesheet,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the stylesheet for color resolution
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }
}

/// Render every road tile family (curve, sharp, straight) in generation order
pub fn render_road_tiles(
    naming: Naming,
    tables: &TileTables,
    config: &RenderConfig,
) -> Result<Vec<RenderedTile>, TileError> {
    let mut rendered = Vec::new();

    for shape in TileShape::ALL {
        let tiles = plan_family(shape, naming, tables)?;
        info!(shape = %shape, count = tiles.len(), "generating {} tiles", shape);
        rendered.extend(tiles.iter().map(|tile| {
            renderer::render_road_tile(tile, naming, &config.svg, &config.stylesheet)
        }));
    }

    Ok(rendered)
}

/// Render the start and goal markers for user-supplied port names
///
/// Invalid names are logged and replaced by the marker defaults, so this
/// never fails.
pub fn render_marker_tiles(
    start: &str,
    goal: &str,
    codec: &PortCodec,
    config: &RenderConfig,
) -> Vec<RenderedTile> {
    [(MarkerKind::Start, start), (MarkerKind::Goal, goal)]
        .into_iter()
        .map(|(kind, name)| {
            let marker = MarkerTile::for_port_name(kind, name, codec);
            info!(
                marker = %kind,
                mask = %marker.mask,
                "generating {} marker",
                kind
            );
            renderer::render_marker_tile(&marker, &config.svg, &config.stylesheet)
        })
        .collect()
}

/// Render and write all road tiles into `directory`
pub fn generate_road_tiles(
    directory: &Path,
    naming: Naming,
    tables: &TileTables,
    config: &RenderConfig,
) -> Result<GenerationReport, GenerateError> {
    let tiles = render_road_tiles(naming, tables, config)?;
    write_tiles(directory, &tiles)
}

/// Render and write both marker tiles into `directory`
pub fn generate_marker_tiles(
    directory: &Path,
    start: &str,
    goal: &str,
    codec: &PortCodec,
    config: &RenderConfig,
) -> Result<GenerationReport, GenerateError> {
    let tiles = render_marker_tiles(start, goal, codec, config);
    write_tiles(directory, &tiles)
}
