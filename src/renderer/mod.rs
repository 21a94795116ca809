//! SVG renderer for road and marker tiles
//!
//! Every document is a self-contained 40×40 tile with a faint alignment
//! grid, the road or connector strokes, and a `<desc>` naming the key and
//! mask it was generated from.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::{render_marker_tile, render_road_tile, RenderedTile, SvgBuilder};
