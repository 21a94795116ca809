//! Generator configuration loaded from TOML
//!
//! Every field has a default, so an empty file (or no file at all) gives
//! the standard output layout:
//!
//! ```toml
//! naming = "mask"
//!
//! [output]
//! roads = "road_tiles_8bit"
//! legacy = "road_tiles"
//! markers = "marker_tiles"
//!
//! [markers]
//! start = "E0"
//! goal = "W0"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::family::Naming;
use crate::marker::MarkerKind;

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Output directories per generator
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Mask-named road tiles
    pub roads: PathBuf,
    /// Key-named (legacy) road tiles
    pub legacy: PathBuf,
    /// Start and goal markers
    pub markers: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            roads: PathBuf::from("road_tiles_8bit"),
            legacy: PathBuf::from("road_tiles"),
            markers: PathBuf::from("marker_tiles"),
        }
    }
}

/// Default marker ports; invalid names fall back at generation time
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    pub start: String,
    pub goal: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            start: MarkerKind::Start.default_port().marker_name().to_string(),
            goal: MarkerKind::Goal.default_port().marker_name().to_string(),
        }
    }
}

impl MarkerConfig {
    pub fn port_name(&self, kind: MarkerKind) -> &str {
        match kind {
            MarkerKind::Start => &self.start,
            MarkerKind::Goal => &self.goal,
        }
    }
}

/// Top-level generator configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Road tile naming scheme
    pub naming: Naming,
    pub output: OutputConfig,
    pub markers: MarkerConfig,
}

impl GeneratorConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Set the road tile naming scheme
    pub fn with_naming(mut self, naming: Naming) -> Self {
        self.naming = naming;
        self
    }

    /// Set the marker port name for one marker kind
    pub fn with_marker_port(mut self, kind: MarkerKind, name: impl Into<String>) -> Self {
        match kind {
            MarkerKind::Start => self.markers.start = name.into(),
            MarkerKind::Goal => self.markers.goal = name.into(),
        }
        self
    }

    /// Set the road tile output directory for a naming scheme
    pub fn with_road_dir(mut self, naming: Naming, dir: impl Into<PathBuf>) -> Self {
        match naming {
            Naming::Mask => self.output.roads = dir.into(),
            Naming::Key => self.output.legacy = dir.into(),
        }
        self
    }

    /// Set the marker output directory
    pub fn with_marker_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output.markers = dir.into();
        self
    }

    /// Output directory for road tiles under a naming scheme
    pub fn road_dir(&self, naming: Naming) -> &Path {
        match naming {
            Naming::Mask => &self.output.roads,
            Naming::Key => &self.output.legacy,
        }
    }

    pub fn marker_dir(&self) -> &Path {
        &self.output.markers
    }
}
