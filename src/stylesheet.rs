//! Color palette for generated tiles
//!
//! Tiles are drawn with a handful of named color tokens. A stylesheet maps
//! those tokens to concrete values and can be loaded from TOML to restyle
//! the whole tile set without touching geometry.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A stylesheet mapping color tokens to concrete values
#[derive(Debug, Clone)]
pub struct Stylesheet {
    /// Optional name for the stylesheet
    pub name: Option<String>,
    /// Color mappings: token name -> color
    pub colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
}

/// Default palette: faint grid, black lanes, blue start, red goal
const DEFAULT_PALETTE: [(&str, &str); 7] = [
    ("grid", "#ccc"),
    ("road", "#000"),
    ("connector", "#000"),
    ("anchor", "#ff0000"),
    ("pole", "#555"),
    ("start", "#3498db"),
    ("goal", "#e74c3c"),
];

/// Color for a token in the built-in palette
fn default_color(token: &str) -> Option<&'static str> {
    DEFAULT_PALETTE
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, color)| *color)
}

impl Stylesheet {
    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load stylesheet from TOML string
    pub fn from_str(content: &str) -> Result<Self, StylesheetError> {
        let parsed: TomlStylesheet = toml::from_str(content)?;

        Ok(Stylesheet {
            name: parsed.metadata.and_then(|m| m.name),
            colors: parsed.colors,
        })
    }

    /// Resolve a color token to a concrete value
    ///
    /// Returns None if the token is not defined in this stylesheet.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Resolve a color token with fallback to the default palette, then black
    pub fn resolve_or_default(&self, token: &str) -> String {
        if let Some(color) = self.resolve(token) {
            return color.to_string();
        }

        default_color(token).unwrap_or("#000").to_string()
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self {
            name: Some("default".to_string()),
            colors: DEFAULT_PALETTE
                .iter()
                .map(|(token, color)| (token.to_string(), color.to_string()))
                .collect(),
        }
    }
}
