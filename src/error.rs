//! Error types for tile codecs and generation

use std::path::PathBuf;

use thiserror::Error;

use crate::rotation::Rotation;

/// Errors raised by the port codec and the rotation table
///
/// Every tile table is a compile-time constant, so these indicate a bug in
/// a table rather than bad user input. Marker ports are the exception and
/// are recovered by the marker generator before they reach the codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileError {
    /// Name is neither a marker name (`E0`) nor a pair name (`R1R2`)
    #[error("unknown port '{name}'")]
    UnknownPort { name: String },

    /// Key contains an empty or unrecognized token
    #[error("invalid tile key '{key}': unrecognized token '{token}'")]
    InvalidKey { key: String, token: String },

    /// Rotation table has no derived key for this base key and angle
    #[error("no rotation mapping for base key '{base}' at {angle}")]
    MissingRotationMapping { base: String, angle: Rotation },
}

impl TileError {
    /// Create an unknown port error
    pub fn unknown_port(name: impl Into<String>) -> Self {
        Self::UnknownPort { name: name.into() }
    }

    /// Create an invalid key error
    pub fn invalid_key(key: impl Into<String>, token: impl Into<String>) -> Self {
        Self::InvalidKey {
            key: key.into(),
            token: token.into(),
        }
    }

    /// Create a missing rotation mapping error
    pub fn missing_rotation(base: impl Into<String>, angle: Rotation) -> Self {
        Self::MissingRotationMapping {
            base: base.into(),
            angle,
        }
    }
}

/// Errors that abort a generation run
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A hardcoded table is inconsistent
    #[error(transparent)]
    Tile(#[from] TileError),

    /// Output directory or file could not be written
    #[error("failed to write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
