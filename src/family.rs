//! Shape family expansion and mask deduplication
//!
//! A family pass turns the base tiles of one shape into an ordered list of
//! candidates (base keys in declaration order, each followed by its
//! 90°/180°/270° variants), then folds that list keeping only the first
//! candidate for each mask. Iteration order decides which of two
//! colliding keys is emitted, so it is part of the output contract.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use tracing::debug;

use crate::error::TileError;
use crate::geometry::{LanePaths, ShapeCatalog, TileShape};
use crate::key::TileKey;
use crate::port::{PortCodec, PortMask};
use crate::rotation::{Rotation, RotationTable};

/// How road tile files are named
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Naming {
    /// `road-tile-<shape>-<MM>.svg`, one file per distinct mask
    #[default]
    Mask,
    /// Legacy `road-tile-<shape>-<KEY>.svg`, one file per key, no dedup
    Key,
}

impl FromStr for Naming {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mask" => Ok(Naming::Mask),
            "key" => Ok(Naming::Key),
            other => Err(format!(
                "unknown naming scheme '{}' (expected 'mask' or 'key')",
                other
            )),
        }
    }
}

impl fmt::Display for Naming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Naming::Mask => "mask",
            Naming::Key => "key",
        })
    }
}

/// Read-only lookup tables shared by every generation pass
#[derive(Debug, Clone, Default)]
pub struct TileTables {
    pub codec: PortCodec,
    pub rotations: RotationTable,
    pub catalog: ShapeCatalog,
}

impl TileTables {
    pub fn standard() -> Self {
        Self {
            codec: PortCodec::standard(),
            rotations: RotationTable::standard(),
            catalog: ShapeCatalog::standard(),
        }
    }
}

/// One tile that may be emitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileCandidate {
    pub shape: TileShape,
    pub key: TileKey,
    pub mask: PortMask,
    pub rotation: Rotation,
    pub paths: LanePaths,
}

impl TileCandidate {
    /// File name under the given naming scheme
    pub fn file_name(&self, naming: Naming) -> String {
        match naming {
            Naming::Mask => format!("road-tile-{}-{}.svg", self.shape, self.mask),
            Naming::Key => format!("road-tile-{}-{}.svg", self.shape, self.key),
        }
    }

    /// Human-readable `<desc>` text under the given naming scheme
    pub fn description(&self, naming: Naming) -> String {
        match naming {
            Naming::Mask => format!(
                "{} tile, key={}, mask=0x{}",
                self.shape, self.key, self.mask
            ),
            Naming::Key => match self.key.route_description() {
                Some(route) => format!("{} tile: {}", self.shape.title(), route),
                None => format!("{} tile", self.shape.title()),
            },
        }
    }
}

/// Expand the base tiles of a shape into candidates in generation order
pub fn family_candidates(
    shape: TileShape,
    tables: &TileTables,
) -> Result<Vec<TileCandidate>, TileError> {
    let mut candidates = Vec::new();

    for base in tables.catalog.base_tiles(shape) {
        let key = TileKey::parse(base.key, &tables.codec)?;
        let variants = if shape.rotates() {
            tables.rotations.derive_variants(&key, &tables.codec)?
        } else {
            vec![crate::rotation::Variant {
                rotation: Rotation::Deg0,
                key,
            }]
        };

        candidates.extend(variants.into_iter().map(|variant| TileCandidate {
            shape,
            mask: variant.key.mask(),
            key: variant.key,
            rotation: variant.rotation,
            paths: base.paths,
        }));
    }

    Ok(candidates)
}

/// Result of folding candidates by mask
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dedup {
    /// First candidate for each mask, in input order
    pub kept: Vec<TileCandidate>,
    /// Later candidates whose mask was already kept
    pub skipped: Vec<TileCandidate>,
}

/// Keep the first candidate per mask; the seen set carries across the whole input
pub fn dedup_by_mask(candidates: impl IntoIterator<Item = TileCandidate>) -> Dedup {
    let (dedup, _seen) = candidates.into_iter().fold(
        (Dedup::default(), HashSet::new()),
        |(mut dedup, mut seen), candidate| {
            if seen.insert(candidate.mask) {
                dedup.kept.push(candidate);
            } else {
                debug!(
                    shape = %candidate.shape,
                    key = %candidate.key,
                    mask = %candidate.mask,
                    "skipping tile with duplicate mask"
                );
                dedup.skipped.push(candidate);
            }
            (dedup, seen)
        },
    );
    dedup
}

/// The tiles of one family that will be written
///
/// Mask naming folds duplicates away; legacy key naming emits every
/// candidate since each key has its own file name.
pub fn plan_family(
    shape: TileShape,
    naming: Naming,
    tables: &TileTables,
) -> Result<Vec<TileCandidate>, TileError> {
    let candidates = family_candidates(shape, tables)?;
    Ok(match naming {
        Naming::Mask => dedup_by_mask(candidates).kept,
        Naming::Key => candidates,
    })
}
