//! Quarter-turn rotations and the derived-key table
//!
//! Curve and sharp tiles are hand-authored only for the north-to-east
//! orientation. The other three orientations reuse the same path data
//! wrapped in an SVG `rotate` transform, and take their keys from a fixed
//! [`RotationTable`].
//!
//! ## Rotation Convention
//!
//! Rotation uses the SVG convention: clockwise positive angles, in degrees,
//! about the tile centre.
//! - 0° = canonical orientation, no transform emitted
//! - 90° = north becomes east
//! - 180° = north becomes south
//! - 270° = north becomes west

use std::collections::HashMap;
use std::fmt;

use crate::error::TileError;
use crate::key::TileKey;
use crate::port::PortCodec;

/// A quarter-turn rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rotation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// All rotations in generation order
    pub const ALL: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    pub fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// Check if this rotation leaves the tile unchanged
    pub fn is_identity(self) -> bool {
        self == Rotation::Deg0
    }

    /// Position in a table row of rotated keys (90° is slot 0)
    fn table_slot(self) -> Option<usize> {
        match self {
            Rotation::Deg0 => None,
            Rotation::Deg90 => Some(0),
            Rotation::Deg180 => Some(1),
            Rotation::Deg270 => Some(2),
        }
    }

    /// SVG transform rotating about `(cx, cy)`, or `None` for 0°
    pub fn svg_transform(self, cx: f64, cy: f64) -> Option<String> {
        if self.is_identity() {
            None
        } else {
            Some(format!("rotate({} {} {})", self.degrees(), cx, cy))
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// One orientation of a base tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub rotation: Rotation,
    pub key: TileKey,
}

/// Standard remapping from each base key to its 90°, 180° and 270° keys
const STANDARD_ROTATIONS: [(&str, [&str; 3]); 4] = [
    ("U1U2-R1R2", ["R1R2-D1D2", "D1D2-L1L2", "L1L2-U1U2"]),
    ("U1U2-R2R3", ["R1R2-D2D3", "D1D2-L2L3", "L1L2-U2U3"]),
    ("U2U3-R1R2", ["R2R3-D1D2", "D2D3-L1L2", "L2L3-U1U2"]),
    ("U2U3-R2R3", ["R2R3-D2D3", "D2D3-L2L3", "L2L3-U2U3"]),
];

/// Table of derived keys for rotated base tiles
///
/// Rows may list fewer than three keys; asking for a missing angle is an
/// error rather than a silent skip.
#[derive(Debug, Clone, Default)]
pub struct RotationTable {
    rows: HashMap<String, Vec<String>>,
}

impl RotationTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// The table for the four north-to-east base keys
    pub fn standard() -> Self {
        STANDARD_ROTATIONS
            .iter()
            .fold(Self::new(), |table, (base, rotated)| {
                table.with_row(base, rotated)
            })
    }

    /// Add or replace the row for a base key (keys for 90°, 180°, 270°)
    pub fn with_row(mut self, base: &str, rotated: &[&str]) -> Self {
        self.rows.insert(
            base.to_string(),
            rotated.iter().map(|key| key.to_string()).collect(),
        );
        self
    }

    /// Derived key text for a base key at an angle
    pub fn rotated_key<'a>(&'a self, base: &'a str, rotation: Rotation) -> Option<&'a str> {
        match rotation.table_slot() {
            None => Some(base),
            Some(slot) => self
                .rows
                .get(base)
                .and_then(|row| row.get(slot))
                .map(String::as_str),
        }
    }

    /// Derive all four orientations of a base key, in 0/90/180/270 order
    ///
    /// The 0° entry is the base key unchanged.
    pub fn derive_variants(
        &self,
        base: &TileKey,
        codec: &PortCodec,
    ) -> Result<Vec<Variant>, TileError> {
        Rotation::ALL
            .into_iter()
            .map(|rotation| -> Result<Variant, TileError> {
                let key = if rotation.is_identity() {
                    base.clone()
                } else {
                    let text = self
                        .rotated_key(base.as_str(), rotation)
                        .ok_or_else(|| TileError::missing_rotation(base.as_str(), rotation))?;
                    TileKey::parse(text, codec)?
                };
                Ok(Variant { rotation, key })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(text: &str) -> TileKey {
        TileKey::parse(text, &PortCodec::standard()).unwrap()
    }

    #[test]
    fn test_identity_variant_is_base_key() {
        let codec = PortCodec::standard();
        let table = RotationTable::standard();
        for (base, _) in STANDARD_ROTATIONS {
            let base = key(base);
            let variants = table.derive_variants(&base, &codec).unwrap();
            assert_eq!(variants[0].rotation, Rotation::Deg0);
            assert_eq!(variants[0].key, base);
        }
    }

    #[test]
    fn test_variants_in_angle_order() {
        let codec = PortCodec::standard();
        let table = RotationTable::standard();
        let variants = table.derive_variants(&key("U1U2-R2R3"), &codec).unwrap();
        let got: Vec<_> = variants
            .iter()
            .map(|v| (v.rotation.degrees(), v.key.as_str()))
            .collect();
        assert_eq!(
            got,
            vec![
                (0, "U1U2-R2R3"),
                (90, "R1R2-D2D3"),
                (180, "D1D2-L2L3"),
                (270, "L1L2-U2U3"),
            ]
        );
    }

    #[test]
    fn test_missing_base_key() {
        let codec = PortCodec::standard();
        let table = RotationTable::standard();
        let err = table
            .derive_variants(&key("L2L3-R2R3"), &codec)
            .unwrap_err();
        assert_eq!(
            err,
            TileError::MissingRotationMapping {
                base: "L2L3-R2R3".to_string(),
                angle: Rotation::Deg90,
            }
        );
    }

    #[test]
    fn test_short_row_reports_missing_angle() {
        let codec = PortCodec::standard();
        let table = RotationTable::new().with_row("U1U2-R1R2", &["R1R2-D1D2", "D1D2-L1L2"]);
        let err = table
            .derive_variants(&key("U1U2-R1R2"), &codec)
            .unwrap_err();
        assert_eq!(
            err,
            TileError::missing_rotation("U1U2-R1R2", Rotation::Deg270)
        );
    }

    #[test]
    fn test_bad_derived_key_is_invalid() {
        let codec = PortCodec::standard();
        let table = RotationTable::new().with_row("U1U2-R1R2", &["R1R2-XX", "D1D2-L1L2", "L1L2-U1U2"]);
        let err = table
            .derive_variants(&key("U1U2-R1R2"), &codec)
            .unwrap_err();
        assert!(matches!(err, TileError::InvalidKey { .. }));
    }

    #[test]
    fn test_svg_transform() {
        assert_eq!(Rotation::Deg0.svg_transform(20.0, 20.0), None);
        assert_eq!(
            Rotation::Deg270.svg_transform(20.0, 20.0).unwrap(),
            "rotate(270 20 20)"
        );
    }
}
