//! Hand-authored tile geometry
//!
//! Road paths exist only for the base orientation; rotated variants reuse
//! them under a transform. Coordinates are in the 40×40 tile space with
//! the grid at 10-unit steps.

use std::fmt;

use crate::port::Port;

/// Road tile shape family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileShape {
    Straight,
    Sharp,
    Curve,
}

impl TileShape {
    /// Shapes in generation order
    pub const ALL: [TileShape; 3] = [TileShape::Curve, TileShape::Sharp, TileShape::Straight];

    /// Name used in file names and ids
    pub fn slug(self) -> &'static str {
        match self {
            TileShape::Straight => "straight",
            TileShape::Sharp => "sharp",
            TileShape::Curve => "curve",
        }
    }

    /// Capitalized name used in legacy descriptions
    pub fn title(self) -> &'static str {
        match self {
            TileShape::Straight => "Straight",
            TileShape::Sharp => "Sharp",
            TileShape::Curve => "Curve",
        }
    }

    /// Whether base tiles of this shape are expanded into four rotations
    pub fn rotates(self) -> bool {
        !matches!(self, TileShape::Straight)
    }
}

impl fmt::Display for TileShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Outer and inner lane boundaries as SVG path data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanePaths {
    pub outer: &'static str,
    pub inner: &'static str,
}

/// A hand-authored tile in its base orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseTile {
    pub key: &'static str,
    pub paths: LanePaths,
}

const fn base(key: &'static str, outer: &'static str, inner: &'static str) -> BaseTile {
    BaseTile {
        key,
        paths: LanePaths { outer, inner },
    }
}

const CURVE_TILES: [BaseTile; 4] = [
    base(
        "U1U2-R1R2",
        "M 10 0 L 10 10 C 10 15.5 14.5 20 20 20 L 40 20",
        "M 20 0 L 20 5 C 20 7.8 22.2 10 25 10 L 40 10",
    ),
    base(
        "U1U2-R2R3",
        "M 10 0 L 10 20 C 10 25.5 14.5 30 20 30 L 40 30",
        "M 20 0 L 20 15 C 20 17.8 22.2 20 25 20 L 40 20",
    ),
    base(
        "U2U3-R1R2",
        "M 20 0 L 20 10 C 20 15.5 24.5 20 30 20 L 40 20",
        "M 30 0 L 30 5 C 30 7.8 32.2 10 35 10 L 40 10",
    ),
    base(
        "U2U3-R2R3",
        "M 20 0 L 20 20 C 20 25.5 24.5 30 30 30 L 40 30",
        "M 30 0 L 30 15 C 30 17.8 32.2 20 35 20 L 40 20",
    ),
];

const SHARP_TILES: [BaseTile; 4] = [
    base("U1U2-R1R2", "M 10 0 L 10 20 L 40 20", "M 20 0 L 20 10 L 40 10"),
    base("U1U2-R2R3", "M 10 0 L 10 30 L 40 30", "M 20 0 L 20 20 L 40 20"),
    base("U2U3-R1R2", "M 20 0 L 20 20 L 40 20", "M 30 0 L 30 10 L 40 10"),
    base("U2U3-R2R3", "M 20 0 L 20 30 L 40 30", "M 30 0 L 30 20 L 40 20"),
];

// Central lanes only; each direction is drawn both ways.
const STRAIGHT_TILES: [BaseTile; 4] = [
    base("L2L3-R2R3", "M 0 20 L 40 20", "M 0 30 L 40 30"),
    base("R2R3-L2L3", "M 40 20 L 0 20", "M 40 30 L 0 30"),
    base("U2U3-D2D3", "M 20 0 L 20 40", "M 30 0 L 30 40"),
    base("D2D3-U2U3", "M 20 40 L 20 0", "M 30 40 L 30 0"),
];

/// Ordered base tiles for every shape family
#[derive(Debug, Clone)]
pub struct ShapeCatalog {
    curve: Vec<BaseTile>,
    sharp: Vec<BaseTile>,
    straight: Vec<BaseTile>,
}

impl ShapeCatalog {
    pub fn standard() -> Self {
        Self {
            curve: CURVE_TILES.to_vec(),
            sharp: SHARP_TILES.to_vec(),
            straight: STRAIGHT_TILES.to_vec(),
        }
    }

    /// Replace the base tiles of one family
    pub fn with_family(mut self, shape: TileShape, tiles: Vec<BaseTile>) -> Self {
        *self.family_mut(shape) = tiles;
        self
    }

    /// Base tiles of a family in declaration order
    pub fn base_tiles(&self, shape: TileShape) -> &[BaseTile] {
        match shape {
            TileShape::Curve => &self.curve,
            TileShape::Sharp => &self.sharp,
            TileShape::Straight => &self.straight,
        }
    }

    fn family_mut(&mut self, shape: TileShape) -> &mut Vec<BaseTile> {
        match shape {
            TileShape::Curve => &mut self.curve,
            TileShape::Sharp => &mut self.sharp,
            TileShape::Straight => &mut self.straight,
        }
    }
}

impl Default for ShapeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// A straight line segment in tile coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

const fn seg(x1: u32, y1: u32, x2: u32, y2: u32) -> Segment {
    Segment { x1, y1, x2, y2 }
}

/// The two lane edges a marker draws from the tile border to a port
pub fn port_lines(port: Port) -> [Segment; 2] {
    match port {
        Port::N0 => [seg(10, 0, 10, 10), seg(20, 0, 20, 10)],
        Port::N1 => [seg(20, 0, 20, 10), seg(30, 0, 30, 10)],
        Port::E0 => [seg(30, 10, 40, 10), seg(30, 20, 40, 20)],
        Port::E1 => [seg(30, 20, 40, 20), seg(30, 30, 40, 30)],
        Port::S1 => [seg(20, 30, 20, 40), seg(30, 30, 30, 40)],
        Port::S0 => [seg(10, 30, 10, 40), seg(20, 30, 20, 40)],
        Port::W1 => [seg(0, 20, 10, 20), seg(0, 30, 10, 30)],
        Port::W0 => [seg(0, 10, 10, 10), seg(0, 20, 10, 20)],
    }
}

/// Grid anchor points on the tile border: top, right, bottom, then left edge
pub const ANCHOR_POINTS: [(u32, u32); 12] = [
    (10, 0),
    (20, 0),
    (30, 0),
    (40, 10),
    (40, 20),
    (40, 30),
    (10, 40),
    (20, 40),
    (30, 40),
    (0, 10),
    (0, 20),
    (0, 30),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::PortCodec;

    #[test]
    fn test_catalog_sizes() {
        let catalog = ShapeCatalog::standard();
        for shape in TileShape::ALL {
            assert_eq!(catalog.base_tiles(shape).len(), 4, "{}", shape);
        }
    }

    #[test]
    fn test_catalog_keys_parse() {
        let codec = PortCodec::standard();
        let catalog = ShapeCatalog::standard();
        for shape in TileShape::ALL {
            for tile in catalog.base_tiles(shape) {
                assert!(codec.mask_from_key(tile.key).is_ok(), "{}", tile.key);
            }
        }
    }

    #[test]
    fn test_curve_and_sharp_share_base_keys() {
        let catalog = ShapeCatalog::standard();
        let curve: Vec<_> = catalog.base_tiles(TileShape::Curve).iter().map(|t| t.key).collect();
        let sharp: Vec<_> = catalog.base_tiles(TileShape::Sharp).iter().map(|t| t.key).collect();
        assert_eq!(curve, sharp);
    }

    #[test]
    fn test_port_lines_touch_the_border() {
        for port in Port::ALL {
            for line in port_lines(port) {
                let on_border = |x: u32, y: u32| x == 0 || x == 40 || y == 0 || y == 40;
                assert!(
                    on_border(line.x1, line.y1) || on_border(line.x2, line.y2),
                    "{} line does not reach the border",
                    port
                );
            }
        }
    }

    #[test]
    fn test_only_straight_is_fixed() {
        assert!(TileShape::Curve.rotates());
        assert!(TileShape::Sharp.rotates());
        assert!(!TileShape::Straight.rotates());
    }

    #[test]
    fn test_with_family_replaces_tiles() {
        let catalog = ShapeCatalog::standard().with_family(
            TileShape::Straight,
            vec![base("L2L3-R2R3", "M 0 20 L 40 20", "M 0 30 L 40 30")],
        );
        assert_eq!(catalog.base_tiles(TileShape::Straight).len(), 1);
        assert_eq!(catalog.base_tiles(TileShape::Curve).len(), 4);
    }
}
