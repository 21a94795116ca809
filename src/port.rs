//! Tile ports and the 8-bit connectivity mask
//!
//! A 40×40 tile has three grid segments per side. Each side exposes two
//! lane ports (the segment pairs 1-2 and 2-3), giving eight ports total.
//! Every port owns one bit of a [`PortMask`]:
//!
//! ```text
//! bit:    0    1    2    3    4    5    6    7
//! pair:   U1U2 U2U3 R1R2 R2R3 D2D3 D1D2 L2L3 L1L2
//! marker: N0   N1   E0   E1   S1   S0   W1   W0
//! ```
//!
//! The south and west sides are mirrored, so bit order runs clockwise
//! around the tile. Downstream consumers switch on these masks, so the
//! layout must never change.

use std::collections::HashMap;
use std::fmt;
use std::ops::BitOr;

use crate::error::TileError;

/// The side of a tile a port sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    North,
    East,
    South,
    West,
}

impl Side {
    /// Human-readable side name used in legacy tile descriptions
    pub fn label(self) -> &'static str {
        match self {
            Side::North => "Upper",
            Side::East => "Right",
            Side::South => "Bottom",
            Side::West => "Left",
        }
    }
}

/// One of the eight lane ports around a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Port {
    N0,
    N1,
    E0,
    E1,
    S1,
    S0,
    W1,
    W0,
}

impl Port {
    /// All ports in bit order
    pub const ALL: [Port; 8] = [
        Port::N0,
        Port::N1,
        Port::E0,
        Port::E1,
        Port::S1,
        Port::S0,
        Port::W1,
        Port::W0,
    ];

    /// Bit index of this port in a [`PortMask`]
    pub fn bit(self) -> u8 {
        match self {
            Port::N0 => 0,
            Port::N1 => 1,
            Port::E0 => 2,
            Port::E1 => 3,
            Port::S1 => 4,
            Port::S0 => 5,
            Port::W1 => 6,
            Port::W0 => 7,
        }
    }

    /// Single-port mask
    pub fn mask(self) -> PortMask {
        PortMask(1 << self.bit())
    }

    /// Short name used by marker tiles (`E0`)
    pub fn marker_name(self) -> &'static str {
        match self {
            Port::N0 => "N0",
            Port::N1 => "N1",
            Port::E0 => "E0",
            Port::E1 => "E1",
            Port::S1 => "S1",
            Port::S0 => "S0",
            Port::W1 => "W1",
            Port::W0 => "W0",
        }
    }

    /// Grid segment pair name used in road tile keys (`R1R2`)
    pub fn pair_name(self) -> &'static str {
        match self {
            Port::N0 => "U1U2",
            Port::N1 => "U2U3",
            Port::E0 => "R1R2",
            Port::E1 => "R2R3",
            Port::S1 => "D2D3",
            Port::S0 => "D1D2",
            Port::W1 => "L2L3",
            Port::W0 => "L1L2",
        }
    }

    pub fn side(self) -> Side {
        match self {
            Port::N0 | Port::N1 => Side::North,
            Port::E0 | Port::E1 => Side::East,
            Port::S1 | Port::S0 => Side::South,
            Port::W1 | Port::W0 => Side::West,
        }
    }

    /// Coordinate range the port covers along its side, e.g. `(X:10-20)`
    pub fn span(self) -> &'static str {
        match self {
            Port::N0 | Port::S0 => "(X:10-20)",
            Port::N1 | Port::S1 => "(X:20-30)",
            Port::E0 | Port::W0 => "(Y:10-20)",
            Port::E1 | Port::W1 => "(Y:20-30)",
        }
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker_name())
    }
}

/// 8-bit set of connected ports
///
/// Displays as two upper-case hex digits, which is the form embedded in
/// output file names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PortMask(u8);

impl PortMask {
    /// Mask with no connections
    pub const EMPTY: PortMask = PortMask(0);

    pub fn new(bits: u8) -> Self {
        Self(bits)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, port: Port) -> bool {
        self.0 & port.mask().0 != 0
    }

    /// OR of the bits of every port; order and duplicates do not matter
    pub fn from_ports(ports: impl IntoIterator<Item = Port>) -> Self {
        ports
            .into_iter()
            .fold(PortMask::EMPTY, |mask, port| mask | port.mask())
    }

    /// Set ports in bit order
    pub fn ports(self) -> Vec<Port> {
        Port::ALL
            .into_iter()
            .filter(|port| self.contains(*port))
            .collect()
    }
}

impl BitOr for PortMask {
    type Output = PortMask;

    fn bitor(self, rhs: PortMask) -> PortMask {
        PortMask(self.0 | rhs.0)
    }
}

impl BitOr<Port> for PortMask {
    type Output = PortMask;

    fn bitor(self, rhs: Port) -> PortMask {
        self | rhs.mask()
    }
}

impl fmt::Display for PortMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}", self.0)
    }
}

impl fmt::UpperHex for PortMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for PortMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// Lookup tables from port names to ports
///
/// Tile keys are written in segment pair names (`R1R2`) and markers take
/// marker names (`E0`). The two namespaces are kept apart so a name is
/// only valid where it belongs. Build it once with
/// [`PortCodec::standard`] and pass it by reference.
#[derive(Debug, Clone)]
pub struct PortCodec {
    pairs: HashMap<&'static str, Port>,
    markers: HashMap<&'static str, Port>,
}

impl PortCodec {
    /// Codec covering the eight standard ports
    pub fn standard() -> Self {
        Self {
            pairs: Port::ALL
                .into_iter()
                .map(|port| (port.pair_name(), port))
                .collect(),
            markers: Port::ALL
                .into_iter()
                .map(|port| (port.marker_name(), port))
                .collect(),
        }
    }

    /// Resolve a segment pair name as used in tile keys
    pub fn port(&self, name: &str) -> Result<Port, TileError> {
        self.pairs
            .get(name)
            .copied()
            .ok_or_else(|| TileError::unknown_port(name))
    }

    /// Resolve a marker port name
    pub fn marker_port(&self, name: &str) -> Result<Port, TileError> {
        self.markers
            .get(name)
            .copied()
            .ok_or_else(|| TileError::unknown_port(name))
    }

    /// Bit index in `[0, 7]` for a segment pair name
    pub fn port_bit(&self, name: &str) -> Result<u8, TileError> {
        self.port(name).map(Port::bit)
    }

    /// OR of the bits of every named port
    pub fn mask_from_names<'a>(
        &self,
        names: impl IntoIterator<Item = &'a str>,
    ) -> Result<PortMask, TileError> {
        names
            .into_iter()
            .try_fold(PortMask::EMPTY, |mask, name| Ok(mask | self.port(name)?))
    }

    /// Mask of a `-`-delimited tile key such as `U1U2-R1R2`
    pub fn mask_from_key(&self, key: &str) -> Result<PortMask, TileError> {
        crate::key::TileKey::parse(key, self).map(|key| key.mask())
    }
}

impl Default for PortCodec {
    fn default() -> Self {
        Self::standard()
    }
}
