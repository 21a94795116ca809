//! Start and goal marker tiles
//!
//! A marker connects to a single port. The port comes from the user, so an
//! unknown name is not an error: it is logged and replaced by the marker's
//! default port.

use std::fmt;

use tracing::warn;

use crate::port::{Port, PortCodec, PortMask};

/// Which marker to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    Start,
    Goal,
}

impl MarkerKind {
    /// Port used when none (or an invalid one) is given
    pub fn default_port(self) -> Port {
        match self {
            MarkerKind::Start => Port::E0,
            MarkerKind::Goal => Port::W0,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            MarkerKind::Start => "start",
            MarkerKind::Goal => "goal",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            MarkerKind::Start => "Start",
            MarkerKind::Goal => "Goal",
        }
    }

    /// Stylesheet token for the marker's accent color
    pub fn accent_token(self) -> &'static str {
        self.slug()
    }
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Resolve a user-supplied port name, falling back to the default
pub fn resolve_marker_port(kind: MarkerKind, name: &str, codec: &PortCodec) -> Port {
    match codec.marker_port(name) {
        Ok(port) => port,
        Err(err) => {
            let fallback = kind.default_port();
            warn!(
                marker = %kind,
                %err,
                "invalid {} port '{}', using default '{}'",
                kind,
                name,
                fallback
            );
            fallback
        }
    }
}

/// A marker tile ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerTile {
    pub kind: MarkerKind,
    pub ports: Vec<Port>,
    pub mask: PortMask,
}

impl MarkerTile {
    pub fn new(kind: MarkerKind, ports: Vec<Port>) -> Self {
        let mask = PortMask::from_ports(ports.iter().copied());
        Self { kind, ports, mask }
    }

    /// Marker for a user-supplied port name
    pub fn for_port_name(kind: MarkerKind, name: &str, codec: &PortCodec) -> Self {
        Self::new(kind, vec![resolve_marker_port(kind, name, codec)])
    }

    pub fn file_name(&self) -> String {
        format!("road-tile-marker-{}-{}.svg", self.kind, self.mask)
    }

    pub fn description(&self) -> String {
        let ports = self
            .ports
            .iter()
            .map(|port| port.marker_name())
            .collect::<Vec<_>>()
            .join(",");
        format!(
            "{} marker tile, ports=[{}], mask=0x{}",
            self.kind.title(),
            ports,
            self.mask
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_markers() {
        let codec = PortCodec::standard();
        let start = MarkerTile::for_port_name(MarkerKind::Start, "E0", &codec);
        let goal = MarkerTile::for_port_name(MarkerKind::Goal, "W0", &codec);
        assert_eq!(start.file_name(), "road-tile-marker-start-04.svg");
        assert_eq!(goal.file_name(), "road-tile-marker-goal-80.svg");
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let codec = PortCodec::standard();
        let start = MarkerTile::for_port_name(MarkerKind::Start, "Z9", &codec);
        assert_eq!(start.ports, vec![Port::E0]);
        assert_eq!(start.file_name(), "road-tile-marker-start-04.svg");

        let goal = MarkerTile::for_port_name(MarkerKind::Goal, "", &codec);
        assert_eq!(goal.file_name(), "road-tile-marker-goal-80.svg");
    }

    #[test]
    fn test_custom_port() {
        let codec = PortCodec::standard();
        let start = MarkerTile::for_port_name(MarkerKind::Start, "S1", &codec);
        assert_eq!(start.mask.bits(), 0x10);
        assert_eq!(start.file_name(), "road-tile-marker-start-10.svg");
    }

    #[test]
    fn test_pair_names_fall_back() {
        let codec = PortCodec::standard();
        let start = MarkerTile::for_port_name(MarkerKind::Start, "U1U2", &codec);
        assert_eq!(start.ports, vec![Port::E0]);
        assert_eq!(start.file_name(), "road-tile-marker-start-04.svg");

        let goal = MarkerTile::for_port_name(MarkerKind::Goal, "U2U3", &codec);
        assert_eq!(goal.ports, vec![Port::W0]);
        assert_eq!(goal.description(), "Goal marker tile, ports=[W0], mask=0x80");
    }

    #[test]
    fn test_description() {
        let tile = MarkerTile::new(MarkerKind::Start, vec![Port::E0]);
        assert_eq!(
            tile.description(),
            "Start marker tile, ports=[E0], mask=0x04"
        );
    }
}
