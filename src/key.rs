//! Tile keys: the entry/exit port pairs a road tile connects

use std::fmt;

use crate::error::TileError;
use crate::port::{Port, PortCodec, PortMask};

/// Separator between port tokens in a key
pub const KEY_DELIMITER: char = '-';

/// A parsed tile key such as `U1U2-R1R2`
///
/// The original text is kept because legacy output names files after it.
/// Two keys that list the same ports in a different order are distinct
/// keys but fold to the same [`PortMask`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TileKey {
    text: String,
    ports: Vec<Port>,
}

impl TileKey {
    /// Parse a key, resolving every token through the codec
    pub fn parse(key: &str, codec: &PortCodec) -> Result<Self, TileError> {
        let ports = key
            .split(KEY_DELIMITER)
            .map(|token| {
                codec
                    .port(token)
                    .map_err(|_| TileError::invalid_key(key, token))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            text: key.to_string(),
            ports,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Ports in key order
    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    pub fn mask(&self) -> PortMask {
        PortMask::from_ports(self.ports.iter().copied())
    }

    /// Entry and exit ports, if the key is a single two-port route
    pub fn route(&self) -> Option<(Port, Port)> {
        match self.ports.as_slice() {
            [entry, exit] => Some((*entry, *exit)),
            _ => None,
        }
    }

    /// Describe the route, e.g. `Entry Upper (X:10-20), Exit Right (Y:10-20)`
    pub fn route_description(&self) -> Option<String> {
        self.route().map(|(entry, exit)| {
            format!(
                "Entry {} {}, Exit {} {}",
                entry.side().label(),
                entry.span(),
                exit.side().label(),
                exit.span()
            )
        })
    }
}

impl fmt::Display for TileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
