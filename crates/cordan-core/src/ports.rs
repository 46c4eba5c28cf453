//! Trade ports and their access points.
//!
//! A port lets a player with a settlement on one of its access points trade
//! at a better rate than the 4:1 bank rate. There are nine fixed port
//! locations around the coast; which port tile lands at which location is
//! randomized.

use crate::error::SetupError;
use crate::supply;
use crate::terrain::Resource;
use crate::tile::TileIndex;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A port tile: what it trades and at which rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PortTile {
    /// 3:1 trade any resource
    Generic,
    /// 2:1 trade for a specific resource
    Specific(Resource),
}

impl PortTile {
    /// The exchange rate for this port
    pub fn rate(&self) -> u32 {
        match self {
            PortTile::Generic => 3,
            PortTile::Specific(_) => 2,
        }
    }

    /// Resource this port is bound to, `None` for generic ports
    pub fn resource(&self) -> Option<Resource> {
        match self {
            PortTile::Generic => None,
            PortTile::Specific(r) => Some(*r),
        }
    }
}

/// The spots on one tile from which a port can be used
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPoint {
    pub tile: TileIndex,
    /// Corner slots (0-5) of the tile that touch the port
    pub points: Vec<u8>,
}

impl AccessPoint {
    pub fn new(tile: TileIndex, points: &[u8]) -> Self {
        Self {
            tile,
            points: points.to_vec(),
        }
    }
}

/// A port tile bound to its location on the coast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    pub tile: PortTile,
    pub access_points: Vec<AccessPoint>,
}

/// The nine port tiles of a standard game.
pub const PORT_SUPPLY: [PortTile; 9] = [
    PortTile::Specific(Resource::Wood),
    PortTile::Specific(Resource::Ore),
    PortTile::Specific(Resource::Wheat),
    PortTile::Generic,
    PortTile::Specific(Resource::Sheep),
    PortTile::Specific(Resource::Brick),
    PortTile::Generic,
    PortTile::Generic,
    PortTile::Generic,
];

/// Access points of the nine port locations, clockwise from the top-left.
pub const ACCESS_POINT_GROUPS: [&[(TileIndex, &[u8])]; 9] = [
    &[(0, &[5, 1])],
    &[(1, &[0, 2]), (2, &[5])],
    &[(2, &[2]), (6, &[0, 1])],
    &[(11, &[1, 2])],
    &[(15, &[2, 3]), (18, &[1])],
    &[(18, &[4]), (17, &[2, 3])],
    &[(16, &[3, 4])],
    &[(12, &[4, 5]), (7, &[3])],
    &[(3, &[4, 5]), (7, &[0])],
];

/// Place the standard port tiles on the standard locations.
pub fn allocate_ports<R: Rng + ?Sized>(rng: &mut R) -> Result<Vec<Port>, SetupError> {
    let groups: Vec<Vec<AccessPoint>> = ACCESS_POINT_GROUPS
        .iter()
        .map(|group| {
            group
                .iter()
                .map(|&(tile, points)| AccessPoint::new(tile, points))
                .collect()
        })
        .collect();
    allocate_ports_from(&PORT_SUPPLY, groups, rng)
}

/// Bind one port tile from `supply` to each access point group.
///
/// Each port tile is used at most once. Fails with `SupplyExhausted` when
/// there are more groups than tiles.
pub fn allocate_ports_from<R: Rng + ?Sized>(
    supply: &[PortTile],
    groups: Vec<Vec<AccessPoint>>,
    rng: &mut R,
) -> Result<Vec<Port>, SetupError> {
    let tiles = supply::draw(supply.to_vec(), groups.len(), "port tiles", rng)?;

    let ports: Vec<Port> = tiles
        .into_iter()
        .zip(groups)
        .map(|(tile, access_points)| Port {
            tile,
            access_points,
        })
        .collect();

    debug!(
        order = ?ports.iter().map(|p| p.tile).collect::<Vec<_>>(),
        "ports allocated"
    );
    Ok(ports)
}
