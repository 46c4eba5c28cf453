//! Terrain types and the terrain allocator.
//!
//! A standard board holds 4 Forest, 4 Pasture, 4 Field, 3 Hill, 3 Mountain
//! and a single Desert. The allocator deals them out in grid order.

use crate::error::SetupError;
use crate::hex::TILE_COUNT;
use crate::supply;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Resources produced by the board and traded at ports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    Wood,
    Ore,
    Wheat,
    Sheep,
    Brick,
}

impl Resource {
    /// All resource types
    pub const ALL: [Resource; 5] = [
        Resource::Wood,
        Resource::Ore,
        Resource::Wheat,
        Resource::Sheep,
        Resource::Brick,
    ];
}

/// Terrain of a hex tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    Forest,
    Pasture,
    Field,
    Hill,
    Mountain,
    /// Produces nothing and carries no token
    Desert,
}

impl Terrain {
    /// All terrain types
    pub const ALL: [Terrain; 6] = [
        Terrain::Forest,
        Terrain::Pasture,
        Terrain::Field,
        Terrain::Hill,
        Terrain::Mountain,
        Terrain::Desert,
    ];

    /// Resource harvested from this terrain, if any
    pub fn resource(&self) -> Option<Resource> {
        match self {
            Terrain::Forest => Some(Resource::Wood),
            Terrain::Pasture => Some(Resource::Sheep),
            Terrain::Field => Some(Resource::Wheat),
            Terrain::Hill => Some(Resource::Brick),
            Terrain::Mountain => Some(Resource::Ore),
            Terrain::Desert => None,
        }
    }

    pub fn is_desert(&self) -> bool {
        matches!(self, Terrain::Desert)
    }
}

/// Maximum number of tiles of each terrain type on a standard board.
pub const TERRAIN_SUPPLY: [(Terrain, usize); 6] = [
    (Terrain::Forest, 4),
    (Terrain::Pasture, 4),
    (Terrain::Field, 4),
    (Terrain::Hill, 3),
    (Terrain::Mountain, 3),
    (Terrain::Desert, 1),
];

/// Deal terrain for all 19 tiles from the standard supply.
pub fn allocate_terrain<R: Rng + ?Sized>(rng: &mut R) -> Result<Vec<Terrain>, SetupError> {
    allocate_terrain_from(&TERRAIN_SUPPLY, rng)
}

/// Deal terrain for all 19 tiles from a custom per-type supply.
///
/// Fails with `SupplyExhausted` when the supply holds fewer than 19 tiles.
pub fn allocate_terrain_from<R: Rng + ?Sized>(
    supply: &[(Terrain, usize)],
    rng: &mut R,
) -> Result<Vec<Terrain>, SetupError> {
    let bag: Vec<Terrain> = supply
        .iter()
        .flat_map(|&(terrain, count)| std::iter::repeat(terrain).take(count))
        .collect();

    let terrain = supply::draw(bag, TILE_COUNT, "terrain tiles", rng)?;
    debug!(
        desert = ?terrain.iter().position(Terrain::is_desert),
        "terrain allocated"
    );
    Ok(terrain)
}
