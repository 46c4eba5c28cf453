//! Hex tiles and the neighbor graph connecting them.
//!
//! Tiles live in a single `Vec` owned by the board. Neighbor links are grid
//! indices into that `Vec`, so the graph has no ownership cycles and can be
//! serialized as-is.

use crate::error::SetupError;
use crate::hex::{EdgeDirection, HexCoord, ROW_SIZES};
use crate::terrain::{Resource, Terrain};
use serde::{Deserialize, Serialize};

/// Index of a tile in the board's tile list (0-18)
pub type TileIndex = usize;

/// A single hex tile on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexTile {
    /// Grid index, row by row from the top-left tile
    index: TileIndex,
    coord: HexCoord,
    terrain: Terrain,
    /// Dice number that triggers production (0 on the desert)
    token: u8,
    /// Neighbor in each direction, indexed by `EdgeDirection::index`
    neighbors: [Option<TileIndex>; 6],
}

impl HexTile {
    /// Create an unconnected tile.
    ///
    /// Fails with `InvalidTile` when `index` is off the grid, when a desert
    /// carries a token, or when a producing tile's token is not a dice total
    /// other than 7.
    pub fn new(index: TileIndex, terrain: Terrain, token: u8) -> Result<Self, SetupError> {
        let valid_token = if terrain.is_desert() {
            token == 0
        } else {
            (2..=12).contains(&token) && token != 7
        };
        let coord = HexCoord::for_grid_index(index)
            .filter(|_| valid_token)
            .ok_or(SetupError::InvalidTile { index, token })?;

        Ok(Self {
            index,
            coord,
            terrain,
            token,
            neighbors: [None; 6],
        })
    }

    pub fn index(&self) -> TileIndex {
        self.index
    }

    /// Axial position of the tile
    pub fn coord(&self) -> HexCoord {
        self.coord
    }

    pub fn terrain(&self) -> Terrain {
        self.terrain
    }

    pub fn token(&self) -> u8 {
        self.token
    }

    pub fn is_desert(&self) -> bool {
        self.terrain.is_desert()
    }

    /// Neighbor in a given direction, `None` on the coast
    pub fn neighbor(&self, direction: EdgeDirection) -> Option<TileIndex> {
        self.neighbors[direction.index()]
    }

    /// All existing neighbors with their direction
    pub fn neighbors(&self) -> impl Iterator<Item = (EdgeDirection, TileIndex)> + '_ {
        EdgeDirection::ALL
            .into_iter()
            .filter_map(|dir| self.neighbor(dir).map(|n| (dir, n)))
    }

    /// Resource this tile produces, if any
    pub fn resource(&self) -> Option<Resource> {
        self.terrain.resource()
    }

    /// Check if this tile produces resources
    pub fn is_productive(&self) -> bool {
        !self.is_desert() && self.token != 0
    }
}

/// Link two tiles, writing both reciprocal slots.
///
/// `b` becomes `a`'s neighbor in `direction`, and `a` becomes `b`'s neighbor
/// in the opposite direction. Out-of-range indices are ignored.
pub fn connect_tiles(tiles: &mut [HexTile], a: TileIndex, direction: EdgeDirection, b: TileIndex) {
    if a >= tiles.len() || b >= tiles.len() {
        return;
    }
    tiles[a].neighbors[direction.index()] = Some(b);
    tiles[b].neighbors[direction.opposite().index()] = Some(a);
}

/// Links from each band to the neighboring band: (first, last, [(direction, offset)]).
///
/// The middle row (7-11) only receives links; the bands above and below
/// reach into it.
const BAND_LINKS: [(TileIndex, TileIndex, [(EdgeDirection, isize); 2]); 4] = [
    (0, 2, [(EdgeDirection::SouthWest, 3), (EdgeDirection::SouthEast, 4)]),
    (3, 6, [(EdgeDirection::SouthWest, 4), (EdgeDirection::SouthEast, 5)]),
    (12, 15, [(EdgeDirection::NorthWest, -5), (EdgeDirection::NorthEast, -4)]),
    (16, 18, [(EdgeDirection::NorthWest, -4), (EdgeDirection::NorthEast, -3)]),
];

/// Connect all tiles into the standard 3-4-5-4-3 hex grid.
pub fn build_adjacency(tiles: &mut [HexTile]) {
    for (first, last, links) in BAND_LINKS {
        for i in first..=last {
            for (direction, offset) in links {
                if let Some(j) = i.checked_add_signed(offset) {
                    connect_tiles(tiles, i, direction, j);
                }
            }
        }
    }

    // East links inside each row, the middle row included
    let mut first = 0;
    for size in ROW_SIZES {
        for i in first..first + size - 1 {
            connect_tiles(tiles, i, EdgeDirection::East, i + 1);
        }
        first += size;
    }
}
