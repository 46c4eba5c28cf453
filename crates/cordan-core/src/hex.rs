//! Hex coordinate system using axial coordinates (q, r).
//!
//! The 19-tile board is addressed two ways:
//! - a grid index 0-18, row by row from the top-left tile
//! - an axial `HexCoord`, used to check that the neighbor graph matches
//!   real hex geometry
//!
//! Directions are numbered 0-5 clockwise from NorthEast, so the opposite of
//! direction `d` is always `(d + 3) % 6`.

use serde::{Deserialize, Serialize};

/// Number of land tiles on a standard board.
pub const TILE_COUNT: usize = 19;

/// Tile counts of the five hex rows, top to bottom.
pub const ROW_SIZES: [usize; 5] = [3, 4, 5, 4, 3];

/// Direction of an edge (and so of a neighbor) relative to a hex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeDirection {
    /// Northeast edge (top-right), index 0
    NorthEast,
    /// East edge (right), index 1
    East,
    /// Southeast edge (bottom-right), index 2
    SouthEast,
    /// Southwest edge (bottom-left), index 3
    SouthWest,
    /// West edge (left), index 4
    West,
    /// Northwest edge (top-left), index 5
    NorthWest,
}

impl EdgeDirection {
    /// All edge directions in clockwise order starting from NorthEast
    pub const ALL: [EdgeDirection; 6] = [
        EdgeDirection::NorthEast,
        EdgeDirection::East,
        EdgeDirection::SouthEast,
        EdgeDirection::SouthWest,
        EdgeDirection::West,
        EdgeDirection::NorthWest,
    ];

    /// Numeric slot of this direction (0-5)
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Direction for a numeric slot, `None` outside 0-5
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The direction pointing back the other way
    pub fn opposite(self) -> Self {
        Self::ALL[(self.index() + 3) % 6]
    }
}

/// Axial coordinate for hex grid.
///
/// In axial coordinates:
/// - `q` increases going east (right)
/// - `r` increases going southeast
/// - The third coordinate `s` (not stored) satisfies: q + r + s = 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HexCoord {
    /// Column (increases going east)
    pub q: i32,
    /// Row (increases going southeast)
    pub r: i32,
}

impl HexCoord {
    /// Create a new hex coordinate
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The implicit third coordinate (s = -q - r)
    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Axial coordinate of a grid index, `None` past the last tile.
    pub fn for_grid_index(index: usize) -> Option<Self> {
        let mut first = 0;
        for (row, size) in ROW_SIZES.iter().enumerate() {
            if index < first + size {
                let r = row as i32 - 2;
                let q = (-2 - r).max(-2) + (index - first) as i32;
                return Some(Self::new(q, r));
            }
            first += size;
        }
        None
    }

    /// The six neighboring hexes, indexed like `EdgeDirection::ALL`
    pub fn neighbors(&self) -> [HexCoord; 6] {
        EdgeDirection::ALL.map(|dir| self.neighbor(dir))
    }

    /// Get the neighbor in a specific direction
    pub fn neighbor(&self, direction: EdgeDirection) -> HexCoord {
        match direction {
            EdgeDirection::East => HexCoord::new(self.q + 1, self.r),
            EdgeDirection::NorthEast => HexCoord::new(self.q + 1, self.r - 1),
            EdgeDirection::NorthWest => HexCoord::new(self.q, self.r - 1),
            EdgeDirection::West => HexCoord::new(self.q - 1, self.r),
            EdgeDirection::SouthWest => HexCoord::new(self.q - 1, self.r + 1),
            EdgeDirection::SouthEast => HexCoord::new(self.q, self.r + 1),
        }
    }

    /// Distance to another hex (in hex steps)
    pub fn distance_to(&self, other: &HexCoord) -> u32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = (self.s() - other.s()).abs();
        ((dq + dr + ds) / 2) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_opposite_is_three_steps_round() {
        for dir in EdgeDirection::ALL {
            assert_eq!(dir.opposite().index(), (dir.index() + 3) % 6);
            assert_eq!(dir.opposite().opposite(), dir);
        }
        assert_eq!(EdgeDirection::East.opposite(), EdgeDirection::West);
        assert_eq!(EdgeDirection::NorthEast.opposite(), EdgeDirection::SouthWest);
    }

    #[test]
    fn test_from_index() {
        assert_eq!(EdgeDirection::from_index(0), Some(EdgeDirection::NorthEast));
        assert_eq!(EdgeDirection::from_index(5), Some(EdgeDirection::NorthWest));
        assert_eq!(EdgeDirection::from_index(6), None);
    }

    #[test]
    fn test_hex_neighbors() {
        let center = HexCoord::new(0, 0);
        let neighbors = center.neighbors();

        let unique: HashSet<_> = neighbors.iter().collect();
        assert_eq!(unique.len(), 6);

        for neighbor in &neighbors {
            assert_eq!(center.distance_to(neighbor), 1);
        }
    }

    #[test]
    fn test_neighbor_and_opposite_round_trip() {
        let hex = HexCoord::new(1, -2);
        for dir in EdgeDirection::ALL {
            assert_eq!(hex.neighbor(dir).neighbor(dir.opposite()), hex);
        }
    }

    #[test]
    fn test_grid_index_coords() {
        assert_eq!(HexCoord::for_grid_index(0), Some(HexCoord::new(0, -2)));
        assert_eq!(HexCoord::for_grid_index(3), Some(HexCoord::new(-1, -1)));
        assert_eq!(HexCoord::for_grid_index(9), Some(HexCoord::new(0, 0)));
        assert_eq!(HexCoord::for_grid_index(11), Some(HexCoord::new(2, 0)));
        assert_eq!(HexCoord::for_grid_index(18), Some(HexCoord::new(0, 2)));
        assert_eq!(HexCoord::for_grid_index(TILE_COUNT), None);
    }

    #[test]
    fn test_grid_stays_within_radius_two() {
        let center = HexCoord::new(0, 0);
        let coords: HashSet<_> = (0..TILE_COUNT)
            .filter_map(HexCoord::for_grid_index)
            .collect();

        assert_eq!(coords.len(), TILE_COUNT);
        assert!(coords.iter().all(|c| c.distance_to(&center) <= 2));
    }
}
