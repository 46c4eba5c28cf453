//! Cordan - board setup engine for a Catan game
//!
//! This crate builds the opening state of a four-player game:
//! - 19 hex tiles with shuffled terrain and spiral-ordered number tokens
//! - a fixed neighbor graph between the tiles
//! - 9 trade ports dealt onto the fixed coastal locations
//! - a random turn order
//!
//! # Architecture
//!
//! Every step takes the RNG as a parameter, so a seeded RNG reproduces a
//! board exactly. The result is plain serializable data; signing, storing
//! and sharing it is left to the caller.
//!
//! # Modules
//!
//! - [`hex`]: Grid directions and axial coordinates
//! - [`terrain`]: Terrain types and the terrain allocator
//! - [`tokens`]: Number token placement
//! - [`tile`]: Hex tiles and the adjacency graph
//! - [`ports`]: Port tiles and port allocation
//! - [`turn_order`]: Turn order shuffle
//! - [`setup`]: Assembling the board and turn tracker

pub mod error;
pub mod hex;
pub mod ports;
pub mod setup;
mod supply;
pub mod terrain;
pub mod tile;
pub mod tokens;
pub mod turn_order;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use error::SetupError;
pub use hex::{EdgeDirection, HexCoord, TILE_COUNT};
pub use ports::{AccessPoint, Port, PortTile};
pub use setup::{
    setup_game, setup_game_seeded, setup_game_with_rng, GameBoardState, GameSetup,
    TurnTrackerState,
};
pub use terrain::{Resource, Terrain};
pub use tile::{HexTile, TileIndex};
pub use turn_order::PLAYER_COUNT;
