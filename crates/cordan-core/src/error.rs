//! Errors raised while setting up a game.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when generating a board
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum SetupError {
    #[error("Not enough {supply} to fill the board: needed {needed}, have {available}")]
    SupplyExhausted {
        supply: String,
        needed: usize,
        available: usize,
    },

    #[error("Tile {index} cannot hold token {token}")]
    InvalidTile { index: usize, token: u8 },

    #[error("Expected {expected} distinct players, got {found}")]
    InvalidPlayerCount { expected: usize, found: usize },
}
