//! Game setup: assembling a fresh board and turn tracker.
//!
//! `setup_game` is the single entry point. It either returns a complete,
//! valid board or an error; there is no partially built result. The states
//! it returns are read-only; later gameplay builds successor states instead
//! of mutating these.

use crate::error::SetupError;
use crate::ports::{allocate_ports, Port};
use crate::terrain::allocate_terrain;
use crate::tile::{build_adjacency, HexTile, TileIndex};
use crate::tokens::place_tokens;
use crate::turn_order::randomize_turn_order;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::hash::Hash;
use tracing::info;
use uuid::{Builder, Uuid};

/// The initial board of a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameBoardState<P> {
    linear_id: Uuid,
    robber_placed: bool,
    hex_tiles: Vec<HexTile>,
    ports: Vec<Port>,
    /// Players in turn order
    players: Vec<P>,
}

impl<P> GameBoardState<P> {
    /// Stable identifier of this game across successor states
    pub fn linear_id(&self) -> Uuid {
        self.linear_id
    }

    /// Whether the robber has been moved onto the board yet
    pub fn robber_placed(&self) -> bool {
        self.robber_placed
    }

    pub fn hex_tiles(&self) -> &[HexTile] {
        &self.hex_tiles
    }

    pub fn tile(&self, index: TileIndex) -> Option<&HexTile> {
        self.hex_tiles.get(index)
    }

    /// The desert tile
    pub fn desert(&self) -> Option<&HexTile> {
        self.hex_tiles.iter().find(|t| t.is_desert())
    }

    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    /// Players in turn order
    pub fn players(&self) -> &[P] {
        &self.players
    }
}

/// Tracks whose turn it is, separately from the board layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnTrackerState<P> {
    linear_id: Uuid,
    participants: Vec<P>,
    current_turn_index: usize,
    setup_round_1_complete: bool,
    setup_round_2_complete: bool,
}

impl<P> TurnTrackerState<P> {
    fn new(linear_id: Uuid, participants: Vec<P>) -> Self {
        Self {
            linear_id,
            participants,
            current_turn_index: 0,
            setup_round_1_complete: false,
            setup_round_2_complete: false,
        }
    }

    pub fn linear_id(&self) -> Uuid {
        self.linear_id
    }

    /// Players in turn order
    pub fn participants(&self) -> &[P] {
        &self.participants
    }

    pub fn current_turn_index(&self) -> usize {
        self.current_turn_index
    }

    /// The player whose turn it is
    pub fn current_player(&self) -> Option<&P> {
        self.participants.get(self.current_turn_index)
    }

    pub fn setup_round_1_complete(&self) -> bool {
        self.setup_round_1_complete
    }

    pub fn setup_round_2_complete(&self) -> bool {
        self.setup_round_2_complete
    }
}

/// Everything produced by one game setup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSetup<P> {
    pub board: GameBoardState<P>,
    pub turn_tracker: TurnTrackerState<P>,
}

/// Set up a game using the thread-local RNG.
pub fn setup_game<P>(players: &[P]) -> Result<GameSetup<P>, SetupError>
where
    P: Clone + Eq + Hash,
{
    let mut rng = rand::thread_rng();
    setup_game_with_rng(players, &mut rng)
}

/// Set up a game from a seed, for reproducible boards.
pub fn setup_game_seeded<P>(players: &[P], seed: u64) -> Result<GameSetup<P>, SetupError>
where
    P: Clone + Eq + Hash,
{
    let mut rng = StdRng::seed_from_u64(seed);
    setup_game_with_rng(players, &mut rng)
}

/// Set up a game with a provided RNG.
///
/// All randomness comes from `rng`, so the same RNG state always yields the
/// same setup.
pub fn setup_game_with_rng<P, R>(players: &[P], rng: &mut R) -> Result<GameSetup<P>, SetupError>
where
    P: Clone + Eq + Hash,
    R: Rng + ?Sized,
{
    let players = randomize_turn_order(players, rng)?;

    let terrain = allocate_terrain(rng)?;
    let tokens = place_tokens(&terrain)?;
    let mut hex_tiles: Vec<HexTile> = terrain
        .into_iter()
        .zip(tokens)
        .enumerate()
        .map(|(index, (terrain, token))| HexTile::new(index, terrain, token))
        .collect::<Result<_, _>>()?;
    build_adjacency(&mut hex_tiles);

    let ports = allocate_ports(rng)?;

    let board = GameBoardState {
        linear_id: random_id(rng),
        robber_placed: false,
        hex_tiles,
        ports,
        players: players.clone(),
    };
    let turn_tracker = TurnTrackerState::new(random_id(rng), players);

    info!(
        game = %board.linear_id,
        desert = ?board.desert().map(HexTile::index),
        "game board set up"
    );

    Ok(GameSetup {
        board,
        turn_tracker,
    })
}

/// A v4 UUID drawn from `rng` rather than the OS, so seeded setups repeat.
fn random_id<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    Builder::from_random_bytes(rng.gen()).into_uuid()
}
