//! Random turn order for the four players.

use crate::error::SetupError;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use std::hash::Hash;

/// Number of players in a game
pub const PLAYER_COUNT: usize = 4;

/// Shuffle the players into a turn order.
///
/// The caller's order carries no meaning. Requires exactly four distinct
/// players.
pub fn randomize_turn_order<P, R>(players: &[P], rng: &mut R) -> Result<Vec<P>, SetupError>
where
    P: Clone + Eq + Hash,
    R: Rng + ?Sized,
{
    let distinct: HashSet<&P> = players.iter().collect();
    if players.len() != PLAYER_COUNT || distinct.len() != PLAYER_COUNT {
        return Err(SetupError::InvalidPlayerCount {
            expected: PLAYER_COUNT,
            found: if players.len() == PLAYER_COUNT {
                distinct.len()
            } else {
                players.len()
            },
        });
    }

    let mut order = players.to_vec();
    order.shuffle(rng);
    Ok(order)
}
