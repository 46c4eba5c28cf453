//! Number token placement.
//!
//! Tokens are laid counter-clockwise in a spiral starting from the top-left
//! tile, which reproduces the historical fixed token layout. The desert takes
//! no token, so every spiral slot after it shifts back by one.

use crate::error::SetupError;
use crate::terrain::Terrain;
use tracing::debug;

/// Token value for each spiral slot, in laying order.
pub const SPIRAL_TOKENS: [u8; 18] = [5, 2, 6, 3, 8, 10, 9, 12, 11, 4, 8, 10, 9, 4, 5, 6, 3, 11];

/// Spiral slot of each grid index (grid index is row by row from top-left).
pub const GRID_TO_SPIRAL: [usize; 19] = [0, 11, 10, 1, 12, 17, 9, 2, 13, 18, 16, 8, 3, 14, 15, 7, 4, 5, 6];

/// Token shown on tiles that never produce.
pub const NO_TOKEN: u8 = 0;

/// Assign a token to every tile of `terrain`, indexed by grid position.
///
/// Deserts get `NO_TOKEN`. Fails with `SupplyExhausted` if the board has
/// more tiles than spiral slots, or more producing tiles than tokens.
pub fn place_tokens(terrain: &[Terrain]) -> Result<Vec<u8>, SetupError> {
    if terrain.len() > GRID_TO_SPIRAL.len() {
        return Err(SetupError::SupplyExhausted {
            supply: "spiral slots".to_string(),
            needed: terrain.len(),
            available: GRID_TO_SPIRAL.len(),
        });
    }
    let producing = terrain.iter().filter(|t| !t.is_desert()).count();
    if producing > SPIRAL_TOKENS.len() {
        return Err(SetupError::SupplyExhausted {
            supply: "number tokens".to_string(),
            needed: producing,
            available: SPIRAL_TOKENS.len(),
        });
    }

    let mut spiral_order: Vec<usize> = (0..terrain.len()).collect();
    spiral_order.sort_by_key(|&grid| GRID_TO_SPIRAL[grid]);

    // Each desert passed pulls the remaining spiral slots back by one.
    let mut tokens = vec![NO_TOKEN; terrain.len()];
    let mut next = SPIRAL_TOKENS.iter();
    for grid in spiral_order {
        if terrain[grid].is_desert() {
            continue;
        }
        if let Some(&token) = next.next() {
            tokens[grid] = token;
        }
    }

    debug!(?tokens, "number tokens placed");
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::allocate_terrain;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn board_with_desert_at(desert: usize) -> Vec<Terrain> {
        let mut terrain = vec![Terrain::Forest; 19];
        terrain[desert] = Terrain::Desert;
        terrain
    }

    fn sorted(mut tokens: Vec<u8>) -> Vec<u8> {
        tokens.sort();
        tokens
    }

    #[test]
    fn test_grid_to_spiral_is_permutation() {
        let mut slots = GRID_TO_SPIRAL.to_vec();
        slots.sort();
        assert_eq!(slots, (0..19).collect::<Vec<_>>());
    }

    #[test]
    fn test_desert_in_centre_keeps_fixed_layout() {
        // The centre tile is the last spiral slot, so nothing shifts.
        let tokens = place_tokens(&board_with_desert_at(9)).unwrap();

        let expected: Vec<u8> = (0..19)
            .map(|grid| match GRID_TO_SPIRAL[grid] {
                18 => NO_TOKEN,
                slot => SPIRAL_TOKENS[slot],
            })
            .collect();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn test_desert_at_spiral_start_shifts_everything() {
        let tokens = place_tokens(&board_with_desert_at(0)).unwrap();

        assert_eq!(tokens[0], NO_TOKEN);
        // Grid 3 is spiral slot 1 and now takes the first token.
        assert_eq!(tokens[3], SPIRAL_TOKENS[0]);
        // The centre takes the last token.
        assert_eq!(tokens[9], SPIRAL_TOKENS[17]);
    }

    #[test]
    fn test_every_desert_position_uses_all_tokens() {
        for desert in 0..19 {
            let tokens = place_tokens(&board_with_desert_at(desert)).unwrap();

            assert_eq!(tokens[desert], NO_TOKEN);
            let placed: Vec<u8> = tokens
                .iter()
                .enumerate()
                .filter(|&(grid, _)| grid != desert)
                .map(|(_, &t)| t)
                .collect();
            assert_eq!(sorted(placed), sorted(SPIRAL_TOKENS.to_vec()), "desert at {}", desert);
        }
    }

    #[test]
    fn test_random_terrain_never_gets_seven() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let terrain = allocate_terrain(&mut rng).unwrap();
            let tokens = place_tokens(&terrain).unwrap();
            assert!(tokens.iter().all(|&t| t != 7));
            assert_eq!(tokens.iter().filter(|&&t| t == NO_TOKEN).count(), 1);
        }
    }

    #[test]
    fn test_oversized_board_is_rejected() {
        let mut terrain = vec![Terrain::Forest; 21];
        terrain[9] = Terrain::Desert;

        let err = place_tokens(&terrain).unwrap_err();
        assert_eq!(
            err,
            SetupError::SupplyExhausted {
                supply: "spiral slots".to_string(),
                needed: 21,
                available: 19,
            }
        );
    }

    #[test]
    fn test_small_board_never_leaves_producing_tile_bare() {
        let terrain = vec![Terrain::Hill; 10];
        let tokens = place_tokens(&terrain).unwrap();

        assert!(tokens.iter().all(|&t| t != NO_TOKEN), "tokens: {:?}", tokens);
    }

    #[test]
    fn test_board_without_desert_runs_out_of_tokens() {
        let err = place_tokens(&[Terrain::Field; 19]).unwrap_err();
        assert_eq!(
            err,
            SetupError::SupplyExhausted {
                supply: "number tokens".to_string(),
                needed: 19,
                available: 18,
            }
        );
    }
}
