//! Drawing pieces out of a fixed supply without replacement.

use crate::error::SetupError;
use rand::seq::SliceRandom;
use rand::Rng;

/// Draw `slots` pieces from `supply` without replacement.
///
/// Runs a Fisher-Yates shuffle over the whole supply and keeps the first
/// `slots` pieces, so every draw is uniform over the pieces still left.
pub(crate) fn draw<T, R>(
    supply: Vec<T>,
    slots: usize,
    name: &str,
    rng: &mut R,
) -> Result<Vec<T>, SetupError>
where
    R: Rng + ?Sized,
{
    if supply.len() < slots {
        return Err(SetupError::SupplyExhausted {
            supply: name.to_string(),
            needed: slots,
            available: supply.len(),
        });
    }

    let mut supply = supply;
    supply.shuffle(rng);
    supply.truncate(slots);
    Ok(supply)
}
