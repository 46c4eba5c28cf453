//! Player handles for the game being set up.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use uuid::{Builder, Uuid};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("Player name cannot be empty")]
    EmptyName,

    #[error("Duplicate player name: {0}")]
    DuplicateName(String),
}

/// A named participant with a stable identity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Party {
    pub id: Uuid,
    pub name: String,
}

/// Give each player name an identity drawn from `rng`.
///
/// Names are trimmed and must be unique, since two parties with the same
/// name would be indistinguishable in the output.
pub fn roster<R: Rng + ?Sized>(names: &[String], rng: &mut R) -> Result<Vec<Party>, RosterError> {
    let mut seen = HashSet::new();
    let mut parties = Vec::with_capacity(names.len());

    for name in names {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if !seen.insert(name) {
            return Err(RosterError::DuplicateName(name.to_string()));
        }
        parties.push(Party {
            id: Builder::from_random_bytes(rng.gen()).into_uuid(),
            name: name.to_string(),
        });
    }

    Ok(parties)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_roster_assigns_unique_ids() {
        let mut rng = StdRng::seed_from_u64(1);
        let parties = roster(&names(&["Alice", " Bob ", "Carol", "Dave"]), &mut rng).unwrap();

        assert_eq!(parties.len(), 4);
        assert_eq!(parties[1].name, "Bob");
        let ids: HashSet<Uuid> = parties.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_roster_is_reproducible() {
        let a = roster(&names(&["Alice", "Bob"]), &mut StdRng::seed_from_u64(3)).unwrap();
        let b = roster(&names(&["Alice", "Bob"]), &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_roster_rejects_bad_names() {
        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(
            roster(&names(&["Alice", "  "]), &mut rng),
            Err(RosterError::EmptyName)
        );
        assert_eq!(
            roster(&names(&["Alice", "Alice"]), &mut rng),
            Err(RosterError::DuplicateName("Alice".to_string()))
        );
    }
}
