use super::*;
use serde::Serialize;
use std::hash::Hash;
use std::hash::Hasher;

/// A structural summary of a board.
///
/// Covers which row is active and, row by row, each space's marker multiset
/// and each tile's token and creature flags. Markers of one color are
/// interchangeable, so boards that differ only in which blue marker stands
/// where share a fingerprint. Used as move identity and as a cache key.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Fingerprint(u64);

impl From<&Board> for Fingerprint {
    fn from(board: &Board) -> Self {
        let ref mut hasher = std::collections::hash_map::DefaultHasher::new();
        (board.level() == Level::Top).hash(hasher);
        for row in [board.top(), board.bottom()] {
            row.tiles().len().hash(hasher);
            for space in row.spaces() {
                space.palette().hash(hasher);
            }
            for tile in row.tiles() {
                tile.hash(hasher);
            }
        }
        Self(hasher.finish())
    }
}

impl From<Fingerprint> for u64 {
    fn from(print: Fingerprint) -> Self {
        print.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}
