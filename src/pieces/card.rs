use serde::Deserialize;
use serde::Serialize;

/// A move card held in a hand.
///
/// Cards only name an action; the legal moves each one allows are produced
/// by the generators in [`crate::moves`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Card {
    /// Move a single marker a knight's step onto the inactive row.
    MoveOne,
    /// Move every marker of one color one step left or right.
    MoveAll,
    /// Split the markers of one space between its two inactive neighbours.
    Split,
    /// Place markers that fell off a dropped edge.
    PlaceCubes,
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MoveOne => write!(f, "O"),
            Self::MoveAll => write!(f, "A"),
            Self::Split => write!(f, "S"),
            Self::PlaceCubes => write!(f, "P"),
        }
    }
}
