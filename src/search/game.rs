use super::*;
use rand::Rng;

/// The game state as seen by the search. It must be cheap to clone and
/// must never mutate in place: `apply` returns the successor.
///
/// A state with no choices is terminal.
pub trait SearchGame: Clone + Send + Sync {
    type E: SearchEdge;
    type T: SearchTurn;
    /// The side choosing at this state, or `None` where no side does.
    fn turn(&self) -> Option<Self::T>;
    fn choices(&self) -> Vec<Self::E>;
    fn apply(&self, edge: &Self::E) -> Self;
    /// The winning side once terminal.
    fn winner(&self) -> Option<Self::T>;
    /// Resamples everything `observer` cannot see.
    fn determinize<R: Rng + ?Sized>(&self, observer: Self::T, rng: &mut R) -> Self;
}
