/// A side in the game: the party that moves into a node and that a
/// terminal outcome can credit.
pub trait SearchTurn:
    Copy + Clone + PartialEq + Eq + std::hash::Hash + std::fmt::Debug + Send + Sync
{
}
