/// A move. Equality and hashing decide which tree edge a move follows, so
/// moves built independently but with equal identity share statistics.
pub trait SearchEdge:
    Clone + PartialEq + Eq + std::hash::Hash + std::fmt::Debug + std::fmt::Display + Send + Sync
{
}
