//! Information-set Monte Carlo tree search.
//!
//! The engine is written against three small traits so that it knows
//! nothing about the board game it usually drives:
//! - `SearchTurn`: a side that can move and win
//! - `SearchEdge`: a move, whose equality defines tree-edge identity
//! - `SearchGame`: legal moves, transitions, outcomes and determinization
//!
//! Each iteration samples one concrete state from the root player's
//! information set, walks the tree using only moves legal in that sample,
//! expands one node, plays out at random and backs the result up.

mod edge;
mod game;
mod ismcts;
mod metrics;
mod node;
mod tree;
mod turn;

pub use edge::*;
pub use game::*;
pub use ismcts::*;
pub use metrics::*;
pub use node::*;
pub use tree::*;
pub use turn::*;
