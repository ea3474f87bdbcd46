//! Self-play of many independent games in parallel.

mod duel;
mod record;
mod sampler;

pub use duel::*;
pub use record::*;
pub use sampler::*;
