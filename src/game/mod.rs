//! Game state, setup configuration and the turn phase machine.

mod config;
mod game;
mod phase;

pub use config::*;
pub use game::*;
pub use phase::*;
