//! Move descriptors and legal-move generation.
//!
//! Generators are pure functions of a [`crate::game::Game`]. Each returns a
//! deduplicated `Vec<Move>` in a stable order; the game applies a chosen
//! move by cloning itself.

mod action;
mod cards;
mod movement;
mod phases;
mod placement;

pub use action::*;
pub use cards::*;
pub use movement::*;
pub use phases::*;
pub use placement::*;
