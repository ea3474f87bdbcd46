//! Primitive pieces of the game.
//!
//! These are plain containers: markers identified only by color, tiles with
//! their presence flags, spaces holding markers, a generic deck with a discard
//! pile, and the move cards held in hands.

mod card;
mod color;
mod deck;
mod palette;
mod space;
mod tile;

pub use card::*;
pub use color::*;
pub use deck::*;
pub use palette::*;
pub use space::*;
pub use tile::*;
