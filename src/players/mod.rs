//! The two sides and their private holdings.

mod loadout;
mod player;
mod side;

pub use loadout::*;
pub use player::*;
pub use side::*;
