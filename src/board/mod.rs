//! The two-row board.
//!
//! Tiles sit in two staggered rows with a space in every gap and at both
//! ends. The shorter row is *active*: its markers must all move onto the
//! longer, *inactive* row before the creature can move. New tiles always
//! extend the active row, which then swaps roles with the other.

mod board;
mod fingerprint;
mod flank;
mod row;

pub use board::*;
pub use fingerprint::*;
pub use flank::*;
pub use row::*;
