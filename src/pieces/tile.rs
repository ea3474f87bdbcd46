use serde::Deserialize;
use serde::Serialize;

/// A board tile.
///
/// Token tiles start with their token present; the token can later be
/// claimed by the creature or collected by the scientists when the tile is
/// dropped. The creature flag marks a tile as a possible creature position.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    token: bool,
    token_present: bool,
    creature_present: bool,
}

impl Tile {
    /// A fresh tile from the deck.
    pub fn new(token: bool) -> Self {
        Self {
            token,
            token_present: token,
            creature_present: false,
        }
    }
    pub fn is_token(&self) -> bool {
        self.token
    }
    pub fn has_token(&self) -> bool {
        self.token_present
    }
    pub fn has_creature(&self) -> bool {
        self.creature_present
    }
    /// Removes the token, returning whether there was one to take.
    pub fn take_token(&mut self) -> bool {
        std::mem::replace(&mut self.token_present, false)
    }
    pub fn set_creature(&mut self, present: bool) {
        self.creature_present = present;
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}",
            match (self.token, self.token_present) {
                (true, true) => "★",
                (true, false) => "☆",
                (false, _) => " ",
            },
            if self.creature_present { "☻" } else { " " }
        )
    }
}
