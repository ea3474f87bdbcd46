use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    Scientist,
    Creature,
}

impl Side {
    pub const fn all() -> [Self; 2] {
        [Self::Scientist, Self::Creature]
    }
    pub fn other(&self) -> Self {
        match self {
            Self::Scientist => Self::Creature,
            Self::Creature => Self::Scientist,
        }
    }
}

impl crate::search::SearchTurn for Side {}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scientist => write!(f, "SCIENTIST"),
            Self::Creature => write!(f, "CREATURE"),
        }
    }
}
