use serde::Serialize;

/// One edge of the board.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Flank {
    Left,
    Right,
}

impl Flank {
    pub const fn all() -> [Self; 2] {
        [Self::Left, Self::Right]
    }
}

impl std::fmt::Display for Flank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "LEFT"),
            Self::Right => write!(f, "RIGHT"),
        }
    }
}
