use serde::Deserialize;
use serde::Serialize;

/// A colored marker.
///
/// Markers carry no identity beyond their color: two blue markers are the
/// same marker for every rule, descriptor and fingerprint in the game.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Blue,
    Orange,
    Green,
}

impl Color {
    pub const N: usize = 3;
    pub const fn all() -> [Self; Self::N] {
        [Self::Blue, Self::Orange, Self::Green]
    }
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blue => write!(f, "B"),
            Self::Orange => write!(f, "O"),
            Self::Green => write!(f, "G"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_order() {
        assert_eq!(Color::all().map(|c| c.index()), [0, 1, 2]);
        assert!(Color::Blue < Color::Orange && Color::Orange < Color::Green);
    }
}
