use super::Color;
use serde::Deserialize;
use serde::Serialize;

/// A multiset of marker colors, stored as one count per color.
///
/// This is the canonical form of "some markers": it forgets which marker
/// object is which, so two groups holding the same colors in any order
/// compare, hash and fingerprint identically.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Palette([u8; Color::N]);

impl Palette {
    pub fn empty() -> Self {
        Self::default()
    }
    pub fn add(&mut self, color: Color) {
        self.0[color.index()] += 1;
    }
    pub fn count(&self, color: Color) -> usize {
        self.0[color.index()] as usize
    }
    /// Total number of markers.
    pub fn size(&self) -> usize {
        self.0.iter().map(|n| *n as usize).sum()
    }
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }
    /// The distinct colors present, forgetting multiplicity.
    pub fn set(&self) -> ColorSet {
        Color::all()
            .into_iter()
            .filter(|c| self.count(*c) > 0)
            .collect()
    }
    /// Expands back into one color per marker, sorted.
    pub fn markers(&self) -> impl Iterator<Item = Color> + '_ {
        Color::all()
            .into_iter()
            .flat_map(move |c| std::iter::repeat(c).take(self.count(c)))
    }
}

impl FromIterator<Color> for Palette {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        let mut palette = Self::empty();
        iter.into_iter().for_each(|c| palette.add(c));
        palette
    }
}

impl std::ops::Add for Palette {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i] + other.0[i]))
    }
}

impl std::fmt::Display for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.markers().try_for_each(|c| write!(f, "{}", c))
    }
}

/// A set of marker colors, as announced by the creature.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ColorSet(u8);

impl ColorSet {
    pub fn contains(&self, color: Color) -> bool {
        self.0 & (1 << color.index()) != 0
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        Color::all().into_iter().filter(|c| self.contains(*c))
    }
}

impl FromIterator<Color> for ColorSet {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self(iter.into_iter().fold(0, |bits, c| bits | 1 << c.index()))
    }
}

impl std::ops::BitOr for ColorSet {
    type Output = Self;
    fn bitor(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl std::fmt::Display for ColorSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.size() {
            0 => write!(f, "-"),
            _ => self.colors().try_for_each(|c| write!(f, "{}", c)),
        }
    }
}
