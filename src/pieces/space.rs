use super::*;
use serde::Serialize;

/// A gap between tiles, holding zero or more markers.
///
/// Markers are kept sorted by color so that two spaces with the same
/// contents are structurally equal regardless of insertion order.
#[derive(Debug, Clone, Default, Hash, PartialEq, Eq, Serialize)]
pub struct Space(Vec<Color>);

impl Space {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn count(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn markers(&self) -> &[Color] {
        &self.0
    }
    pub fn palette(&self) -> Palette {
        self.0.iter().copied().collect()
    }
    pub fn colors(&self) -> ColorSet {
        self.0.iter().copied().collect()
    }
    pub fn add(&mut self, color: Color) {
        let i = self.0.partition_point(|c| *c <= color);
        self.0.insert(i, color);
    }
    pub fn extend(&mut self, colors: impl IntoIterator<Item = Color>) {
        colors.into_iter().for_each(|c| self.add(c));
    }
    /// Removes one marker of this color, returning whether one was there.
    pub fn remove(&mut self, color: Color) -> bool {
        match self.0.iter().position(|c| *c == color) {
            Some(i) => {
                self.0.remove(i);
                true
            }
            None => false,
        }
    }
    /// Removes every marker of this color, returning how many left.
    pub fn remove_all(&mut self, color: Color) -> usize {
        let before = self.0.len();
        self.0.retain(|c| *c != color);
        before - self.0.len()
    }
    /// Empties the space, returning its markers.
    pub fn clear(&mut self) -> Vec<Color> {
        std::mem::take(&mut self.0)
    }
}

impl From<Vec<Color>> for Space {
    fn from(mut colors: Vec<Color>) -> Self {
        colors.sort();
        Self(colors)
    }
}

impl std::fmt::Display for Space {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.palette())
    }
}
