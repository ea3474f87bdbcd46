use super::Flank;
use crate::pieces::*;
use serde::Serialize;

/// One row of the board: `n` tiles and `n + 1` spaces.
///
/// Space `i` is left of tile `i` and space `i + 1` is right of it.
/// Out-of-range indices are contract violations and panic.
#[derive(Debug, Clone, Default, Hash, PartialEq, Eq, Serialize)]
pub struct Row {
    tiles: Vec<Tile>,
    spaces: Vec<Space>,
}

impl From<Vec<Tile>> for Row {
    fn from(tiles: Vec<Tile>) -> Self {
        let spaces = vec![Space::new(); tiles.len() + 1];
        Self { tiles, spaces }
    }
}

impl Row {
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }
    pub fn tile(&self, i: usize) -> &Tile {
        let n = self.tiles.len();
        self.tiles
            .get(i)
            .unwrap_or_else(|| panic!("tile index {} out of bounds for row of {}", i, n))
    }
    pub fn tile_mut(&mut self, i: usize) -> &mut Tile {
        let n = self.tiles.len();
        self.tiles
            .get_mut(i)
            .unwrap_or_else(|| panic!("tile index {} out of bounds for row of {}", i, n))
    }
    pub fn space(&self, i: usize) -> &Space {
        let n = self.spaces.len();
        self.spaces
            .get(i)
            .unwrap_or_else(|| panic!("space index {} out of bounds for row of {}", i, n))
    }
    pub fn space_mut(&mut self, i: usize) -> &mut Space {
        let n = self.spaces.len();
        self.spaces
            .get_mut(i)
            .unwrap_or_else(|| panic!("space index {} out of bounds for row of {}", i, n))
    }
    pub fn with_spaces(mut self, spaces: Vec<Space>) -> Self {
        assert!(spaces.len() == self.tiles.len() + 1);
        self.spaces = spaces;
        self
    }

    /// Markers in the two spaces flanking tile `i`.
    pub fn adjacent(&self, i: usize) -> Palette {
        assert!(i < self.tiles.len(), "tile index {} out of bounds for row of {}", i, self.tiles.len());
        self.space(i).palette() + self.space(i + 1).palette()
    }
    pub fn adjacent_count(&self, i: usize) -> usize {
        self.adjacent(i).size()
    }
    pub fn adjacent_colors(&self, i: usize) -> ColorSet {
        self.adjacent(i).set()
    }
    /// Total markers across every space in the row.
    pub fn markers(&self) -> usize {
        self.spaces.iter().map(Space::count).sum()
    }
    /// Indices of tiles that may hold the creature.
    pub fn presence(&self) -> Vec<usize> {
        (0..self.tiles.len())
            .filter(|i| self.tiles[*i].has_creature())
            .collect()
    }

    /// Extends both ends with a tile and a fresh space.
    pub fn extend(&mut self, left: Tile, right: Tile) {
        self.tiles.insert(0, left);
        self.tiles.push(right);
        self.spaces.insert(0, Space::new());
        self.spaces.push(Space::new());
    }
    /// Removes the edge tile and edge space on one side.
    pub fn truncate(&mut self, flank: Flank) -> (Tile, Space) {
        assert!(!self.tiles.is_empty(), "cannot drop the edge of an empty row");
        match flank {
            Flank::Left => (self.tiles.remove(0), self.spaces.remove(0)),
            Flank::Right => (
                self.tiles.pop().expect("non-empty row"),
                self.spaces.pop().expect("non-empty row"),
            ),
        }
    }
    pub fn edge(&self, flank: Flank) -> &Tile {
        match flank {
            Flank::Left => self.tile(0),
            Flank::Right => self.tile(self.tiles.len().saturating_sub(1)),
        }
    }
}
