use super::*;
use crate::pieces::*;
use serde::Serialize;
use std::collections::BTreeSet;

/// Which physical row is meant.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize)]
pub enum Level {
    Top,
    Bottom,
}

/// Two staggered rows of tiles and the spaces between them.
///
/// Active space `i` touches inactive spaces `i` and `i + 1`, and active tile
/// `i` touches inactive tiles `i` and `i + 1`. The rows always differ in
/// length by exactly one tile, the active row being the shorter.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize)]
pub struct Board {
    top: Row,
    bottom: Row,
    active: Level,
    width: usize,
}

impl Board {
    /// Lays out the opening board from the top of the tile deck.
    ///
    /// The start tile forms the bottom (active) row with the two starting
    /// marker piles on either side; the next two tiles form the top row.
    pub fn deal(width: usize, deck: &mut Deck<Tile>, left: Vec<Color>, right: Vec<Color>) -> Self {
        let mut tiles = deck.draw(3).into_iter();
        let mut start = tiles.next().expect("deck holds a start tile");
        let l = tiles.next().expect("deck holds a left tile");
        let r = tiles.next().expect("deck holds a right tile");
        start.set_creature(true);
        Self {
            top: Row::from(vec![l, r]),
            bottom: Row::from(vec![start]).with_spaces(vec![Space::from(left), Space::from(right)]),
            active: Level::Bottom,
            width,
        }
    }
    /// Assembles a board from explicit rows.
    pub fn from_rows(width: usize, top: Row, bottom: Row, active: Level) -> Self {
        let board = Self {
            top,
            bottom,
            active,
            width,
        };
        assert!(
            board.inactive().tiles().len() == board.active().tiles().len() + 1,
            "inactive row must be one tile longer than the active row"
        );
        board
    }

    /// Tiles on the board across both rows.
    pub fn size(&self) -> usize {
        self.top.tiles().len() + self.bottom.tiles().len()
    }
    pub fn is_full(&self) -> bool {
        self.size() >= self.width
    }
    pub fn level(&self) -> Level {
        self.active
    }
    pub fn top(&self) -> &Row {
        &self.top
    }
    pub fn bottom(&self) -> &Row {
        &self.bottom
    }
    pub fn active(&self) -> &Row {
        match self.active {
            Level::Top => &self.top,
            Level::Bottom => &self.bottom,
        }
    }
    pub fn inactive(&self) -> &Row {
        match self.active {
            Level::Top => &self.bottom,
            Level::Bottom => &self.top,
        }
    }
    pub fn active_mut(&mut self) -> &mut Row {
        match self.active {
            Level::Top => &mut self.top,
            Level::Bottom => &mut self.bottom,
        }
    }
    pub fn inactive_mut(&mut self) -> &mut Row {
        match self.active {
            Level::Top => &mut self.bottom,
            Level::Bottom => &mut self.top,
        }
    }
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::from(self)
    }

    /// Moves one marker from an active space to an inactive space.
    pub fn shift(&mut self, from: usize, to: usize, color: Color) {
        assert!(
            self.active_mut().space_mut(from).remove(color),
            "no {} marker on active space {}",
            color,
            from
        );
        self.inactive_mut().space_mut(to).add(color);
    }

    /// Extends the active row at both ends, then swaps row roles.
    pub fn add_tiles(&mut self, left: Tile, right: Tile) {
        self.active_mut().extend(left, right);
        self.active = match self.active {
            Level::Top => Level::Bottom,
            Level::Bottom => Level::Top,
        };
    }
    /// Removes the edge tile and space from both rows, returning the
    /// markers that were standing in the removed spaces.
    pub fn drop_edge(&mut self, flank: Flank) -> Vec<Color> {
        let (_, mut a) = self.top.truncate(flank);
        let (_, mut b) = self.bottom.truncate(flank);
        let mut markers = a.clear();
        markers.append(&mut b.clear());
        markers
    }
    /// Tokens still present on the two edge tiles of one flank.
    pub fn edge_tokens(&self, flank: Flank) -> usize {
        [self.top.edge(flank), self.bottom.edge(flank)]
            .into_iter()
            .filter(|t| t.has_token())
            .count()
    }

    /// Inactive tiles reachable by the creature from its active presence.
    pub fn candidates(&self) -> BTreeSet<usize> {
        self.active()
            .presence()
            .into_iter()
            .flat_map(|i| [i, i + 1])
            .collect()
    }
    /// Moves presence onto every candidate with exactly `n` adjacent markers.
    pub fn move_to_number(&mut self, n: usize) {
        self.move_where(|palette| palette.size() == n);
    }
    /// Moves presence onto every candidate whose adjacent colors are `colors`.
    pub fn move_to_colors(&mut self, colors: ColorSet) {
        self.move_where(|palette| palette.set() == colors);
    }
    fn move_where<F>(&mut self, matches: F)
    where
        F: Fn(&Palette) -> bool,
    {
        let from = self.active().presence();
        let onto = self
            .candidates()
            .into_iter()
            .filter(|i| matches(&self.inactive().adjacent(*i)))
            .collect::<Vec<_>>();
        for i in onto {
            self.inactive_mut().tile_mut(i).set_creature(true);
        }
        for i in from {
            self.active_mut().tile_mut(i).set_creature(false);
        }
    }

    /// Number of inactive tiles the creature may occupy.
    pub fn presence(&self) -> usize {
        self.inactive().presence().len()
    }
    /// Whether the creature may occupy both ends of the inactive row.
    pub fn edges_occupied(&self) -> bool {
        Flank::all()
            .into_iter()
            .all(|flank| self.inactive().edge(flank).has_creature())
    }
    /// Inactive tiles holding both creature presence and a token.
    pub fn creature_tokens(&self) -> Vec<usize> {
        (0..self.inactive().tiles().len())
            .filter(|i| {
                let tile = self.inactive().tile(*i);
                tile.has_creature() && tile.has_token()
            })
            .collect()
    }

    fn render(row: &Row, cell: usize, indent: bool) -> String {
        let mut line = String::new();
        if indent {
            line.push_str(&" ".repeat(cell + 2));
        }
        for (i, space) in row.spaces().iter().enumerate() {
            line.push_str(&format!("({:>cell$})", space.to_string(), cell = cell));
            if let Some(tile) = row.tiles().get(i) {
                let label = format!("{},{}{}", row.adjacent_colors(i), row.adjacent_count(i), tile);
                line.push_str(&format!("[{:>cell$}]", label, cell = cell));
            }
        }
        line
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cell = [&self.top, &self.bottom]
            .into_iter()
            .flat_map(|row| row.spaces().iter().map(|s| s.count()))
            .max()
            .unwrap_or(0)
            .max(8);
        let indent = self.top.tiles().len() < self.bottom.tiles().len();
        writeln!(f, "{}", Self::render(&self.top, cell, indent))?;
        write!(f, "{}", Self::render(&self.bottom, cell, !indent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck() -> Deck<Tile> {
        Deck::from(vec![Tile::new(false); 17])
    }

    fn board() -> Board {
        Board::deal(
            7,
            &mut deck(),
            vec![Color::Blue, Color::Orange],
            vec![Color::Orange],
        )
    }

    fn invariant(board: &Board) {
        for row in [board.top(), board.bottom()] {
            assert_eq!(row.spaces().len(), row.tiles().len() + 1);
        }
        assert_eq!(board.inactive().tiles().len(), board.active().tiles().len() + 1);
    }

    #[test]
    fn opening_layout() {
        let board = board();
        invariant(&board);
        assert_eq!(board.size(), 3);
        assert_eq!(board.level(), Level::Bottom);
        assert!(board.active().tile(0).has_creature());
        assert_eq!(board.active().markers(), 3);
    }

    #[test]
    fn add_tiles_swaps_rows() {
        let ref mut deck = deck();
        let mut board = board();
        for _ in 0..3 {
            let tiles = deck.draw(2);
            board.add_tiles(tiles[0], tiles[1]);
            invariant(&board);
        }
        assert_eq!(board.size(), 9);
        assert_eq!(board.level(), Level::Top);
    }

    #[test]
    fn drop_left_returns_edge_markers() {
        let ref mut deck = deck();
        let mut board = board();
        let tiles = deck.draw(2);
        board.add_tiles(tiles[0], tiles[1]);
        board.inactive_mut().space_mut(0).add(Color::Green);
        board.active_mut().space_mut(0).add(Color::Blue);
        let before = board.size();
        let dropped = board.drop_edge(Flank::Left);
        invariant(&board);
        assert_eq!(board.size(), before - 2);
        let mut dropped = dropped;
        dropped.sort();
        assert_eq!(dropped, vec![Color::Blue, Color::Green]);
    }

    #[test]
    fn creature_follows_number() {
        let mut board = board();
        board.shift(0, 0, Color::Blue);
        board.shift(0, 1, Color::Orange);
        board.shift(1, 2, Color::Orange);
        // inactive tiles: 0 -> B,O (2), 1 -> O,O (2)
        board.move_to_number(2);
        assert_eq!(board.presence(), 2);
        assert!(board.active().presence().is_empty());
        assert!(board.edges_occupied());
    }

    #[test]
    fn creature_follows_colors() {
        let mut board = board();
        board.shift(0, 0, Color::Blue);
        board.shift(0, 1, Color::Orange);
        board.shift(1, 2, Color::Orange);
        board.move_to_colors([Color::Orange].into_iter().collect());
        assert_eq!(board.inactive().presence(), vec![1]);
    }

    #[test]
    fn fingerprint_tracks_contents() {
        let board = board();
        let mut clone = board.clone();
        assert_eq!(board.fingerprint(), clone.fingerprint());
        clone.active_mut().space_mut(0).add(Color::Green);
        assert_ne!(board.fingerprint(), clone.fingerprint());
        let mut clone = board.clone();
        clone.drop_edge(Flank::Left);
        assert_ne!(board.fingerprint(), clone.fingerprint());
    }
}
