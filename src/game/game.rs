use super::*;
use crate::board::*;
use crate::moves::*;
use crate::pieces::*;
use crate::players::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Serialize;
use std::hash::Hash;
use std::hash::Hasher;
use std::sync::Arc;

/// The complete state of one game.
///
/// Games are values: [`Game::apply`] returns a new game and never touches
/// the one it was called on, so search branches share nothing.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize)]
pub struct Game {
    #[serde(skip)]
    config: Arc<Config>,
    scientist: Player,
    creature: Player,
    board: Board,
    tiles: Deck<Tile>,
    active: Side,
    first: Side,
    phase: Phase,
    dropped: Vec<Color>,
    last: Option<Move>,
}

impl Game {
    /// Deals a fresh game. Fails if the configuration cannot be played.
    pub fn new<R: Rng + ?Sized>(config: Config, rng: &mut R) -> anyhow::Result<Self> {
        config.validate()?;
        let mut tiles = Self::stack(&config, rng);
        let board = Board::deal(config.width, &mut tiles, config.left.clone(), config.right.clone());
        let scientist = Player::deal(Side::Scientist, config.loadout(Side::Scientist), rng);
        let creature = Player::deal(Side::Creature, config.loadout(Side::Creature), rng);
        log::debug!("dealt {} tile deck for width {}", config.deck, config.width);
        Ok(Self {
            config: Arc::new(config),
            scientist,
            creature,
            board,
            tiles,
            active: Side::Creature,
            first: Side::Creature,
            phase: Phase::MoveMarkers,
            dropped: Vec::new(),
            last: None,
        })
    }
    /// A fresh game under the standard rules.
    pub fn root<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(Config::default(), rng).expect("default config is valid")
    }
    /// Assembles a game around an explicit board, for setting up positions.
    pub fn with_board(mut self, board: Board, phase: Phase) -> Self {
        self.board = board;
        self.phase = phase;
        self
    }
    pub fn with_dropped(mut self, dropped: Vec<Color>) -> Self {
        self.dropped = dropped;
        self
    }

    /// The top `width` tiles are plain. Every token tile is shuffled in
    /// among the plain tiles beneath them.
    fn stack<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Deck<Tile> {
        let plain = config.deck - config.tokens;
        let mut deck = Deck::from(
            std::iter::empty()
                .chain(std::iter::repeat_n(Tile::new(false), plain))
                .chain(std::iter::repeat_n(Tile::new(true), config.tokens))
                .collect::<Vec<_>>(),
        );
        deck.shuffle_bottom(config.deck - config.width, rng);
        deck
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn tiles(&self) -> &Deck<Tile> {
        &self.tiles
    }
    pub fn player(&self, side: Side) -> &Player {
        match side {
            Side::Scientist => &self.scientist,
            Side::Creature => &self.creature,
        }
    }
    fn player_mut(&mut self, side: Side) -> &mut Player {
        match side {
            Side::Scientist => &mut self.scientist,
            Side::Creature => &mut self.creature,
        }
    }
    /// The side whose turn it is to move markers.
    pub fn active(&self) -> Side {
        self.active
    }
    /// The side holding the first-player marker.
    pub fn first(&self) -> Side {
        self.first
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    /// Markers taken off a dropped edge and not yet placed again.
    pub fn dropped(&self) -> &[Color] {
        &self.dropped
    }
    pub fn last(&self) -> Option<&Move> {
        self.last.as_ref()
    }
    pub fn mover(&self) -> Option<Side> {
        self.phase.mover(self)
    }
    pub fn winner(&self) -> Option<Side> {
        self.phase.winner()
    }
    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Every legal move from here.
    pub fn choices(&self) -> Vec<Move> {
        let choices = self.phase.choices(self);
        assert!(
            !choices.is_empty() || self.is_terminal(),
            "no legal moves in {}\n{}",
            self.phase,
            self.board
        );
        choices
    }

    /// The game after `mv`, with the phase advanced.
    pub fn apply(&self, mv: &Move) -> Self {
        assert!(
            mv.side() == self.mover(),
            "{} offered in {} where {:?} moves",
            mv,
            self.phase,
            self.mover()
        );
        let mut next = self.clone();
        next.act(mv.action());
        next.phase = self.phase.next(&next);
        next.last = Some(mv.clone());
        log::trace!("{} -> {}", mv, next.phase);
        next
    }

    fn act(&mut self, action: &Action) {
        match action {
            Action::Draw => {
                let ref mut rng = self.entropy();
                let side = self.active;
                self.player_mut(side).draw(1, rng);
                self.active = side.other();
            }
            Action::MoveOne { .. } | Action::MoveAll { .. } | Action::Split { .. } => {
                action.reshape(&mut self.board);
                self.spend(action);
            }
            Action::PlaceCubes { .. } => {
                action.reshape(&mut self.board);
                self.dropped.clear();
                let side = self.active;
                self.spend(action);
                self.player_mut(side).ready_wildcard();
            }
            Action::Announce(_) => action.reshape(&mut self.board),
            Action::Drop(Some(flank)) => {
                for _ in 0..self.board.edge_tokens(*flank) {
                    self.scientist.add_token();
                }
                self.dropped = self.board.drop_edge(*flank);
            }
            Action::Place(_) => {
                action.reshape(&mut self.board);
                self.dropped.clear();
            }
            Action::Tiles(orientation) => {
                let drawn = self.tiles.draw(2);
                let [a, b] = drawn[..] else {
                    panic!("drew {} tiles where two were needed", drawn.len());
                };
                match orientation {
                    Orientation::LR => self.board.add_tiles(a, b),
                    Orientation::RL => self.board.add_tiles(b, a),
                }
                self.first = self.first.other();
            }
            Action::Token(Some(_)) => {
                action.reshape(&mut self.board);
                self.creature.add_token();
            }
            Action::Tiebreak => {
                let bottom = self.board.bottom().tiles().iter().filter(|t| t.has_token()).count();
                let top = self.board.top().tiles().iter().filter(|t| t.has_token()).count();
                (0..bottom).for_each(|_| self.creature.add_token());
                (0..top).for_each(|_| self.scientist.add_token());
            }
            Action::Drop(None) | Action::Token(None) => {}
        }
    }

    /// Spends the card behind `action` and passes the turn.
    fn spend(&mut self, action: &Action) {
        let side = self.active;
        let card = action.card().expect("card action");
        let player = self.player_mut(side);
        match action.is_wild() {
            true => player.spend_wildcard(),
            false => player.play(card),
        }
        self.active = side.other();
    }

    /// A reproducible random source drawn from the whole state, used where
    /// the rules themselves shuffle.
    fn entropy(&self) -> SmallRng {
        let ref mut hasher = std::collections::hash_map::DefaultHasher::new();
        self.hash(hasher);
        SmallRng::seed_from_u64(hasher.finish())
    }

    /// A copy of this game consistent with what `observer` can see.
    ///
    /// The opponent's hand and both draw piles are reshuffled, and the tile
    /// deck is shuffled below the plain top section so token tiles stay
    /// where they could be.
    pub fn determinize<R: Rng + ?Sized>(&self, observer: Side, rng: &mut R) -> Self {
        let mut game = self.clone();
        game.scientist = self.scientist.determinize(observer, rng);
        game.creature = self.creature.determinize(observer, rng);
        let hidden = self.config.deck - self.config.width;
        game.tiles.shuffle_bottom(hidden, rng);
        game
    }

    /// A canonical serialization of the full state.
    pub fn canonical(&self) -> String {
        serde_json::to_string(self).expect("game state serializes")
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} first {} active {}", self.phase, self.first, self.active)?;
        writeln!(f, "{}", self.scientist)?;
        writeln!(f, "{}", self.creature)?;
        writeln!(f, "tiles {:>2} dropped {}", self.tiles.len(), self.dropped.iter().copied().collect::<Palette>())?;
        write!(f, "{}", self.board)
    }
}

impl crate::search::SearchGame for Game {
    type E = Move;
    type T = Side;
    fn turn(&self) -> Option<Side> {
        self.mover()
    }
    fn choices(&self) -> Vec<Move> {
        Game::choices(self)
    }
    fn apply(&self, edge: &Move) -> Self {
        Game::apply(self, edge)
    }
    fn winner(&self) -> Option<Side> {
        Game::winner(self)
    }
    fn determinize<R: Rng + ?Sized>(&self, observer: Side, rng: &mut R) -> Self {
        Game::determinize(self, observer, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(seed: u64) -> Game {
        Game::root(&mut SmallRng::seed_from_u64(seed))
    }

    fn play_out(mut game: Game, rng: &mut SmallRng) -> Game {
        while !game.is_terminal() {
            let choices = game.choices();
            let i = rng.random_range(0..choices.len());
            game = game.apply(&choices[i]);
            for row in [game.board().top(), game.board().bottom()] {
                assert_eq!(row.spaces().len(), row.tiles().len() + 1);
            }
            assert_eq!(
                game.board().inactive().tiles().len(),
                game.board().active().tiles().len() + 1
            );
        }
        game
    }

    #[test]
    fn opening_state() {
        let game = game(0);
        assert_eq!(game.phase(), Phase::MoveMarkers);
        assert_eq!(game.mover(), Some(Side::Creature));
        assert_eq!(game.first(), Side::Creature);
        assert_eq!(game.tiles().len(), crate::DECK_SIZE - 3);
        assert_eq!(game.board().active().markers(), 10);
        assert!(game.tiles().items()[..crate::BOARD_WIDTH - 3].iter().all(|t| !t.is_token()));
        assert_eq!(game.tiles().items().iter().filter(|t| t.is_token()).count(), crate::TOKEN_TILES);
    }

    #[test]
    fn invalid_config_fails_setup() {
        let config = Config {
            width: 4,
            ..Config::default()
        };
        assert!(Game::new(config, &mut SmallRng::seed_from_u64(0)).is_err());
    }

    #[test]
    fn cardless_side_fails_setup() {
        let config = Config {
            scientist: Loadout {
                limit: 4,
                hand: 0,
                move_all: 0,
                move_one: 0,
                split: 0,
                place: 0,
            },
            ..Config::default()
        };
        assert!(Game::new(config, &mut SmallRng::seed_from_u64(0)).is_err());
    }

    #[test]
    fn empty_active_row_goes_to_creature_update() {
        let game = game(1);
        let mut board = game.board().clone();
        for space in 0..board.active().spaces().len() {
            board.active_mut().space_mut(space).clear();
        }
        let game = game.with_board(board, Phase::MoveMarkers);
        assert_eq!(game.phase().next(&game), Phase::CreatureUpdate);
    }

    #[test]
    fn choices_are_stable() {
        let game = game(2);
        let a = game.choices();
        let b = game.choices();
        assert_eq!(a, b);
        let set = a.iter().collect::<std::collections::HashSet<_>>();
        assert_eq!(set.len(), a.len());
    }

    #[test]
    fn apply_leaves_original_untouched() {
        let game = game(3);
        let before = game.canonical();
        assert_eq!(game.clone().canonical(), before);
        for mv in game.choices() {
            let next = game.apply(&mv);
            assert_eq!(game.canonical(), before);
            assert_ne!(next.canonical(), before);
        }
    }

    #[test]
    fn split_on_single_tile_row() {
        let game = game(4);
        let mut board = game.board().clone();
        board.active_mut().space_mut(0).clear();
        board.active_mut().space_mut(1).clear();
        board.active_mut().space_mut(0).extend([Color::Blue, Color::Orange]);
        let game = game.with_board(board, Phase::MoveMarkers);
        let splits = crate::moves::split(&game, false);
        assert_eq!(splits.len(), 2);
        assert_ne!(splits[0].print(), splits[1].print());
    }

    #[test]
    fn drawing_passes_the_turn() {
        let game = game(5);
        let draw = game
            .choices()
            .into_iter()
            .find(|m| *m.action() == Action::Draw)
            .expect("opening hand below limit");
        let next = game.apply(&draw);
        assert_eq!(next.player(Side::Creature).hand().len(), 4);
        assert_eq!(next.active(), Side::Scientist);
        assert_eq!(next.phase(), Phase::MoveMarkers);
    }

    #[test]
    fn forced_loss_filtered_when_avoidable() {
        let ref mut rng = SmallRng::seed_from_u64(6);
        for _ in 0..20 {
            let mut game = game(rng.random());
            while !game.is_terminal() && game.phase() != Phase::CreatureUpdate {
                let choices = game.choices();
                game = game.apply(&choices[rng.random_range(0..choices.len())]);
            }
            if game.is_terminal() {
                continue;
            }
            let results = game
                .choices()
                .iter()
                .map(|m| game.apply(m).phase())
                .collect::<Vec<_>>();
            let losing = results.iter().filter(|p| **p == Phase::ScientistWin).count();
            assert!(losing == 0 || losing == results.len());
        }
    }

    #[test]
    fn random_games_terminate() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..10 {
            let end = play_out(game(rng.random()), rng);
            assert!(end.winner().is_some());
            assert!(end.choices().is_empty());
        }
    }

    #[test]
    fn determinize_hides_only_hidden_things() {
        let game = game(8);
        let ref mut rng = SmallRng::seed_from_u64(9);
        let view = game.determinize(Side::Scientist, rng);
        assert_eq!(view.board(), game.board());
        assert_eq!(view.player(Side::Scientist).hand(), game.player(Side::Scientist).hand());
        assert_eq!(
            view.player(Side::Creature).hand().len(),
            game.player(Side::Creature).hand().len()
        );
        assert_eq!(view.tiles().len(), game.tiles().len());
        assert_eq!(view.choices().len(), game.choices().len());
    }

    fn full_board() -> Board {
        let mut top = Row::from(vec![Tile::new(true), Tile::new(false), Tile::new(false), Tile::new(false)]);
        top.tile_mut(1).set_creature(true);
        top.tile_mut(2).set_creature(true);
        top.space_mut(0).add(Color::Green);
        let mut bottom = Row::from(vec![Tile::new(false); 3]);
        bottom.space_mut(0).add(Color::Blue);
        Board::from_rows(7, top, bottom, Level::Bottom)
    }

    #[test]
    fn dropping_an_edge_pays_tokens_and_holds_markers() {
        let game = game(11).with_board(full_board(), Phase::ScientistDrop);
        let choices = game.choices();
        assert_eq!(choices.len(), 2);
        let left = choices
            .iter()
            .find(|m| *m.action() == Action::Drop(Some(Flank::Left)))
            .expect("left edge is free");
        let next = game.apply(left);
        assert_eq!(next.player(Side::Scientist).tokens(), 1);
        assert!(next.player(Side::Scientist).wildcard());
        assert_eq!(next.board().size(), 5);
        let mut dropped = next.dropped().to_vec();
        dropped.sort();
        assert_eq!(dropped, vec![Color::Blue, Color::Green]);
        assert_eq!(next.phase(), Phase::FreePlace);
        assert_eq!(next.mover(), Some(Side::Creature));
    }

    #[test]
    fn covered_edges_block_the_drop() {
        let mut board = full_board();
        board.inactive_mut().tile_mut(0).set_creature(true);
        board.inactive_mut().tile_mut(3).set_creature(true);
        let game = game(12).with_board(board, Phase::ScientistDrop);
        let choices = game.choices();
        assert_eq!(choices.len(), 1);
        assert_eq!(*choices[0].action(), Action::Drop(None));
        assert_eq!(game.apply(&choices[0]).phase(), Phase::CreatureWin);
    }

    #[test]
    fn free_place_puts_markers_back() {
        let game = game(13)
            .with_board(full_board(), Phase::FreePlace)
            .with_dropped(vec![Color::Orange]);
        let choices = game.choices();
        assert_eq!(choices.len(), game.board().inactive().spaces().len());
        for mv in choices {
            let next = game.apply(&mv);
            assert!(next.dropped().is_empty());
            assert_eq!(next.board().inactive().markers(), game.board().inactive().markers() + 1);
            assert_eq!(next.phase(), Phase::DrawTiles);
        }
    }

    #[test]
    fn tiles_toggle_first_player() {
        let game = game(14).with_board(full_board(), Phase::DrawTiles);
        let choices = game.choices();
        assert_eq!(choices.len(), 2);
        assert_eq!(game.mover(), Some(Side::Creature));
        let next = game.apply(&choices[0]);
        assert_eq!(next.first(), Side::Scientist);
        assert_eq!(next.active(), game.active());
        assert_eq!(next.board().size(), 9);
        assert_eq!(next.tiles().len(), game.tiles().len() - 2);
        assert_eq!(next.phase(), Phase::MoveMarkers);
    }

    #[test]
    fn tiebreak_scores_rows() {
        let game = game(10);
        let top = Row::from(vec![Tile::new(true), Tile::new(false)]);
        let bottom = Row::from(vec![Tile::new(true)]);
        let board = Board::from_rows(7, top, bottom, Level::Bottom);
        let game = game.with_board(board, Phase::Tiebreaker);
        let choices = game.choices();
        assert_eq!(choices.len(), 1);
        let end = game.apply(&choices[0]);
        assert_eq!(end.player(Side::Scientist).tokens(), 1);
        assert_eq!(end.player(Side::Creature).tokens(), 1);
        assert_eq!(end.winner(), Some(Side::Creature));
    }

    #[test]
    fn wildcards_offered_only_when_ready() {
        let mut game = game(15);
        assert!(game.choices().iter().all(|m| !m.action().is_wild()));
        game.player_mut(Side::Creature).ready_wildcard();
        let wild = game
            .choices()
            .into_iter()
            .filter(|m| m.action().is_wild())
            .filter_map(|m| m.action().card())
            .collect::<std::collections::BTreeSet<_>>();
        assert_eq!(wild, game.config().wildcards.iter().copied().collect());
    }

    #[test]
    fn wild_split_spends_the_flag_not_the_hand() {
        let mut game = game(16);
        game.player_mut(Side::Creature).ready_wildcard();
        let split = game
            .choices()
            .into_iter()
            .find(|m| m.action().is_wild() && m.action().card() == Some(Card::Split))
            .expect("ready wildcard offers splits");
        let next = game.apply(&split);
        let before = game.player(Side::Creature);
        let after = next.player(Side::Creature);
        assert!(!after.wildcard());
        assert_eq!(after.hand(), before.hand());
        assert_eq!(after.deck().discards(), before.deck().discards());
        assert_eq!(next.active(), Side::Scientist);
    }

    #[test]
    fn place_cubes_pass_through_readies_the_wildcard() {
        let config = Config {
            creature: Loadout {
                limit: 4,
                hand: 3,
                move_all: 0,
                move_one: 0,
                split: 0,
                place: 3,
            },
            ..Config::default()
        };
        let game = Game::new(config, &mut SmallRng::seed_from_u64(17)).expect("valid config");
        let pass = game
            .choices()
            .into_iter()
            .find(|m| matches!(m.action(), Action::PlaceCubes { placement, wild: false } if placement.is_empty()))
            .expect("place-cubes card in hand");
        assert_eq!(pass.print(), Some(game.board().fingerprint()));
        let next = game.apply(&pass);
        let creature = next.player(Side::Creature);
        assert!(creature.wildcard());
        assert_eq!(creature.hand().len(), 2);
        assert_eq!(creature.deck().discards(), &[Card::PlaceCubes]);
        assert_eq!(next.board(), game.board());
        assert_eq!(next.active(), Side::Scientist);
    }
}
