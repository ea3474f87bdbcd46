use crate::Tokens;
use crate::game::Game;
use crate::moves::Move;
use crate::players::Side;
use serde::Serialize;

/// The outcome of one finished game.
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    seed: u64,
    winner: Side,
    history: Vec<Move>,
    scientist: Tokens,
    creature: Tokens,
}

impl Record {
    pub fn new(seed: u64, game: &Game, history: Vec<Move>) -> Self {
        Self {
            seed,
            winner: game.winner().expect("record of a finished game"),
            history,
            scientist: game.player(Side::Scientist).tokens(),
            creature: game.player(Side::Creature).tokens(),
        }
    }
    pub fn winner(&self) -> Side {
        self.winner
    }
    pub fn plies(&self) -> usize {
        self.history.len()
    }
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "seed {:>20} {:<9} wins after {:>4} plies, tokens {}-{}",
            self.seed,
            self.winner,
            self.plies(),
            self.scientist,
            self.creature
        )
    }
}

/// Aggregate results over many games.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    scientist: usize,
    creature: usize,
    plies: usize,
}

impl Tally {
    pub fn add(&mut self, record: &Record) {
        match record.winner() {
            Side::Scientist => self.scientist += 1,
            Side::Creature => self.creature += 1,
        }
        self.plies += record.plies();
    }
    pub fn games(&self) -> usize {
        self.scientist + self.creature
    }
    pub fn wins(&self, side: Side) -> usize {
        match side {
            Side::Scientist => self.scientist,
            Side::Creature => self.creature,
        }
    }
    pub fn mean_plies(&self) -> f64 {
        match self.games() {
            0 => 0.,
            n => self.plies as f64 / n as f64,
        }
    }
}

impl<'a> FromIterator<&'a Record> for Tally {
    fn from_iter<I: IntoIterator<Item = &'a Record>>(iter: I) -> Self {
        let mut tally = Self::default();
        iter.into_iter().for_each(|r| tally.add(r));
        tally
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "scientists {} creature {} over {} games, {:.1} plies per game",
            self.scientist,
            self.creature,
            self.games(),
            self.mean_plies()
        )
    }
}
