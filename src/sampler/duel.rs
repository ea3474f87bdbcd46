use super::*;
use crate::game::*;
use crate::moves::Move;
use crate::players::Side;
use crate::search::Ismcts;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// One complete game between two engines, one per side.
///
/// Each phase is decided by the engine of the side that moves in it.
/// Phases with no mover offer exactly one move, which is taken.
pub struct Duel<'a> {
    config: &'a Config,
    scientist: &'a Ismcts,
    creature: &'a Ismcts,
}

impl<'a> Duel<'a> {
    pub fn new(config: &'a Config, scientist: &'a Ismcts, creature: &'a Ismcts) -> Self {
        Self {
            config,
            scientist,
            creature,
        }
    }
    pub fn engine(&self, side: Side) -> &'a Ismcts {
        match side {
            Side::Scientist => self.scientist,
            Side::Creature => self.creature,
        }
    }

    /// Plays a game dealt and searched from `seed`.
    pub fn play(&self, seed: u64) -> anyhow::Result<Record> {
        self.play_with(seed, |_, _| {})
    }

    /// Plays a game, handing every move and the game it leads to to
    /// `observe`.
    pub fn play_with<F>(&self, seed: u64, mut observe: F) -> anyhow::Result<Record>
    where
        F: FnMut(&Move, &Game),
    {
        let ref mut rng = SmallRng::seed_from_u64(seed);
        let mut game = Game::new(self.config.clone(), rng)?;
        let mut history = Vec::new();
        while !game.is_terminal() {
            let choice = match game.mover() {
                Some(side) => self.engine(side).search_with(&game, rng),
                None => game
                    .choices()
                    .into_iter()
                    .next()
                    .expect("unattended phase offers a move"),
            };
            game = game.apply(&choice);
            log::debug!("{}", choice);
            observe(&choice, &game);
            history.push(choice);
        }
        let record = Record::new(seed, &game, history);
        log::info!("{}", record);
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plays_to_completion() {
        let config = Config::default();
        let scientist = Ismcts::new(4);
        let creature = Ismcts::new(4);
        let duel = Duel::new(&config, &scientist, &creature);
        let mut seen = 0;
        let record = duel.play_with(1, |_, _| seen += 1).expect("valid config");
        assert_eq!(record.plies(), seen);
        assert!(record.plies() > 0);
        assert!(scientist.metrics().searches() > 0);
        assert!(creature.metrics().searches() > 0);
    }

    #[test]
    fn same_seed_same_game() {
        let config = Config::default();
        let scientist = Ismcts::new(2);
        let creature = Ismcts::new(2);
        let duel = Duel::new(&config, &scientist, &creature);
        let a = duel.play(7).expect("valid config");
        let b = duel.play(7).expect("valid config");
        assert_eq!(a.history(), b.history());
        assert_eq!(a.winner(), b.winner());
    }

    #[test]
    fn bad_config_is_an_error() {
        let config = Config {
            deck: 2,
            ..Config::default()
        };
        let engine = Ismcts::new(1);
        assert!(Duel::new(&config, &engine, &engine).play(0).is_err());
    }
}
