use super::*;
use crate::game::Config;
use crate::search::Ismcts;
use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Instant;

/// Plays many independent games on a fixed-size thread pool.
///
/// Games share nothing but the two engines, whose counters are atomic.
/// Game `i` is dealt and searched from `seed + i`, so a seeded run can be
/// replayed one game at a time through [`Duel::play`].
pub struct Sampler {
    config: Config,
    scientist: Ismcts,
    creature: Ismcts,
    games: usize,
    threads: usize,
    seed: Option<u64>,
    finished: AtomicUsize,
    checked: Mutex<Instant>,
}

impl Sampler {
    pub fn new(config: Config, scientist: usize, creature: usize) -> Self {
        Self {
            config,
            scientist: Ismcts::new(scientist),
            creature: Ismcts::new(creature),
            games: crate::SAMPLE_GAMES,
            threads: num_cpus::get(),
            seed: None,
            finished: AtomicUsize::new(0),
            checked: Mutex::new(Instant::now()),
        }
    }
    pub fn with_games(self, games: usize) -> Self {
        Self { games, ..self }
    }
    pub fn with_threads(self, threads: usize) -> Self {
        Self {
            threads: threads.max(1),
            ..self
        }
    }
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }
    pub fn with_exploration(self, exploration: crate::Score) -> Self {
        Self {
            scientist: self.scientist.with_exploration(exploration),
            creature: self.creature.with_exploration(exploration),
            ..self
        }
    }

    /// Plays every game and tallies the winners.
    pub fn run(&self) -> anyhow::Result<Tally> {
        self.config.validate()?;
        let base = self.seed.unwrap_or_else(rand::random);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()?;
        let started = Instant::now();
        self.finished.store(0, Ordering::Relaxed);
        *self.checked.lock().expect("checkpoint lock") = started;
        log::info!(
            "sampling {} games on {} threads, seed {}, iterations {}/{}, exploration {}/{}",
            self.games,
            self.threads,
            base,
            self.scientist.iterations(),
            self.creature.iterations(),
            self.scientist.exploration(),
            self.creature.exploration()
        );
        let duel = Duel::new(&self.config, &self.scientist, &self.creature);
        let records = pool.install(|| {
            (0..self.games)
                .into_par_iter()
                .map(|i| duel.play(base.wrapping_add(i as u64)))
                .inspect(|_| self.finish(started))
                .collect::<anyhow::Result<Vec<Record>>>()
        })?;
        let tally = records.iter().collect::<Tally>();
        log::info!("{} in {:.0?}", tally, started.elapsed());
        log::info!("scientist {}", self.scientist.metrics());
        log::info!("creature  {}", self.creature.metrics());
        Ok(tally)
    }

    fn finish(&self, started: Instant) {
        let done = self.finished.fetch_add(1, Ordering::Relaxed) + 1;
        if let Some(progress) = self.checkpoint(done, started) {
            log::info!("{}", progress);
        }
    }

    fn checkpoint(&self, done: usize, started: Instant) -> Option<String> {
        let mut last = self.checked.lock().expect("checkpoint lock");
        if last.elapsed() >= crate::SAMPLE_LOG_INTERVAL {
            *last = Instant::now();
            Some(format!(
                "{:>6} / {:<6} games in {:.0?}",
                done,
                self.games,
                started.elapsed()
            ))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::Side;

    #[test]
    fn tallies_every_game() {
        let tally = Sampler::new(Config::default(), 2, 2)
            .with_games(4)
            .with_threads(2)
            .with_seed(0)
            .run()
            .expect("valid config");
        assert_eq!(tally.games(), 4);
        assert_eq!(tally.wins(Side::Scientist) + tally.wins(Side::Creature), 4);
        assert!(tally.mean_plies() > 0.);
    }

    #[test]
    fn seeded_runs_agree() {
        let run = || {
            Sampler::new(Config::default(), 1, 1)
                .with_games(3)
                .with_threads(3)
                .with_seed(42)
                .run()
                .expect("valid config")
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn reruns_start_from_zero() {
        let sampler = Sampler::new(Config::default(), 1, 1)
            .with_games(2)
            .with_threads(2)
            .with_seed(9);
        let first = sampler.run().expect("valid config");
        assert_eq!(sampler.finished.load(Ordering::Relaxed), 2);
        let second = sampler.run().expect("valid config");
        assert_eq!(sampler.finished.load(Ordering::Relaxed), 2);
        assert_eq!(first, second);
    }

    #[test]
    fn progress_waits_for_the_interval() {
        let sampler = Sampler::new(Config::default(), 1, 1).with_games(1);
        let started = Instant::now();
        *sampler.checked.lock().expect("checkpoint lock") = started;
        assert_eq!(sampler.checkpoint(1, started), None);
    }

    #[test]
    fn rejects_invalid_config() {
        let config = Config {
            width: 2,
            ..Config::default()
        };
        assert!(Sampler::new(config, 1, 1).with_games(1).run().is_err());
    }
}
