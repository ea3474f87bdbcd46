use crate::game::*;
use crate::pieces::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::BTreeSet;
use std::hash::Hash;
use std::hash::Hasher;

/// Ways to put the pending dropped markers onto the inactive row, one
/// palette per inactive space.
///
/// Nothing pending yields the single empty placement. Below the configured
/// threshold every placement is enumerated; at or above it, random
/// placements are sampled until the cap is reached or new ones stop
/// turning up. The sample is seeded from the board so repeated calls on
/// the same game agree.
pub fn placements(game: &Game) -> Vec<Vec<Palette>> {
    let pending = game.dropped();
    let spaces = game.board().inactive().spaces().len();
    if pending.is_empty() {
        return vec![Vec::new()];
    }
    let config = game.config();
    let found = match pending.len() < config.threshold {
        true => exhaustive(pending, spaces),
        false => {
            let ref mut hasher = std::collections::hash_map::DefaultHasher::new();
            game.board().fingerprint().hash(hasher);
            pending.hash(hasher);
            let ref mut rng = SmallRng::seed_from_u64(hasher.finish());
            sampled(pending, spaces, config.cap, rng)
        }
    };
    log::trace!("{} placements for {} pending markers", found.len(), pending.len());
    found.into_iter().collect()
}

/// Peels one marker at a time off the pending list and tries it in every
/// space.
fn exhaustive(pending: &[Color], spaces: usize) -> BTreeSet<Vec<Palette>> {
    fn peel(pending: &[Color], current: Vec<Palette>, out: &mut BTreeSet<Vec<Palette>>) {
        match pending.split_last() {
            None => {
                out.insert(current);
            }
            Some((color, rest)) => {
                for i in 0..current.len() {
                    let mut next = current.clone();
                    next[i].add(*color);
                    peel(rest, next, out);
                }
            }
        }
    }
    let mut out = BTreeSet::new();
    peel(pending, vec![Palette::empty(); spaces], &mut out);
    out
}

fn sampled<R: Rng + ?Sized>(
    pending: &[Color],
    spaces: usize,
    cap: usize,
    rng: &mut R,
) -> BTreeSet<Vec<Palette>> {
    let mut out = BTreeSet::new();
    let mut misses = 0;
    while out.len() < cap && misses < crate::PLACEMENT_PATIENCE * (out.len() + 1) {
        let mut placement = vec![Palette::empty(); spaces];
        for color in pending {
            placement[rng.random_range(0..spaces)].add(*color);
        }
        match out.insert(placement) {
            true => misses = 0,
            false => misses += 1,
        }
    }
    out
}
