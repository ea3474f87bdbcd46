criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        generating_opening_choices,
        applying_opening_moves,
        determinizing_opening_state,
        placing_pending_markers,
        rolling_out_random_games,
        searching_opening_decision,
}

fn opening() -> Game {
    Game::root(&mut SmallRng::seed_from_u64(0))
}

/// A state with a full hand of markers waiting to be placed.
fn pending() -> Game {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let mut game = opening();
    while game.phase() != Phase::FreePlace && !game.is_terminal() {
        let legal = game.choices();
        game = game.apply(&legal[rng.random_range(0..legal.len())]);
    }
    game
}

fn generating_opening_choices(c: &mut criterion::Criterion) {
    let game = opening();
    c.bench_function("generate opening choices", |b| b.iter(|| game.choices()));
}

fn applying_opening_moves(c: &mut criterion::Criterion) {
    let game = opening();
    let legal = game.choices();
    c.bench_function("apply every opening move", |b| {
        b.iter(|| legal.iter().map(|m| game.apply(m)).count())
    });
}

fn determinizing_opening_state(c: &mut criterion::Criterion) {
    let game = opening();
    let ref mut rng = SmallRng::seed_from_u64(1);
    c.bench_function("determinize the opening for the Creature", |b| {
        b.iter(|| game.determinize(Side::Creature, rng))
    });
}

fn placing_pending_markers(c: &mut criterion::Criterion) {
    let game = pending();
    c.bench_function("enumerate free placements", |b| b.iter(|| placements(&game)));
}

fn rolling_out_random_games(c: &mut criterion::Criterion) {
    let game = opening();
    let ref mut rng = SmallRng::seed_from_u64(2);
    c.bench_function("roll out a uniformly random game", |b| {
        b.iter(|| {
            let mut state = game.clone();
            while !state.is_terminal() {
                let legal = state.choices();
                state = state.apply(&legal[rng.random_range(0..legal.len())]);
            }
            state.winner()
        })
    });
}

fn searching_opening_decision(c: &mut criterion::Criterion) {
    let game = opening();
    let engine = Ismcts::new(100).with_seed(3);
    c.bench_function("search the opening with 100 iterations", |b| {
        b.iter(|| engine.search(&game))
    });
}

use cryptid::game::*;
use cryptid::moves::*;
use cryptid::players::*;
use cryptid::search::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
