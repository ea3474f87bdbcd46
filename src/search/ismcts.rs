use super::*;
use crate::Score;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Single-observer ISMCTS with a fixed iteration budget.
///
/// Each decision builds a fresh tree. The search runs from the point of
/// view of whoever moves at the root, redrawing everything hidden from
/// them on every iteration, and answers with the most visited root move
/// that is legal in the real state.
#[derive(Debug)]
pub struct Ismcts {
    iterations: usize,
    exploration: Score,
    seed: Option<u64>,
    metrics: Metrics,
}

impl Default for Ismcts {
    fn default() -> Self {
        Self::new(crate::ITERATIONS)
    }
}

impl Ismcts {
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            exploration: crate::EXPLORATION,
            seed: None,
            metrics: Metrics::default(),
        }
    }
    pub fn with_exploration(self, exploration: Score) -> Self {
        Self { exploration, ..self }
    }
    /// Fixes the random source used by [`Ismcts::search`].
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }
    pub fn iterations(&self) -> usize {
        self.iterations
    }
    pub fn exploration(&self) -> Score {
        self.exploration
    }
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Chooses a move at `root` using the engine's own random source.
    pub fn search<G: SearchGame>(&self, root: &G) -> G::E {
        let ref mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        self.search_with(root, rng)
    }

    /// Chooses a move at `root`. A root with one legal move is answered
    /// without searching.
    pub fn search_with<G, R>(&self, root: &G, rng: &mut R) -> G::E
    where
        G: SearchGame,
        R: Rng + ?Sized,
    {
        self.metrics.search();
        let choices = root.choices();
        assert!(!choices.is_empty(), "search started from a finished game");
        if let [only] = choices.as_slice() {
            self.metrics.shortcut();
            return only.clone();
        }
        let observer = root.turn().expect("a side chooses between several moves");
        let mut tree = Tree::<G::E, G::T>::with_capacity(self.iterations);
        for _ in 0..self.iterations {
            self.iterate(&mut tree, root, observer, rng);
        }
        let best = tree
            .best(&choices)
            .unwrap_or_else(|| choices[rng.random_range(0..choices.len())].clone());
        log::debug!("{:?} chose {} over {} nodes", observer, best, tree.size());
        log::trace!("\n{}", tree);
        best
    }

    fn iterate<G, R>(&self, tree: &mut Tree<G::E, G::T>, root: &G, observer: G::T, rng: &mut R)
    where
        G: SearchGame,
        R: Rng + ?Sized,
    {
        self.metrics.iteration();
        let mut state = root.determinize(observer, rng);
        let mut node = tree.root();
        let (state, node) = loop {
            let legal = state.choices();
            if legal.is_empty() {
                break (state, node);
            }
            let untried = tree.untried(node, &legal);
            if untried.is_empty() {
                node = tree.select(node, &legal, self.exploration);
                state = state.apply(tree.incoming(node));
                continue;
            }
            let edge = untried[rng.random_range(0..untried.len())].clone();
            let mover = state.turn();
            let next = state.apply(&edge);
            self.metrics.expansion();
            break (next, tree.expand(node, edge, mover));
        };
        let winner = self.simulate(state, rng);
        tree.backpropagate(node, winner);
    }

    /// Plays uniformly random moves to the end.
    fn simulate<G, R>(&self, mut state: G, rng: &mut R) -> Option<G::T>
    where
        G: SearchGame,
        R: Rng + ?Sized,
    {
        loop {
            let legal = state.choices();
            if legal.is_empty() {
                return state.winner();
            }
            self.metrics.ply();
            state = state.apply(&legal[rng.random_range(0..legal.len())]);
        }
    }
}
