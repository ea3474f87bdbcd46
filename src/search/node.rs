use super::*;
use crate::Count;
use crate::Score;

/// Statistics for one tree node.
///
/// `wins` counts playouts won by `mover`, the side that made the move into
/// this node. `avails` counts how many times the move was legal when its
/// parent was selected from.
#[derive(Debug, Clone)]
pub struct Node<T> {
    mover: Option<T>,
    wins: Count,
    visits: Count,
    avails: Count,
}

impl<T: SearchTurn> Node<T> {
    pub fn root() -> Self {
        Self::new(None)
    }
    pub fn new(mover: Option<T>) -> Self {
        Self {
            mover,
            wins: 0,
            visits: 0,
            avails: crate::INITIAL_AVAILS,
        }
    }
    pub fn mover(&self) -> Option<T> {
        self.mover
    }
    pub fn wins(&self) -> Count {
        self.wins
    }
    pub fn visits(&self) -> Count {
        self.visits
    }
    pub fn avails(&self) -> Count {
        self.avails
    }

    /// UCB1 with availability in place of parent visits.
    pub fn ucb(&self, exploration: Score) -> Score {
        if self.visits == 0 {
            return Score::INFINITY;
        }
        let visits = self.visits as Score;
        let exploit = self.wins as Score / visits;
        let explore = ((self.avails as Score).ln() / visits).sqrt();
        exploit + exploration * explore
    }
    pub fn avail(&mut self) {
        self.avails += 1;
    }
    pub fn update(&mut self, winner: Option<T>) {
        self.visits += 1;
        if self.mover.is_some() && self.mover == winner {
            self.wins += 1;
        }
    }
}

impl<T: SearchTurn> std::fmt::Display for Node<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "W/V/A {:>5}/{:>5}/{:>5}", self.wins, self.visits, self.avails)
    }
}
