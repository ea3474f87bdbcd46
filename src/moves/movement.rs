use super::*;
use crate::board::*;
use crate::players::*;
use serde::Serialize;
use std::collections::HashSet;

/// One legal transition, identified by who acts, what they do, and the
/// board it leaves behind.
///
/// The struct is its own canonical descriptor: two moves built along
/// different generator paths are the same tree edge exactly when all three
/// fields agree. `print` is absent for actions whose resulting board depends
/// on hidden deck order.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize)]
pub struct Move {
    side: Option<Side>,
    action: Action,
    print: Option<Fingerprint>,
}

impl Move {
    /// Builds a move by applying the action's board effect to a copy of
    /// `board` and fingerprinting the result.
    pub fn shaped(side: Option<Side>, action: Action, board: &Board) -> Self {
        let print = match action.is_visible() {
            true => {
                let mut board = board.clone();
                action.reshape(&mut board);
                Some(board.fingerprint())
            }
            false => None,
        };
        Self {
            side,
            action,
            print,
        }
    }
    pub fn side(&self) -> Option<Side> {
        self.side
    }
    pub fn action(&self) -> &Action {
        &self.action
    }
    pub fn print(&self) -> Option<Fingerprint> {
        self.print
    }
}

impl crate::search::SearchEdge for Move {}

/// Collapses moves with equal descriptors, keeping the first of each in
/// generation order.
pub fn dedup(moves: Vec<Move>) -> Vec<Move> {
    let mut seen = HashSet::with_capacity(moves.len());
    moves
        .into_iter()
        .filter(|m| seen.insert(m.clone()))
        .collect()
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.side {
            Some(side) => write!(f, "{}|{}", side, self.action)?,
            None => write!(f, "-|{}", self.action)?,
        }
        match self.print {
            Some(print) => write!(f, "|{}", print),
            None => Ok(()),
        }
    }
}
