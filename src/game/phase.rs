use super::*;
use crate::moves;
use crate::moves::Move;
use crate::players::*;
use serde::Serialize;

/// The sub-steps of a turn, as a closed state machine.
///
/// Each phase knows who acts in it, how to enumerate its legal moves, and
/// which phase follows once a move has been applied. The successor depends
/// only on the game after the move.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Phase {
    MoveMarkers,
    CreatureUpdate,
    CreatureTokens,
    ScientistDrop,
    FreePlace,
    DrawTiles,
    Tiebreaker,
    ScientistWin,
    CreatureWin,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::ScientistWin | Self::CreatureWin)
    }
    pub fn winner(&self) -> Option<Side> {
        match self {
            Self::ScientistWin => Some(Side::Scientist),
            Self::CreatureWin => Some(Side::Creature),
            _ => None,
        }
    }

    /// Who acts in this phase. Nobody chooses the tiebreak or acts once the
    /// game is decided.
    pub fn mover(&self, game: &Game) -> Option<Side> {
        match self {
            Self::MoveMarkers => Some(game.active()),
            Self::CreatureUpdate | Self::CreatureTokens | Self::FreePlace => Some(Side::Creature),
            Self::ScientistDrop => Some(Side::Scientist),
            Self::DrawTiles => Some(game.first()),
            Self::Tiebreaker | Self::ScientistWin | Self::CreatureWin => None,
        }
    }

    /// Legal moves in this phase. Empty only once the game is decided.
    pub fn choices(&self, game: &Game) -> Vec<Move> {
        match self {
            Self::MoveMarkers => moves::markers(game),
            Self::CreatureUpdate => moves::updates(game),
            Self::CreatureTokens => moves::tokens(game),
            Self::ScientistDrop => moves::drops(game),
            Self::FreePlace => moves::free(game),
            Self::DrawTiles => moves::tiles(game),
            Self::Tiebreaker => moves::tiebreak(game),
            Self::ScientistWin | Self::CreatureWin => vec![],
        }
    }

    /// The phase that follows, judged from the game after a move.
    pub fn next(&self, game: &Game) -> Self {
        let board = game.board();
        let surrounded = board.is_full() && board.edges_occupied();
        match self {
            Self::MoveMarkers if board.active().markers() > 0 => Self::MoveMarkers,
            Self::MoveMarkers => Self::CreatureUpdate,
            Self::CreatureUpdate if !board.active().presence().is_empty() => Self::CreatureUpdate,
            Self::CreatureUpdate if board.presence() < 2 => Self::ScientistWin,
            Self::CreatureUpdate if surrounded => Self::CreatureWin,
            Self::CreatureUpdate => Self::CreatureTokens,
            Self::CreatureTokens if game.tiles().len() < 2 => Self::Tiebreaker,
            Self::CreatureTokens if board.is_full() => Self::ScientistDrop,
            Self::CreatureTokens => Self::DrawTiles,
            Self::ScientistDrop if surrounded => Self::CreatureWin,
            Self::ScientistDrop if game.tiles().len() < 2 => Self::Tiebreaker,
            Self::ScientistDrop if !game.dropped().is_empty() => Self::FreePlace,
            Self::ScientistDrop => Self::DrawTiles,
            Self::FreePlace => Self::DrawTiles,
            Self::DrawTiles => Self::MoveMarkers,
            Self::Tiebreaker => match game.player(Side::Scientist).tokens() > game.player(Side::Creature).tokens() {
                true => Self::ScientistWin,
                false => Self::CreatureWin,
            },
            Self::ScientistWin => Self::ScientistWin,
            Self::CreatureWin => Self::CreatureWin,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MoveMarkers => write!(f, "MOVE_MARKERS"),
            Self::CreatureUpdate => write!(f, "CREATURE_UPDATE"),
            Self::CreatureTokens => write!(f, "CREATURE_TOKENS"),
            Self::ScientistDrop => write!(f, "SCIENTIST_DROP"),
            Self::FreePlace => write!(f, "FREE_PLACE"),
            Self::DrawTiles => write!(f, "DRAW_TILES"),
            Self::Tiebreaker => write!(f, "TIEBREAKER"),
            Self::ScientistWin => write!(f, "SCIENTIST_WIN"),
            Self::CreatureWin => write!(f, "CREATURE_WIN"),
        }
    }
}
