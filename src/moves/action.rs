use crate::board::*;
use crate::pieces::*;
use serde::Serialize;

/// What the creature says about the tiles it moved to.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Claim {
    Number(usize),
    Colors(ColorSet),
}

/// Which of the two drawn tiles goes on the left.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Orientation {
    LR,
    RL,
}

impl Orientation {
    pub const fn all() -> [Self; 2] {
        [Self::LR, Self::RL]
    }
}

/// Everything a side can do, with the parameters that pin down its effect.
///
/// Card actions carry `wild` when they are played as the wildcard rather
/// than from the hand. Placements are indexed by inactive space.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize)]
pub enum Action {
    Draw,
    MoveOne {
        from: usize,
        to: usize,
        color: Color,
        wild: bool,
    },
    MoveAll {
        color: Color,
        shift: usize,
        wild: bool,
    },
    Split {
        space: usize,
        left: Palette,
        right: Palette,
        wild: bool,
    },
    PlaceCubes {
        placement: Vec<Palette>,
        wild: bool,
    },
    Announce(Claim),
    Drop(Option<Flank>),
    Place(Vec<Palette>),
    Tiles(Orientation),
    Token(Option<usize>),
    Tiebreak,
}

impl Action {
    /// The card this action spends, if any.
    pub fn card(&self) -> Option<Card> {
        match self {
            Self::MoveOne { .. } => Some(Card::MoveOne),
            Self::MoveAll { .. } => Some(Card::MoveAll),
            Self::Split { .. } => Some(Card::Split),
            Self::PlaceCubes { .. } => Some(Card::PlaceCubes),
            _ => None,
        }
    }
    pub fn is_wild(&self) -> bool {
        match self {
            Self::MoveOne { wild, .. }
            | Self::MoveAll { wild, .. }
            | Self::Split { wild, .. }
            | Self::PlaceCubes { wild, .. } => *wild,
            _ => false,
        }
    }
    /// Whether the result is fully determined by the public board.
    /// Drawing cards and laying new tiles depend on hidden deck order.
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Draw | Self::Tiles(_))
    }

    /// Applies this action's effect on the board alone.
    pub fn reshape(&self, board: &mut Board) {
        match self {
            Self::MoveOne {
                from, to, color, ..
            } => board.shift(*from, *to, *color),
            Self::MoveAll { color, shift, .. } => {
                for i in 0..board.active().spaces().len() {
                    let n = board.active_mut().space_mut(i).remove_all(*color);
                    let target = board.inactive_mut().space_mut(i + shift);
                    target.extend(std::iter::repeat_n(*color, n));
                }
            }
            Self::Split {
                space, left, right, ..
            } => {
                for color in left.markers() {
                    board.shift(*space, *space, color);
                }
                for color in right.markers() {
                    board.shift(*space, *space + 1, color);
                }
            }
            Self::PlaceCubes { placement, .. } | Self::Place(placement) => {
                for (i, palette) in placement.iter().enumerate() {
                    board.inactive_mut().space_mut(i).extend(palette.markers());
                }
            }
            Self::Announce(Claim::Number(n)) => board.move_to_number(*n),
            Self::Announce(Claim::Colors(colors)) => board.move_to_colors(*colors),
            Self::Drop(Some(flank)) => {
                board.drop_edge(*flank);
            }
            Self::Token(Some(i)) => {
                board.inactive_mut().tile_mut(*i).take_token();
            }
            Self::Draw | Self::Tiles(_) | Self::Drop(None) | Self::Token(None) | Self::Tiebreak => {}
        }
    }
}

fn placed(placement: &[Palette]) -> String {
    match placement.iter().all(Palette::is_empty) {
        true => "NONE".to_string(),
        false => placement
            .iter()
            .map(|p| if p.is_empty() { "-".to_string() } else { p.to_string() })
            .collect::<Vec<_>>()
            .join(","),
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let wild = if self.is_wild() { "WILD" } else { "HAND" };
        match self {
            Self::Draw => write!(f, "DRAW"),
            Self::MoveOne {
                from, to, color, ..
            } => write!(f, "MOVEONE|{}|{}>{}|{}", wild, from, to, color),
            Self::MoveAll { color, shift, .. } => write!(f, "MOVEALL|{}|{}|+{}", wild, color, shift),
            Self::Split {
                space, left, right, ..
            } => write!(f, "SPLIT|{}|{}|{}/{}", wild, space, left, right),
            Self::PlaceCubes { placement, .. } => write!(f, "PLACECUBES|{}|{}", wild, placed(placement)),
            Self::Announce(Claim::Number(n)) => write!(f, "ANNOUNCE|{}", n),
            Self::Announce(Claim::Colors(c)) => write!(f, "ANNOUNCE|{}", c),
            Self::Drop(Some(flank)) => write!(f, "DROP|{}", flank),
            Self::Drop(None) => write!(f, "DROP|NONE"),
            Self::Place(placement) => write!(f, "FREEPLACE|{}", placed(placement)),
            Self::Tiles(o) => write!(f, "PLACETILES|{:?}", o),
            Self::Token(Some(i)) => write!(f, "TAKETOKEN|{}", i),
            Self::Token(None) => write!(f, "TAKETOKEN|NONE"),
            Self::Tiebreak => write!(f, "TIEBREAKER"),
        }
    }
}
