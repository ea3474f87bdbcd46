use crate::pieces::Card;
use serde::Deserialize;
use serde::Serialize;

/// Hand size and card composition for one side.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loadout {
    pub limit: usize,
    pub hand: usize,
    pub move_all: usize,
    pub move_one: usize,
    pub split: usize,
    pub place: usize,
}

impl Loadout {
    pub const fn scientist() -> Self {
        Self {
            limit: 4,
            hand: 3,
            move_all: 3,
            move_one: 2,
            split: 5,
            place: 0,
        }
    }
    pub const fn creature() -> Self {
        Self {
            limit: 4,
            hand: 3,
            move_all: 2,
            move_one: 3,
            split: 5,
            place: 0,
        }
    }
    /// Every card this side owns, in a fixed order.
    pub fn cards(&self) -> Vec<Card> {
        std::iter::empty()
            .chain(std::iter::repeat_n(Card::MoveAll, self.move_all))
            .chain(std::iter::repeat_n(Card::MoveOne, self.move_one))
            .chain(std::iter::repeat_n(Card::Split, self.split))
            .chain(std::iter::repeat_n(Card::PlaceCubes, self.place))
            .collect()
    }
    pub fn size(&self) -> usize {
        self.move_all + self.move_one + self.split + self.place
    }
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.limit > 0, "hand limit must be positive");
        anyhow::ensure!(self.size() > 0, "loadout owns no cards");
        anyhow::ensure!(self.hand <= self.limit, "starting hand {} exceeds hand limit {}", self.hand, self.limit);
        anyhow::ensure!(self.hand <= self.size(), "starting hand {} exceeds {} owned cards", self.hand, self.size());
        Ok(())
    }
}
