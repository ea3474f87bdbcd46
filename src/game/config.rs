use crate::pieces::*;
use crate::players::*;
use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;

/// Everything needed to set up a game.
///
/// `Default` reproduces the standard game. Any other configuration should
/// be checked with [`Config::validate`] before use; [`crate::game::Game::new`]
/// does so itself.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum tiles on the board across both rows.
    pub width: usize,
    /// Tiles in the draw deck, including the three opening tiles.
    pub deck: usize,
    /// How many of the deck's tiles carry a token.
    pub tokens: usize,
    /// Markers starting left of the start tile.
    pub left: Vec<Color>,
    /// Markers starting right of the start tile.
    pub right: Vec<Color>,
    pub scientist: Loadout,
    pub creature: Loadout,
    /// Cards either side may play once its wildcard is ready.
    pub wildcards: Vec<Card>,
    /// Pending markers at which placement switches to sampling.
    pub threshold: usize,
    /// Most distinct placements collected when sampling.
    pub cap: usize,
}

impl Default for Config {
    fn default() -> Self {
        use Color::*;
        Self {
            width: crate::BOARD_WIDTH,
            deck: crate::DECK_SIZE,
            tokens: crate::TOKEN_TILES,
            left: vec![Blue, Blue, Orange, Orange, Green],
            right: vec![Blue, Blue, Orange, Green, Green],
            scientist: Loadout::scientist(),
            creature: Loadout::creature(),
            wildcards: vec![Card::MoveOne, Card::MoveAll, Card::Split],
            threshold: crate::PLACEMENT_THRESHOLD,
            cap: crate::PLACEMENT_CAP,
        }
    }
}

impl Config {
    pub fn loadout(&self, side: Side) -> &Loadout {
        match side {
            Side::Scientist => &self.scientist,
            Side::Creature => &self.creature,
        }
    }

    /// Reads a JSON configuration. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = serde_json::from_str::<Self>(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations that cannot be dealt or played out.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.width >= 3, "board width {} is below the opening 3 tiles", self.width);
        anyhow::ensure!(self.width % 2 == 1, "board width {} must be odd to be reachable", self.width);
        anyhow::ensure!(
            self.deck >= self.width,
            "deck of {} cannot fill a board of width {}",
            self.deck,
            self.width
        );
        anyhow::ensure!(
            self.tokens <= self.deck - self.width,
            "{} token tiles do not fit below the top {} of a {} tile deck",
            self.tokens,
            self.width,
            self.deck
        );
        anyhow::ensure!(
            !self.left.is_empty() || !self.right.is_empty(),
            "no starting markers"
        );
        anyhow::ensure!(self.threshold >= 1, "placement threshold must be positive");
        anyhow::ensure!(self.cap >= 1, "placement cap must be positive");
        for side in Side::all() {
            self.loadout(side)
                .validate()
                .with_context(|| format!("{} loadout", side))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn rejects_crowded_deck() {
        let config = Config {
            tokens: 11,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_even_width() {
        let config = Config {
            width: 6,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = serde_json::from_str::<Config>(r#"{ "width": 5, "wildcards": ["Split"] }"#)
            .expect("parse");
        assert_eq!(config.width, 5);
        assert_eq!(config.wildcards, vec![Card::Split]);
        assert_eq!(config.deck, crate::DECK_SIZE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_reads_file() {
        let path = std::env::temp_dir().join("cryptid-config-test.json");
        let json = serde_json::to_string(&Config::default()).expect("serialize");
        std::fs::write(&path, json).expect("write");
        let config = Config::load(&path).expect("load");
        assert_eq!(config, Config::default());
        std::fs::remove_file(&path).ok();
    }
}
