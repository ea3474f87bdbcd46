//! Information-set Monte Carlo tree search for a two-sided hidden-movement game.
//!
//! One side (the scientists) moves colored markers across a two-row board of
//! tiles; the other side (the creature) answers with the number or colors of
//! markers around the tiles it may have moved to, and its true position is only
//! ever known as a set of presence tiles.
//!
//! # Module Structure
//!
//! - `pieces`: Markers, tiles, spaces, decks and cards
//! - `board`: Two-row board, edge drops, creature presence, fingerprints
//! - `players`: Sides and per-side hands, decks and tokens
//! - `moves`: Move descriptors and every legal-move generator
//! - `game`: Full game state, configuration, and the phase machine
//! - `search`: Game-agnostic ISMCTS over an arena tree
//! - `sampler`: Parallel self-play of many independent games
pub mod board;
pub mod game;
pub mod moves;
pub mod pieces;
pub mod players;
#[cfg(feature = "server")]
pub mod sampler;
pub mod search;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Token counts held by either side.
pub type Tokens = u8;
/// Win rates and UCB scores.
pub type Score = f64;
/// Visit, win and availability counters on search nodes.
pub type Count = u32;

// ============================================================================
// BOARD AND DECK DEFAULTS
// ============================================================================
/// Maximum number of tiles on the board across both rows.
pub const BOARD_WIDTH: usize = 7;
/// Tiles in the shared draw deck.
pub const DECK_SIZE: usize = 17;
/// Tiles in the deck that carry a token.
pub const TOKEN_TILES: usize = 5;

// ============================================================================
// MARKER PLACEMENT
// Exhaustive placement is exponential in the number of pending markers.
// ============================================================================
/// Pending marker count at which placement switches from exhaustive to sampled.
pub const PLACEMENT_THRESHOLD: usize = 4;
/// Maximum number of distinct boards collected by sampled placement.
pub const PLACEMENT_CAP: usize = 1000;
/// Sampling attempts per distinct board before sampled placement gives up.
pub const PLACEMENT_PATIENCE: usize = 8;

// ============================================================================
// ISMCTS
// ============================================================================
/// Exploration constant C in wins/visits + C·sqrt(ln(avails)/visits).
pub const EXPLORATION: Score = 0.7;
/// Iterations per decision when nothing else is configured.
pub const ITERATIONS: usize = 2_000;
/// Availability counter of a freshly expanded node.
pub const INITIAL_AVAILS: Count = 1;

// ============================================================================
// SAMPLING
// ============================================================================
/// Games per sampler run when nothing else is configured.
pub const SAMPLE_GAMES: usize = 100;
/// Interval between progress log messages while sampling.
pub const SAMPLE_LOG_INTERVAL: std::time::Duration = std::time::Duration::from_secs(30);

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Logs INFO to the terminal and DEBUG to `logs/cryptid-<unix seconds>.log`.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/cryptid-{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
