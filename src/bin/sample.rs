//! Self-play sampler.
//!
//! Plays many seeded games between two ISMCTS engines in parallel and
//! reports how often each side wins.

use clap::Parser;
use cryptid::game::Config;
use cryptid::sampler::Sampler;

#[derive(Parser)]
#[command(author, version, about = "Sample self-play games between two engines", long_about = None)]
struct Args {
    /// Number of games to play
    #[arg(short, long, default_value_t = cryptid::SAMPLE_GAMES)]
    games: usize,
    /// Iterations per scientist decision
    #[arg(short, long, default_value_t = cryptid::ITERATIONS)]
    scientist: usize,
    /// Iterations per creature decision
    #[arg(short, long, default_value_t = cryptid::ITERATIONS)]
    creature: usize,
    /// Worker threads, defaults to one per core
    #[arg(short, long)]
    threads: Option<usize>,
    /// Base seed; game i is played from seed + i
    #[arg(long)]
    seed: Option<u64>,
    /// JSON game configuration, defaults to the standard rules
    #[arg(long)]
    config: Option<std::path::PathBuf>,
    /// Exploration constant for both engines
    #[arg(short, long, default_value_t = cryptid::EXPLORATION)]
    exploration: f64,
}

fn main() -> anyhow::Result<()> {
    cryptid::log();
    let args = Args::parse();
    let config = match args.config {
        Some(ref path) => Config::load(path)?,
        None => Config::default(),
    };
    let mut sampler = Sampler::new(config, args.scientist, args.creature)
        .with_games(args.games)
        .with_exploration(args.exploration);
    if let Some(threads) = args.threads {
        sampler = sampler.with_threads(threads);
    }
    if let Some(seed) = args.seed {
        sampler = sampler.with_seed(seed);
    }
    let tally = sampler.run()?;
    println!("{}", tally);
    Ok(())
}
