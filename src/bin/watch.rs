//! Watch one self-play game move by move.

use clap::Parser;
use colored::Colorize;
use cryptid::game::Config;
use cryptid::game::Game;
use cryptid::moves::Move;
use cryptid::players::Side;
use cryptid::sampler::Duel;
use cryptid::search::Ismcts;

#[derive(Parser)]
#[command(author, version, about = "Play and print a single self-play game", long_about = None)]
struct Args {
    /// Seed the game is dealt and searched from
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Iterations per scientist decision
    #[arg(short, long, default_value_t = cryptid::ITERATIONS)]
    scientist: usize,
    /// Iterations per creature decision
    #[arg(short, long, default_value_t = cryptid::ITERATIONS)]
    creature: usize,
    /// JSON game configuration, defaults to the standard rules
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

fn show(ply: usize, choice: &Move, game: &Game) {
    let label = format!("{:>4} {}", ply, choice);
    let label = match choice.side() {
        Some(Side::Scientist) => label.cyan(),
        Some(Side::Creature) => label.magenta(),
        None => label.dimmed(),
    };
    println!("{}", label);
    if choice.action().is_visible() {
        println!("{}", game.board());
    }
}

fn main() -> anyhow::Result<()> {
    cryptid::log();
    let args = Args::parse();
    let config = match args.config {
        Some(ref path) => Config::load(path)?,
        None => Config::default(),
    };
    let scientist = Ismcts::new(args.scientist);
    let creature = Ismcts::new(args.creature);
    let duel = Duel::new(&config, &scientist, &creature);
    let mut ply = 0;
    let record = duel.play_with(args.seed, |choice, game| {
        ply += 1;
        show(ply, choice, game);
    })?;
    let outcome = format!("{}", record);
    let outcome = match record.winner() {
        Side::Scientist => outcome.cyan().bold(),
        Side::Creature => outcome.magenta().bold(),
    };
    println!("{}", outcome);
    Ok(())
}
