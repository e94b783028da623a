use std::io;

use clap::Parser;
use hanabi_engine::logging::init_logging;
use hanabi_engine::play::{run_console, scripted_demo};
use hanabi_engine::Match;

#[derive(Parser)]
#[command(author, version, about = "Two-player Hanabi at the terminal", long_about = None)]
struct Cli {
    #[arg(long, help = "Shuffle seed (e.g., --seed 12345); random if omitted")]
    seed: Option<u64>,

    #[arg(long, help = "Replay the fixed opening and print the state after each step")]
    scripted: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(rand::random);

    if cli.scripted {
        println!("Scripted opening with seed {}", seed);
        for step in scripted_demo(seed) {
            match step.result {
                Ok(_) => println!("\n{} chose to {}:", step.player, step.action),
                Err(e) => println!("\n{} could not {}: {}", step.player, step.action, e),
            }
            println!("{}", step.snapshot);
        }
        return Ok(());
    }

    println!("Seed {}. Commands: play N, discard N, clue, state, quit", seed);
    let mut session = Match::with_seed(seed);
    run_console(&mut session, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
