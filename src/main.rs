use std::io;

use anyhow::Context;
use broadside::{
    init_logging, ui::render_board, AiPlayer, CliPlayer, PlayerNode, COMPUTER, HUMAN,
};
use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer on this terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Place your ships at random instead of entering them")]
        autoplace: bool,
    },
    /// Watch the computer play against itself.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            info!("using fixed seed {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, autoplace } => {
            let mut rng = make_rng(seed);
            println!("Welcome to Battleship");
            let stdin = io::stdin();
            let human = CliPlayer::new(stdin.lock(), io::stdout()).with_autoplace(autoplace);
            let mut node = PlayerNode::new(Box::new(human), Box::new(AiPlayer::new()));
            let outcome = node.run(&mut rng).context("game ended with an error")?;
            info!(
                "you fired {} shots ({} hits), the computer fired {} ({} hits)",
                outcome.shots[HUMAN],
                outcome.hits[HUMAN],
                outcome.shots[COMPUTER],
                outcome.hits[COMPUTER]
            );
        }
        Commands::Auto { seed } => {
            let mut rng = make_rng(seed);
            let mut node =
                PlayerNode::new(Box::new(AiPlayer::new()), Box::new(AiPlayer::new()));
            let outcome = node.run(&mut rng).context("game ended with an error")?;
            for idx in [HUMAN, COMPUTER] {
                println!("Player {} board:", idx + 1);
                print!("{}", render_board(node.game().board(idx), true));
            }
            println!(
                "Player {} wins after {} shots",
                outcome.winner + 1,
                outcome.shots[HUMAN] + outcome.shots[COMPUTER]
            );
        }
    }
    Ok(())
}
