use broadside::{AiPlayer, PlayerNode, COMPUTER, HUMAN};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut node = PlayerNode::new(Box::new(AiPlayer::new()), Box::new(AiPlayer::new()));
    let outcome = node.run(&mut rng)?;

    let name = |idx: usize| if idx == HUMAN { "player1" } else { "player2" };
    let status = |idx: usize| if idx == outcome.winner { "Won" } else { "Lost" };

    let result = json!({
        "seed": seed,
        "outcome": outcome,
        "player1": {
            "status": status(HUMAN),
            "fleet": node.game().board(HUMAN).ships(),
        },
        "player2": {
            "status": status(COMPUTER),
            "fleet": node.game().board(COMPUTER).ships(),
        },
        "winner": name(outcome.winner),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
