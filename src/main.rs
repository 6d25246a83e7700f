use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use salvo::{init_logging, Session, TerminalInput, TerminalOutput, MAX_GAMES, MAX_PROMPT_RETRIES};

#[derive(Parser)]
#[command(author, version, about = "Find and sink the hidden ship", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = MAX_GAMES, help = "Stop after this many games")]
    max_games: u32,
    #[arg(
        long,
        default_value_t = MAX_PROMPT_RETRIES,
        help = "Invalid replay answers allowed before quitting"
    )]
    retries: u32,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    println!("*** SALVO ***");
    println!("One ship is hidden on the board. Enter a row and a column to fire.");
    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (games will be reproducible)", s);
    }
    let rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut session = Session::new(rng)
        .max_games(cli.max_games)
        .max_prompt_retries(cli.retries);
    session.run(&mut TerminalInput::new(), &mut TerminalOutput)?;
    Ok(())
}
