use rand::{rngs::SmallRng, SeedableRng};
use salvo::{init_logging, AutoGunner, NullOutput, Session};

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [games]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: u32 = match args.get(2) {
        Some(n) => n.parse()?,
        None => 1,
    };

    let mut gunner = AutoGunner::new(SmallRng::seed_from_u64(seed.wrapping_add(1)));
    let mut session = Session::new(SmallRng::seed_from_u64(seed)).max_games(games);
    let summary = session.run(&mut gunner, &mut NullOutput)?;

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
