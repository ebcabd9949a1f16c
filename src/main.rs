#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use adaptive_battleship::{
    init_logging,
    sim::{simulate, Habit},
    terminal::{self, TerminalSurface},
    GameConfig, Session,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in this terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Run headless games against a scripted human and print a JSON report.
    Sim {
        #[arg(long, default_value_t = 10)]
        games: u32,
        #[arg(long, value_enum, default_value_t = Habit::Fixed)]
        habit: Habit,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed } => {
            let rng = if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let config = GameConfig::standard();
            let stdout = std::io::stdout();
            let mut surface = TerminalSurface::new(stdout.lock(), config.board_size());
            let mut session = Session::new(config, rng, &mut surface)?;
            terminal::run(&mut session, std::io::stdin().lock(), &mut surface)?;
        }
        Commands::Sim { games, habit, seed } => {
            let seed = seed.unwrap_or_else(rand::random);
            let report = simulate(games, habit, seed)?;
            println!("{}", serde_json::to_string(&report)?);
        }
    }
    Ok(())
}
