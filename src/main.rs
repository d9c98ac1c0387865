#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use tincan::{
    init_logging, ChannelAck, LcdPreset, LogDiagnostics, NullDiagnostics, NullLcd, Session,
    SessionConfig, TerminalLcd, UniformSampler, NBR_OF_ROUNDS, PLAY_LOG_DEFAULT,
    SIMULATE_LOG_DEFAULT,
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
    /// Play on a terminal display; press Enter to start each new batch.
    Play {
        #[arg(long, value_enum, default_value_t = LcdPreset::Lcd4x20)]
        lcd: LcdPreset,
        #[arg(long, default_value_t = NBR_OF_ROUNDS, help = "Rounds per batch")]
        rounds: u32,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Skip the greeting and all presentation delays")]
        fast: bool,
    },
    /// Run rounds without a display and print a JSON summary.
    Simulate {
        #[arg(long, value_enum, default_value_t = LcdPreset::Lcd4x20)]
        lcd: LcdPreset,
        #[arg(long, default_value_t = 10_000)]
        rounds: u32,
        #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            lcd,
            rounds,
            seed,
            fast,
        } => {
            init_logging(PLAY_LOG_DEFAULT);
            let mut config = SessionConfig {
                rounds_per_batch: rounds,
                ..SessionConfig::default()
            };
            if fast {
                config = config.without_holds();
            }
            let rng = make_rng(seed);
            match lcd {
                LcdPreset::Lcd4x20 => play::<4, 20>(config, rng, !fast),
                LcdPreset::Lcd2x16 => play::<2, 16>(config, rng, !fast),
            }
        }
        Commands::Simulate { lcd, rounds, seed } => {
            init_logging(SIMULATE_LOG_DEFAULT);
            let config = SessionConfig {
                rounds_per_batch: rounds,
                ..SessionConfig::default()
            }
            .without_holds();
            let rng = make_rng(seed);
            let summary = match lcd {
                LcdPreset::Lcd4x20 => simulate::<4, 20>(config, rng)?,
                LcdPreset::Lcd2x16 => simulate::<2, 16>(config, rng)?,
            };
            println!("{}", serde_json::to_string(&summary)?);
            Ok(())
        }
    }
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        log::info!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn play<const R: usize, const C: usize>(
    config: SessionConfig,
    rng: SmallRng,
    greet: bool,
) -> anyhow::Result<()> {
    let mut session =
        Session::<_, _, R, C>::new(config, TerminalLcd::stdout(R), LogDiagnostics)
            .map_err(|e| anyhow::anyhow!(e))?;
    let mut sampler = UniformSampler::new(rng);
    let mut ack = ChannelAck::stdin();
    if greet {
        session.greet();
    }
    session.run(&mut sampler, &mut ack)
}

#[cfg(feature = "std")]
fn simulate<const R: usize, const C: usize>(
    config: SessionConfig,
    rng: SmallRng,
) -> anyhow::Result<tincan::BatchSummary> {
    let mut session = Session::<_, _, R, C>::new(config, NullLcd, NullDiagnostics)
        .map_err(|e| anyhow::anyhow!(e))?;
    let mut sampler = UniformSampler::new(rng);
    session.run_batch(&mut sampler)
}
