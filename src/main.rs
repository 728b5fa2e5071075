mod terminal;

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use rand::{rngs::StdRng, SeedableRng};
use sapper::{config::DEFAULT_FPS, Game, GameConfig, Presentation};
use simplelog::WriteLogger;
use std::{fs::OpenOptions, path::PathBuf};

/// Minesweeper in the terminal. Left click opens a cell, right click flags it.
#[derive(Debug, Parser)]
#[command(
    name = "sapper",
    version,
    about,
    after_help = "Keys: r starts a new game, q or Esc quits."
)]
struct Args {
    /// Seed for the mine layout. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Frame rate cap.
    #[arg(
        long,
        default_value_t = DEFAULT_FPS,
        value_parser = clap::value_parser!(u32).range(1..=240)
    )]
    fps: u32,

    /// Do not ring the terminal bell on clicks, flags and explosions.
    #[arg(long)]
    mute: bool,

    /// Append log records to this file. The terminal itself belongs to the game.
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        WriteLogger::init(
            args.verbosity.log_level_filter(),
            simplelog::Config::default(),
            file,
        )
        .context("installing logger")?;
    }

    let config = GameConfig::default();
    config.validate()?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let game = Game::new(config, &mut rng)?;
    log::info!(
        "Starting {}x{} game with {} mines",
        config.width,
        config.height,
        config.mines
    );

    let presentation = Presentation::new(terminal::TILE_SIZE, terminal::Bell::new(args.mute));
    terminal::run(game, presentation, &mut rng, args.fps)?;

    println!("Thanks for playing!");
    Ok(())
}
