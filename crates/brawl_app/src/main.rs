//! # brawl_app
//!
//! Headless host for the brawler simulation core. Loads configuration,
//! builds the world, and drives the fixed-timestep scheduler against the
//! wall clock. Input comes from a scripted key sequence routed through the
//! same keyboard adapter a windowed host would use.
//!
//! ## Configuration order
//!
//! 1. JSON file given with `--config` (or built-in defaults).
//! 2. `BRAWL_FPS`, `BRAWL_PANIC_LIMIT`, `BRAWL_SEED`, `BRAWL_LOG`.
//! 3. Command-line flags.

mod config;
mod game;
mod state_machine;
mod world;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use brawl_loop::{ClockHost, FrameInfo, Scheduler, TickInfo};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::GameConfig;
use game::Game;

#[derive(Parser)]
#[command(name = "brawl_app", about = "Headless brawler simulation")]
struct Args {
    /// Path to a JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of frames to run before exiting
    #[arg(long)]
    frames: Option<u64>,

    /// Seed for NPC behaviour
    #[arg(long)]
    seed: Option<u64>,

    /// Number of NPCs to spawn
    #[arg(long)]
    npcs: Option<usize>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = GameConfig::load(args.config.as_deref())?.with_env()?;
    if let Some(frames) = args.frames {
        config.frames = Some(frames);
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(npcs) = args.npcs {
        config.npcs = npcs;
    }

    // Initialise structured logging.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let scheduler_config = config.scheduler();
    scheduler_config.validate()?;
    info!(
        fps = config.fps,
        panic_limit = config.panic_limit,
        seed = config.seed,
        npcs = config.npcs,
        frames = ?config.frames,
        "brawl starting"
    );

    let mut game = Game::new(&config)?;
    let mut scheduler = Scheduler::new(scheduler_config)
        .with_update(|game: &mut Game, tick: &TickInfo| game.update(tick))
        .with_render(|game: &mut Game, frame: &FrameInfo| game.end_frame(frame))
        .with_panic(|game: &mut Game| game.on_overload());

    let mut host = ClockHost::new(Duration::from_secs_f64(1.0 / config.fps));
    if let Some(frames) = config.frames {
        host = host.with_frame_limit(frames);
    }

    let frames = scheduler.run(&mut host, &mut game)?;
    info!(
        frames,
        ticks = scheduler.tick_id(),
        fps = scheduler.fps(),
        overloads = game.overloads(),
        sprites = game.sprites().len(),
        state = %game.states.current(),
        "brawl finished"
    );
    Ok(())
}
