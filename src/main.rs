//! Gun Game entry point
//!
//! Loads configuration, brings up the renderer and runs the frame loop.
//! Input comes from a recorded script or, by default, the demo autopilot.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use gun_game::GameConfig;
use gun_game::app::{RunOptions, run_session};
use gun_game::input::{Autopilot, InputSource, ScriptedInput};
use gun_game::render::MeshRenderer;
use gun_game::sim::GameState;

#[derive(Parser, Debug)]
#[command(name = "gun-game", version, about = "2D artillery arcade game")]
struct Args {
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed (overrides config; random when absent)
    #[arg(long)]
    seed: Option<u64>,

    /// Static targets per wave (overrides config)
    #[arg(long)]
    targets: Option<u32>,

    /// Stop after this many frames
    #[arg(long, default_value_t = 900)]
    frames: u64,

    /// Pace frames at the configured frame rate
    #[arg(long)]
    realtime: bool,

    /// Replay input from a JSON frame script instead of the autopilot
    #[arg(long)]
    script: Option<PathBuf>,

    /// Print the session summary as JSON
    #[arg(long)]
    json: bool,
}

fn load_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(targets) = args.targets {
        config.n_targets = targets;
    }
    config.validate()?;
    Ok(config)
}

fn load_input(args: &Args) -> Result<Box<dyn InputSource>> {
    match &args.script {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading input script {}", path.display()))?;
            let script = ScriptedInput::from_json(&json)
                .with_context(|| format!("parsing input script {}", path.display()))?;
            log::info!("Replaying {} scripted frames", script.remaining());
            Ok(Box::new(script))
        }
        None => {
            log::info!("No input script; autopilot is playing");
            Ok(Box::new(Autopilot::new()))
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = load_config(&args).context("loading configuration")?;
    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!("{} starting with seed {}", config.title, seed);

    let mut renderer =
        MeshRenderer::new(config.width, config.height).context("initializing display")?;
    let mut input = load_input(&args)?;
    let mut state = GameState::new(&config, seed);

    let options = RunOptions {
        max_frames: Some(args.frames),
        realtime: args.realtime,
        frame_rate: config.frame_rate,
    };
    let summary = run_session(&mut state, input.as_mut(), &mut renderer, &options);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "Destroyed: {}  Shells used: {}  Total: {}  ({} frames, wave {})",
            summary.targets_destroyed,
            summary.shells_used,
            summary.score,
            summary.frames,
            summary.waves
        );
    }

    Ok(())
}
