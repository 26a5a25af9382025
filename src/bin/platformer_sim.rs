//! Platformer Sim - Headless Session Runner
//!
//! Run with: `cargo run --bin platformer-sim -- --seconds 10`
//!
//! Plays an input script (the built-in demo run by default) against the
//! default level or a JSON config, then prints where the character and
//! camera ended up.
//!
//! Logging goes through `RUST_LOG`, e.g. `RUST_LOG=ledgekit_engine=debug`
//! shows landings, jumps, wall jumps and camera shakes.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use ledgekit_engine::game::{GameConfig, InputScript, Stage, StageSnapshot};

#[derive(Parser, Debug)]
#[command(name = "platformer-sim")]
#[command(about = "Run a scripted 2D platformer session without a window")]
struct Cli {
    /// Game config JSON (defaults apply to anything it omits)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Input script JSON (defaults to the built-in demo run)
    #[arg(long)]
    script: Option<PathBuf>,

    /// Session length in seconds
    #[arg(long, default_value_t = 10.0)]
    seconds: f32,

    /// Override the fixed physics rate
    #[arg(long)]
    fixed_hz: Option<u32>,

    /// Variable frame rate the session is driven at
    #[arg(long, default_value_t = 60.0)]
    frame_hz: f32,

    /// Print a snapshot every N seconds of session time
    #[arg(long)]
    report_every: Option<f32>,

    /// Print snapshots as JSON lines
    #[arg(long)]
    json: bool,

    /// Print the default config as JSON and exit
    #[arg(long)]
    dump_default_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .init();

    let cli = Cli::parse();

    if cli.dump_default_config {
        println!("{}", GameConfig::default().to_json()?);
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(hz) = cli.fixed_hz {
        config.clock.fixed_hz = hz;
    }

    let script = match &cli.script {
        Some(path) => InputScript::load(path)
            .with_context(|| format!("loading script {}", path.display()))?,
        None => InputScript::demo(),
    };

    if !(cli.frame_hz.is_finite() && cli.frame_hz > 0.0) {
        anyhow::bail!("--frame-hz must be positive, got {}", cli.frame_hz);
    }
    let frame_time = 1.0 / cli.frame_hz;

    let mut stage = Stage::new(&config, script).context("building stage")?;

    let mut next_report = cli.report_every.filter(|every| *every > 0.0);
    let mut frames = 0u64;
    while stage.elapsed() < cli.seconds {
        stage.frame(frame_time.min(cli.seconds - stage.elapsed()));
        frames += 1;

        if let (Some(at), Some(every)) = (next_report, cli.report_every) {
            if stage.elapsed() >= at {
                print_snapshot(&stage.snapshot(), cli.json)?;
                next_report = Some(at + every);
            }
        }
    }

    let snapshot = stage.snapshot();
    if cli.json {
        print_snapshot(&snapshot, true)?;
    } else {
        println!("=== Session finished ===");
        println!("  frames:          {frames}");
        println!("  fixed ticks:     {}", snapshot.fixed_ticks);
        println!("  script done:     {}", stage.script_finished());
        print_snapshot(&snapshot, false)?;
    }

    Ok(())
}

fn print_snapshot(snapshot: &StageSnapshot, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(snapshot)?);
        return Ok(());
    }
    let crouch = if snapshot.crouching { " crouching" } else { "" };
    println!(
        "  t={:6.2}s pos=({:7.2}, {:6.2}) vel=({:6.2}, {:6.2}) {:?} facing {:?}{crouch}",
        snapshot.time,
        snapshot.position.x,
        snapshot.position.y,
        snapshot.velocity.x,
        snapshot.velocity.y,
        snapshot.motion,
        snapshot.facing,
    );
    println!(
        "           jumps={} landings={} camera=({:.2}, {:.2}) size={:.3}",
        snapshot.remaining_jumps,
        snapshot.landings,
        snapshot.camera_position.x,
        snapshot.camera_position.y,
        snapshot.camera_size,
    );
    Ok(())
}
