//! Crag Hopper entry point
//!
//! Headless driver for the deterministic sim: the autopilot plays runs
//! at a fixed timestep while events stream to the log and stdout.

use std::path::PathBuf;

use clap::Parser;

use crag_hopper::Tuning;
use crag_hopper::consts::{MAX_SUBSTEPS, SIM_DT};
use crag_hopper::sim::{GameEvent, GameState, TickInput, tick};

/// Command line options
#[derive(Parser, Debug)]
#[command(name = "crag-hopper", about = "Endless rock-climbing arcade game (headless demo)")]
struct Opt {
    /// World seed
    #[arg(short, long, default_value_t = 7)]
    seed: u64,

    /// Number of fixed simulation ticks to run (one minute by default)
    #[arg(short, long, default_value_t = 7200)]
    ticks: u64,

    /// Path to a tuning JSON file
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Pace the simulation against the wall clock instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Write the final game state as JSON to this path
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let opt = Opt::parse();

    let tuning = match &opt.tuning {
        Some(path) => Tuning::from_path(path)?,
        None => Tuning::default(),
    };

    log::info!("Crag Hopper starting (seed {})", opt.seed);
    let mut state = GameState::with_tuning(opt.seed, tuning);
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    let mut runs = 0u64;
    let mut best_score = 0u64;

    if opt.realtime {
        run_realtime(&mut state, &input, opt.ticks, &mut runs, &mut best_score);
    } else {
        for _ in 0..opt.ticks {
            tick(&mut state, &input, SIM_DT);
            report_events(&mut state, &mut runs, &mut best_score);
        }
    }

    println!(
        "{} ticks, {} runs ended, best score {}",
        opt.ticks, runs, best_score
    );

    if let Some(path) = &opt.snapshot {
        let json = serde_json::to_string_pretty(&state)?;
        std::fs::write(path, json)?;
        log::info!("wrote snapshot to {}", path.display());
    }

    Ok(())
}

/// Drain and print events, tracking run statistics
fn report_events(state: &mut GameState, runs: &mut u64, best_score: &mut u64) {
    for event in state.drain_events() {
        match event {
            GameEvent::Started => log::info!("run live"),
            GameEvent::CorrectMove => log::debug!("correct move"),
            GameEvent::WrongMove => log::debug!("wrong move"),
            GameEvent::Score(total) => println!("score: {}", total),
            GameEvent::RockLost => log::info!("lost the ridden rock"),
            GameEvent::RunEnded { score } => {
                *runs += 1;
                *best_score = (*best_score).max(score);
                println!("run over, score {}", score);
            }
            GameEvent::WorldReset => log::info!("world reset"),
        }
    }
}

/// Fixed-timestep loop paced by the wall clock. The frame delta is
/// clamped and substeps are capped so a long stall cannot snowball.
fn run_realtime(
    state: &mut GameState,
    input: &TickInput,
    max_ticks: u64,
    runs: &mut u64,
    best_score: &mut u64,
) {
    use std::time::{Duration, Instant};

    let mut last = Instant::now();
    let mut accumulator = 0.0f32;
    let mut ticked = 0u64;

    while ticked < max_ticks {
        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f32().min(0.1);
        last = now;
        accumulator += dt;

        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS && ticked < max_ticks {
            tick(state, input, SIM_DT);
            report_events(state, runs, best_score);
            accumulator -= SIM_DT;
            substeps += 1;
            ticked += 1;
        }

        std::thread::sleep(Duration::from_millis(4));
    }
}
