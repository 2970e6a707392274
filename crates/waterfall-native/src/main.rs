use clap::Parser;
use glam::Vec2;
use rand::prelude::*;
use waterfall_core::{
    AudioCommand, AudioSink, DirectionalInput, PhysicsWorld, RapierWorld, SceneConfig, Simulation,
    TickInput,
};

const FRAME_DT: f32 = 1.0 / 60.0;
const DEFAULT_SECONDS: f32 = 60.0;
const DEFAULT_SEED: u64 = 42;
// How long the pilot holds a key combination before picking another
const HOLD_MIN_SEC: f32 = 0.5;
const HOLD_MAX_SEC: f32 = 3.0;

/// Stands in for the WebAudio graph: logs every command it receives.
#[derive(Default)]
struct LoggingSink {
    received: usize,
}

impl AudioSink for LoggingSink {
    fn send(&mut self, command: AudioCommand) {
        self.received += 1;
        log::info!("[audio] {:?}", command);
    }
}

/// Random helmsman: mostly throttles forward, sometimes turns or idles.
struct Pilot {
    rng: StdRng,
    held: DirectionalInput,
    remaining: f32,
}

impl Pilot {
    fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            held: DirectionalInput::default(),
            remaining: 0.0,
        }
    }

    fn next(&mut self, dt: f32) -> DirectionalInput {
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining = self.rng.gen_range(HOLD_MIN_SEC..HOLD_MAX_SEC);
            let idle = self.rng.gen::<f32>() < 0.2;
            let turn = self.rng.gen::<f32>();
            self.held = DirectionalInput {
                forward: !idle && self.rng.gen::<f32>() < 0.8,
                backward: !idle && self.rng.gen::<f32>() < 0.1,
                left: !idle && turn < 0.3,
                right: !idle && turn > 0.7,
            };
        }
        self.held
    }
}

/// Runs the waterfall scene headless with a random pilot and logs the audio mix.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Simulated time to run, in seconds
    #[arg(long, default_value_t = DEFAULT_SECONDS, value_parser = parse_seconds)]
    seconds: f32,

    /// Seed for the pilot's key choices
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
}

fn parse_seconds(s: &str) -> Result<f32, String> {
    let seconds: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if seconds.is_finite() && seconds >= 0.0 {
        Ok(seconds)
    } else {
        Err(format!("expected a finite, non-negative duration, got {s}"))
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = SceneConfig::default();
    let world = RapierWorld::new(&config);
    let mut sim = Simulation::new(config, world)?;
    sim.context_mut().set_loaded(true);
    let mut sink = LoggingSink::default();
    let mut pilot = Pilot::new(args.seed);

    let frames = (args.seconds / FRAME_DT).ceil() as usize;
    let mut nearest = f32::MAX;
    let mut farthest = 0.0f32;
    for frame in 0..frames {
        let input = TickInput {
            keys: pilot.next(FRAME_DT),
            pointer: Vec2::ZERO,
        };
        let report = sim.tick(&input, FRAME_DT, &mut sink);

        let pose = sim.world().pose();
        let d = pose.translation.distance(sim.config().landmark);
        nearest = nearest.min(d);
        farthest = farthest.max(d);
        if frame % 60 == 0 {
            log::info!(
                "[sim] t={:.1}s pos=({:.2},{:.2},{:.2}) d={:.2} p={:.1} {:?} submerged={}",
                frame as f32 * FRAME_DT,
                pose.translation.x,
                pose.translation.y,
                pose.translation.z,
                d,
                report.bucket,
                report.containment,
                report.submerged
            );
        }
    }

    log::info!(
        "done: {} frames, {} audio commands, distance range {:.2}..{:.2}",
        frames,
        sink.received,
        nearest,
        farthest
    );
    Ok(())
}
