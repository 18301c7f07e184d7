//! Headless walker simulation.
//!
//! Drives a multi-legged walker across rolling terrain at constant body
//! speed and prints per-tick telemetry: body position, which legs are
//! airborne, and the worst end-effector error the solver reported. Ends
//! with a footfall count and the maximum solve error seen.
//!
//! Run: `cargo run -p strider-demos --bin walker_sim -- --ticks 600 --speed 4`

use std::path::PathBuf;

use clap::Parser;
use nalgebra::{Point2, Vector2};

use strider_core::config::WalkerConfig;
use strider_core::types::{BodyState, SineTerrain, StepEffects};
use strider_gait::{GaitController, Leg};
use strider_ik::FabrikSolver;

#[derive(Parser)]
#[command(about = "Headless Strider walker simulation")]
struct Args {
    /// Simulation ticks to run.
    #[arg(long, default_value_t = 600)]
    ticks: u32,

    /// Number of legs (in a line across the body).
    #[arg(long, default_value_t = 6)]
    legs: usize,

    /// Body speed in world units per tick.
    #[arg(long, default_value_t = 4.0)]
    speed: f32,

    /// Spacing between neighboring leg roots.
    #[arg(long, default_value_t = 24.0)]
    spacing: f32,

    /// Optional TOML config overriding the built-in tuning.
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Counts footfalls for the end-of-run summary.
#[derive(Default)]
struct FootfallCounter {
    count: u32,
}

impl StepEffects for FootfallCounter {
    fn footfall(&mut self, _position: Point2<f32>) {
        self.count += 1;
    }
}

fn main() {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => WalkerConfig::from_path(path).expect("failed to load config"),
        None => WalkerConfig::default(),
    };

    let terrain = SineTerrain {
        base: 130.0,
        amplitude: 14.0,
        wavelength: 320.0,
    };
    let solver = FabrikSolver::new(config.solver);

    let mut body = BodyState::moving(Point2::new(0.0, 0.0), Vector2::new(args.speed, 0.0));
    let legs = Leg::line(args.legs, args.spacing, &body, &config.leg);
    let mut controller = GaitController::new(legs, config.gait);

    println!(
        "=== Strider walker: {} legs, {} ticks, speed {} ===\n",
        args.legs, args.ticks, args.speed
    );

    let mut effects = FootfallCounter::default();
    let mut max_error = 0.0f32;

    for tick in 0..args.ticks {
        body.position.x += args.speed;
        let worst = controller.update(&body, &terrain, &solver, &mut effects);
        max_error = max_error.max(worst);

        if tick % 25 == 0 {
            let airborne: String = controller
                .legs()
                .iter()
                .map(|leg| if leg.is_moving() { '^' } else { '.' })
                .collect();
            println!(
                "tick {tick:>5}  body.x {:>8.1}  legs [{airborne}]  worst err {worst:.3}",
                body.position.x
            );
        }
    }

    println!(
        "\nDone: {} footfalls over {} ticks, max solve error {:.3}",
        effects.count, args.ticks, max_error
    );
}
