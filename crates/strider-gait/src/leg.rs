//! A single leg: IK chain plus step state machine.
//!
//! While a step is in flight the foot target is an eased interpolation
//! between the step's endpoints with a sinusoidal vertical lift, peaking at
//! mid-step and zero at both ends so the foot leaves and lands without a
//! velocity jump. A planted foot keeps its last target and still re-solves
//! every tick, which costs nothing once converged and shrugs off any outside
//! perturbation of intermediate joints.

use nalgebra::{Point2, Vector2};

use strider_core::config::LegConfig;
use strider_core::math::smoothstep;
use strider_core::types::{BodyState, StepEffects};
use strider_ik::{FabrikSolver, LegChain, SolveReport};

/// One leg of the walker.
#[derive(Debug, Clone)]
pub struct Leg {
    /// Fixed root offset from the body center.
    offset: Vector2<f32>,
    chain: LegChain,
    /// Current desired end-effector position.
    target: Point2<f32>,
    step_start: Point2<f32>,
    step_end: Point2<f32>,
    moving: bool,
    /// Step interpolation parameter in [0, 1], advanced by `step_speed`.
    progress: f32,
    step_speed: f32,
    lift_height: f32,
}

impl Leg {
    /// Build a leg whose chain hangs straight down from `body.position + offset`.
    ///
    /// The initial target is the initial foot position, so a freshly built
    /// leg is planted and in steady state.
    #[must_use]
    pub fn new(offset: Vector2<f32>, body: &BodyState, config: &LegConfig) -> Self {
        let chain = LegChain::hanging(body.position + offset, &config.segment_lengths);
        let foot = chain.end();
        Self {
            offset,
            chain,
            target: foot,
            step_start: foot,
            step_end: foot,
            moving: false,
            progress: 0.0,
            step_speed: config.step_speed,
            lift_height: config.lift_height,
        }
    }

    /// Build `count` legs in a line across the body: roots `spacing` apart,
    /// centered on the body origin. The standard hexapod arrangement the
    /// gait controller's tripod grouping assumes.
    #[must_use]
    pub fn line(count: usize, spacing: f32, body: &BodyState, config: &LegConfig) -> Vec<Self> {
        (0..count)
            .map(|i| {
                let x = (i as f32 - (count as f32 - 1.0) / 2.0) * spacing;
                Self::new(Vector2::new(x, 0.0), body, config)
            })
            .collect()
    }

    /// Begin a step toward `new_target`.
    ///
    /// Dropped (no-op) while a step is already in flight: at most one step
    /// per leg at a time, and a committed step always runs to completion.
    pub fn step_to(&mut self, new_target: Point2<f32>) {
        if self.moving {
            return;
        }
        self.step_start = self.target;
        self.step_end = new_target;
        self.moving = true;
        self.progress = 0.0;
    }

    /// Per-tick update: snap the root to the body, advance the step
    /// interpolation, and re-solve the chain against the current target.
    pub fn update(
        &mut self,
        body: &BodyState,
        solver: &FabrikSolver,
        effects: &mut dyn StepEffects,
    ) -> SolveReport {
        self.chain.set_root(body.position + self.offset);

        if self.moving {
            self.progress += self.step_speed;
            if self.progress >= 1.0 {
                self.progress = 1.0;
                self.moving = false;
                // Land on the planned endpoint exactly, no interpolation residue.
                self.target = self.step_end;
                effects.footfall(self.step_end);
            } else {
                let t = smoothstep(self.progress);
                let along = self.step_start + (self.step_end - self.step_start) * t;
                let lift = (t * std::f32::consts::PI).sin() * self.lift_height;
                self.target = Point2::new(along.x, along.y - lift);
            }
        }

        solver.solve(&mut self.chain, self.target)
    }

    /// Whether a step is in flight. Read by the gait controller and renderers.
    #[must_use]
    pub const fn is_moving(&self) -> bool {
        self.moving
    }

    /// Current end-effector target.
    #[must_use]
    pub const fn target(&self) -> Point2<f32> {
        self.target
    }

    /// Landing point of the current (or last completed) step.
    #[must_use]
    pub const fn step_end(&self) -> Point2<f32> {
        self.step_end
    }

    /// Root offset from the body center.
    #[must_use]
    pub const fn offset(&self) -> Vector2<f32> {
        self.offset
    }

    /// The joint chain, for rendering.
    #[must_use]
    pub const fn chain(&self) -> &LegChain {
        &self.chain
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
