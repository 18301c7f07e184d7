//! Collaborator seams: body snapshot, terrain query, and step effects.
//!
//! The walker core never owns body motion, terrain shape, or audiovisual
//! feedback. It reads a [`BodyState`] each tick, queries a [`Terrain`] for
//! footholds, and notifies a [`StepEffects`] sink when a foot lands. All
//! three are explicit parameters rather than ambient globals.

use nalgebra::{Point2, Vector2};

/// Per-tick snapshot of the walker body.
///
/// Read-only from the gait subsystem's point of view: nothing here mutates
/// the body, it only reacts to where the body already is and how fast it is
/// going.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    /// Body center in world space.
    pub position: Point2<f32>,
    /// Body velocity per tick, used for anticipatory foot placement.
    pub velocity: Vector2<f32>,
}

impl BodyState {
    /// A stationary body at `position`.
    #[must_use]
    pub fn at(position: Point2<f32>) -> Self {
        Self {
            position,
            velocity: Vector2::zeros(),
        }
    }

    /// A body at `position` moving with `velocity` per tick.
    #[must_use]
    pub const fn moving(position: Point2<f32>, velocity: Vector2<f32>) -> Self {
        Self { position, velocity }
    }
}

/// Height-field terrain query.
///
/// Must be pure: the gait controller may sample the same x several times per
/// tick (ideal foothold and led foothold) and expects consistent answers.
pub trait Terrain {
    /// Ground height (y, screen-down) at horizontal position `x`.
    fn height(&self, x: f32) -> f32;
}

/// Flat ground at a fixed height.
#[derive(Debug, Clone, Copy)]
pub struct FlatTerrain(pub f32);

impl Terrain for FlatTerrain {
    fn height(&self, _x: f32) -> f32 {
        self.0
    }
}

/// Smooth rolling terrain: `base + amplitude * sin(x * 2pi / wavelength)`.
#[derive(Debug, Clone, Copy)]
pub struct SineTerrain {
    pub base: f32,
    pub amplitude: f32,
    pub wavelength: f32,
}

impl Terrain for SineTerrain {
    fn height(&self, x: f32) -> f32 {
        self.amplitude
            .mul_add((x * std::f32::consts::TAU / self.wavelength).sin(), self.base)
    }
}

/// Sink for step side effects (particles, audio, telemetry).
///
/// Injected into the update loop; the walker fires [`footfall`] exactly once
/// per completed step, at the landing point. Solver behavior must not depend
/// on what the sink does.
///
/// [`footfall`]: StepEffects::footfall
pub trait StepEffects {
    /// A foot finished its step and landed at `position`.
    fn footfall(&mut self, position: Point2<f32>);
}

/// Effects sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEffects;

impl StepEffects for NullEffects {
    fn footfall(&mut self, _position: Point2<f32>) {}
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
