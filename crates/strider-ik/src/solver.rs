//! FABRIK (Forward And Backward Reaching Inverse Kinematics) solver.
//!
//! Iteratively repositions a chain's joints so the end effector reaches a
//! target while keeping every segment at its fixed length. Length
//! preservation is exact renormalization along the direction to the
//! neighboring joint; no forces, no angular limits.

use nalgebra::{Point2, Unit, Vector2};

use strider_core::config::SolverConfig;
use strider_core::math;

use crate::chain::LegChain;

/// Outcome classification for a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// Chain has fewer than two joints; nothing was touched.
    Degenerate,
    /// Target farther than the chain's total length; the chain was laid out
    /// fully extended toward the target (the "reaching" fallback pose).
    Unreachable,
    /// End effector within tolerance of the target.
    Converged,
    /// Iteration budget exhausted before reaching tolerance. The chain is in
    /// a valid pose; check [`SolveReport::error`] for how close it got.
    IterationLimit,
}

impl SolveStatus {
    /// True only when the end effector actually reached the target.
    #[must_use]
    pub const fn reached(self) -> bool {
        matches!(self, Self::Converged)
    }
}

/// Result of a solve: status plus the iteration count and the *actual*
/// final end-effector error, so callers can tell convergence apart from
/// running out of iterations close enough to not matter visually.
#[derive(Debug, Clone, Copy)]
pub struct SolveReport {
    pub status: SolveStatus,
    /// Forward/backward pass pairs performed.
    pub iterations: u32,
    /// Final distance from end effector to target.
    pub error: f32,
}

/// Stateless FABRIK solver. One instance serves any number of chains.
#[derive(Debug, Clone)]
pub struct FabrikSolver {
    config: SolverConfig,
}

impl FabrikSolver {
    /// Create a solver with the given configuration.
    #[must_use]
    pub const fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(SolverConfig::default())
    }

    /// Solve `chain` toward `target`, mutating the joints in place.
    ///
    /// The root joint is pinned: after the call it equals its pre-call value
    /// exactly, whatever the target. A degenerate chain (fewer than two
    /// joints) is left untouched.
    pub fn solve(&self, chain: &mut LegChain, target: Point2<f32>) -> SolveReport {
        if chain.joints().len() < 2 {
            return SolveReport {
                status: SolveStatus::Degenerate,
                iterations: 0,
                error: 0.0,
            };
        }

        let root = chain.root();

        if nalgebra::distance(&root, &target) > chain.total_length() {
            stretch_toward(chain, target);
            let error = nalgebra::distance(&chain.end(), &target);
            return SolveReport {
                status: SolveStatus::Unreachable,
                iterations: 0,
                error,
            };
        }

        let mut error = nalgebra::distance(&chain.end(), &target);
        for iteration in 0..self.config.max_iterations {
            if error <= self.config.tolerance {
                return SolveReport {
                    status: SolveStatus::Converged,
                    iterations: iteration,
                    error,
                };
            }

            forward_pass(chain, target);
            backward_pass(chain, root);
            error = nalgebra::distance(&chain.end(), &target);
        }

        let status = if error <= self.config.tolerance {
            SolveStatus::Converged
        } else {
            SolveStatus::IterationLimit
        };
        SolveReport {
            status,
            iterations: self.config.max_iterations,
            error,
        }
    }
}

/// Reposition `toward`'s copy at exactly `len` from `from`, preserving the
/// current direction. Coincident points fall back to the +x axis so the
/// pose stays finite instead of going NaN.
fn place(from: Point2<f32>, toward: Point2<f32>, len: f32) -> Point2<f32> {
    let dir = math::direction(&from, &toward).map_or_else(Vector2::x, Unit::into_inner);
    from + dir * len
}

/// Tip-to-root pass: pin the end effector to the target, then walk back
/// re-fixing each segment length along the direction to the old joint.
fn forward_pass(chain: &mut LegChain, target: Point2<f32>) {
    let (joints, lengths) = chain.parts_mut();
    let last = joints.len() - 1;
    joints[last] = target;
    for i in (0..last).rev() {
        joints[i] = place(joints[i + 1], joints[i], lengths[i]);
    }
}

/// Root-to-tip pass: pin the root back exactly, then walk forward re-fixing
/// each segment length along the direction to the old joint.
fn backward_pass(chain: &mut LegChain, root: Point2<f32>) {
    let (joints, lengths) = chain.parts_mut();
    let last = joints.len() - 1;
    joints[0] = root;
    for i in 0..last {
        joints[i + 1] = place(joints[i], joints[i + 1], lengths[i]);
    }
}

/// Lay the chain out in a straight, fully extended line from the root toward
/// an out-of-reach target.
fn stretch_toward(chain: &mut LegChain, target: Point2<f32>) {
    let root = chain.root();
    let dir = math::direction(&root, &target).map_or_else(Vector2::x, Unit::into_inner);
    let (joints, lengths) = chain.parts_mut();
    let last = joints.len() - 1;
    for i in 0..last {
        joints[i + 1] = joints[i] + dir * lengths[i];
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
