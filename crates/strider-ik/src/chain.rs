//! Joint chain for a single leg.
//!
//! A [`LegChain`] is an ordered list of world-space joint positions with a
//! parallel list of fixed segment lengths: `joints[0]` is the root (the hip
//! attachment, supplied externally every tick) and the last joint is the end
//! effector (the foot). Segment lengths are nominal; the chain itself never
//! enforces them at rest — the solver restores them during each solve.

use nalgebra::Point2;

/// A leg's kinematic chain: `lengths.len() + 1` joints, root first.
///
/// Allocated once at leg construction and mutated in place thereafter; the
/// joint vector is never reallocated.
#[derive(Debug, Clone)]
pub struct LegChain {
    joints: Vec<Point2<f32>>,
    lengths: Vec<f32>,
    total_length: f32,
}

impl LegChain {
    /// Build a chain hanging straight down (+y) from `root`, one joint per
    /// segment.
    #[must_use]
    pub fn hanging(root: Point2<f32>, lengths: &[f32]) -> Self {
        let mut joints = Vec::with_capacity(lengths.len() + 1);
        joints.push(root);
        let mut y = root.y;
        for &len in lengths {
            y += len;
            joints.push(Point2::new(root.x, y));
        }
        Self {
            joints,
            lengths: lengths.to_vec(),
            total_length: lengths.iter().sum(),
        }
    }

    /// Joint positions, root first.
    #[must_use]
    pub fn joints(&self) -> &[Point2<f32>] {
        &self.joints
    }

    /// Split borrow for the solver: mutable joints, shared lengths.
    pub(crate) fn parts_mut(&mut self) -> (&mut [Point2<f32>], &[f32]) {
        (&mut self.joints, &self.lengths)
    }

    /// Nominal segment lengths (`joints().len() - 1` entries).
    #[must_use]
    pub fn lengths(&self) -> &[f32] {
        &self.lengths
    }

    /// Number of segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.lengths.len()
    }

    /// The root joint (hip attachment).
    #[must_use]
    pub fn root(&self) -> Point2<f32> {
        self.joints[0]
    }

    /// Pin the root to a new position. The rest of the chain is left where
    /// it is; the next solve pulls it back into shape.
    pub fn set_root(&mut self, root: Point2<f32>) {
        self.joints[0] = root;
    }

    /// The end effector (foot).
    #[must_use]
    pub fn end(&self) -> Point2<f32> {
        self.joints[self.joints.len() - 1]
    }

    /// Sum of all segment lengths (cached).
    #[must_use]
    pub const fn total_length(&self) -> f32 {
        self.total_length
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
