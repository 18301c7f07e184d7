//! FABRIK inverse kinematics for 2D leg chains.
//!
//! Provides the joint-position [`LegChain`] and the iterative
//! [`FabrikSolver`] that repositions a chain's joints so its end effector
//! reaches (or stretches toward) a target, preserving segment lengths by
//! exact renormalization rather than springs or forces.
//!
//! # Architecture
//!
//! ```text
//! LegChain (joints + lengths) ──► FabrikSolver ──► SolveReport
//! ```
//!
//! The chain is allocated once per leg and mutated in place on every solve.
//! The solver carries no per-chain state, so one solver instance serves any
//! number of legs.

pub mod chain;
pub mod solver;

pub use chain::LegChain;
pub use solver::{FabrikSolver, SolveReport, SolveStatus};
