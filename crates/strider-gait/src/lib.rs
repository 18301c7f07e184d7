//! Leg stepping and tripod gait coordination for the Strider walker.
//!
//! A [`Leg`] owns one IK chain and its step state machine: it interpolates
//! a foot between step endpoints with eased, lifted motion and re-solves the
//! chain every tick. The [`GaitController`] decides which legs may begin a
//! new step, keeping enough feet planted for static stability.
//!
//! # Control flow, once per tick
//!
//! ```text
//! GaitController::update
//!   ├── per leg: deviation from ideal foothold > threshold?  can_step?
//!   │     └── Leg::step_to(led foothold)
//!   └── per leg: Leg::update
//!         ├── advance step interpolation
//!         └── FabrikSolver::solve(chain, target)
//! ```
//!
//! Legs share no mutable state; coordination is the read-only
//! `is_moving` inspection performed by the controller.

pub mod controller;
pub mod leg;

pub use controller::GaitController;
pub use leg::Leg;
