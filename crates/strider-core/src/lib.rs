//! Core types, traits, configuration, and errors for the Strider walker.
//!
//! Everything here is shared by the solver (`strider-ik`) and gait
//! (`strider-gait`) crates: the 2D math helpers, the collaborator traits
//! ([`Terrain`], [`StepEffects`]), the per-tick [`BodyState`] snapshot, and
//! the TOML-backed [`WalkerConfig`].
//!
//! Coordinate convention is screen-space: +x right, +y down. Terrain heights
//! are y values; a lifted foot has a *smaller* y than a planted one.

pub mod config;
pub mod error;
pub mod math;
pub mod types;

pub use config::{GaitConfig, LegConfig, SolverConfig, WalkerConfig};
pub use error::{ConfigError, StriderError};
pub use types::{BodyState, FlatTerrain, NullEffects, SineTerrain, StepEffects, Terrain};
