//! Walker configuration: solver, leg, and gait parameters.
//!
//! All values have sensible defaults (the tuning the walker shipped with),
//! so a TOML file only needs to name what it overrides. [`WalkerConfig::validate`]
//! rejects values that would wedge the step state machine or the solver.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_max_iterations() -> u32 {
    15
}
const fn default_tolerance() -> f32 {
    0.1
}
const fn default_step_speed() -> f32 {
    0.1
}
const fn default_lift_height() -> f32 {
    18.0
}
fn default_segment_lengths() -> Vec<f32> {
    vec![40.0, 60.0, 60.0]
}
const fn default_step_threshold() -> f32 {
    60.0
}
const fn default_lead_gain() -> f32 {
    8.0
}

// ---------------------------------------------------------------------------
// Config sections
// ---------------------------------------------------------------------------

/// FABRIK solver parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Maximum forward/backward pass pairs per solve (default: 15).
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// End-effector distance at which a solve counts as converged (default: 0.1).
    #[serde(default = "default_tolerance")]
    pub tolerance: f32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
            tolerance: default_tolerance(),
        }
    }
}

/// Per-leg step timing and chain geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegConfig {
    /// Step progress advanced per tick; 0.1 means a step spans ~10 ticks.
    #[serde(default = "default_step_speed")]
    pub step_speed: f32,

    /// Peak vertical foot lift at mid-step, in world units.
    #[serde(default = "default_lift_height")]
    pub lift_height: f32,

    /// Segment lengths from hip to foot (default: [40, 60, 60]).
    #[serde(default = "default_segment_lengths")]
    pub segment_lengths: Vec<f32>,
}

impl Default for LegConfig {
    fn default() -> Self {
        Self {
            step_speed: default_step_speed(),
            lift_height: default_lift_height(),
            segment_lengths: default_segment_lengths(),
        }
    }
}

/// Gait coordination parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaitConfig {
    /// Foot-to-ideal-foothold deviation that triggers a new step (default: 60).
    #[serde(default = "default_step_threshold")]
    pub step_threshold: f32,

    /// Ticks of body velocity projected ahead when placing a foot.
    /// Compensates for the travel time of the step itself.
    #[serde(default = "default_lead_gain")]
    pub lead_gain: f32,
}

impl Default for GaitConfig {
    fn default() -> Self {
        Self {
            step_threshold: default_step_threshold(),
            lead_gain: default_lead_gain(),
        }
    }
}

// ---------------------------------------------------------------------------
// WalkerConfig
// ---------------------------------------------------------------------------

/// Aggregate configuration for a walker.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WalkerConfig {
    #[serde(default)]
    pub solver: SolverConfig,
    #[serde(default)]
    pub leg: LegConfig,
    #[serde(default)]
    pub gait: GaitConfig,
}

impl WalkerConfig {
    /// Parse a config from a TOML string and validate it.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file and validate it.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Check every parameter against its domain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.solver.max_iterations == 0 {
            return Err(ConfigError::invalid("max_iterations", "must be >= 1"));
        }
        if !(self.solver.tolerance > 0.0) {
            return Err(ConfigError::invalid("tolerance", "must be > 0"));
        }
        if !(self.leg.step_speed > 0.0) {
            return Err(ConfigError::invalid("step_speed", "must be > 0"));
        }
        if self.leg.lift_height < 0.0 {
            return Err(ConfigError::invalid("lift_height", "must be >= 0"));
        }
        if self.leg.segment_lengths.is_empty() {
            return Err(ConfigError::NoSegments);
        }
        if let Some(&bad) = self
            .leg
            .segment_lengths
            .iter()
            .find(|&&len| !(len > 0.0) || !len.is_finite())
        {
            return Err(ConfigError::invalid(
                "segment_lengths",
                format!("all lengths must be positive and finite, got {bad}"),
            ));
        }
        if !(self.gait.step_threshold > 0.0) {
            return Err(ConfigError::invalid("step_threshold", "must be > 0"));
        }
        if self.gait.lead_gain < 0.0 {
            return Err(ConfigError::invalid("lead_gain", "must be >= 0"));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
