//! Shared test fixtures for strider crates.
//!
//! Deterministic RNG setup and synthetic terrain used by gait integration
//! tests and the occasional unit test.

pub mod rng;
pub mod terrain;

pub use rng::seeded_rng;
pub use terrain::JitteredTerrain;
