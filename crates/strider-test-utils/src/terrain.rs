//! Synthetic jittered terrain for gait stress tests.

use rand::Rng;

use strider_core::Terrain;

use crate::rng::seeded_rng;

const TABLE_SIZE: usize = 64;

/// Piecewise-linear noise terrain, deterministic per seed.
///
/// Heights are sampled on a fixed grid of `cell_width` and linearly
/// interpolated between grid points, so the field is continuous but rough
/// enough to force every leg off its ideal foothold. The grid wraps after
/// 64 cells, which is plenty for the runs the gait tests perform.
#[derive(Debug, Clone)]
pub struct JitteredTerrain {
    base: f32,
    amplitude: f32,
    cell_width: f32,
    table: [f32; TABLE_SIZE],
}

impl JitteredTerrain {
    pub fn new(seed: u64, base: f32, amplitude: f32, cell_width: f32) -> Self {
        let mut rng = seeded_rng(seed);
        let mut table = [0.0f32; TABLE_SIZE];
        for slot in &mut table {
            *slot = rng.gen_range(-1.0..=1.0);
        }
        Self {
            base,
            amplitude,
            cell_width,
            table,
        }
    }
}

impl Terrain for JitteredTerrain {
    fn height(&self, x: f32) -> f32 {
        let cell = (x / self.cell_width).floor();
        let frac = x / self.cell_width - cell;
        let i = (cell as i64).rem_euclid(TABLE_SIZE as i64) as usize;
        let j = (i + 1) % TABLE_SIZE;
        let jitter = self.table[i] + (self.table[j] - self.table[i]) * frac;
        self.amplitude.mul_add(jitter, self.base)
    }
}
