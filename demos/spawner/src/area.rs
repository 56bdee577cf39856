//! Rectangular spawn area and the entities placed in it.

use rand::Rng;
use rand::rngs::SmallRng;

use pace_core::CategoryId;

/// Axis-aligned rectangle centred on `(cx, cy)`.
pub struct SpawnArea {
    pub cx:     f64,
    pub cy:     f64,
    pub width:  f64,
    pub height: f64,
}

impl SpawnArea {
    /// Uniform random point inside the area.
    pub fn random_point(&self, rng: &mut SmallRng) -> (f64, f64) {
        let hw = self.width / 2.0;
        let hh = self.height / 2.0;
        (
            self.cx + rng.gen_range(-hw..=hw),
            self.cy + rng.gen_range(-hh..=hh),
        )
    }
}

/// A spawned entity.  `age` counts heartbeat pulses survived.
pub struct Entity {
    pub category: CategoryId,
    pub x:        f64,
    pub y:        f64,
    pub age:      u32,
}
