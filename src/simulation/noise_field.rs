//! Seeded 2D noise with a spawn cursor
//!
//! `NoiseField` wraps a Perlin generator and remaps raw samples from
//! [-1, 1] to [0, 1). The field keeps a cursor along x that advances once
//! per spawn, so consecutive launches stay correlated while distinct
//! quantities read distinct lanes (fixed y offsets) of the same field.

use noise::{NoiseFn, Perlin};

#[derive(Debug, Clone)]
pub struct NoiseField {
    perlin: Perlin,
    cursor: f64,
    step: f64,
}

impl NoiseField {
    pub fn new(seed: u32, step: f64) -> Self {
        Self {
            perlin: Perlin::new(seed),
            cursor: 0.0,
            step,
        }
    }

    /// Sample at (x, y), remapped to the half-open unit interval.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let n = self.perlin.get([x, y]);
        // Raw Perlin output is nominally [-1, 1]; keep the result in [0, 1).
        (n * 0.5 + 0.5).clamp(0.0, 1.0 - f64::EPSILON)
    }

    /// Sample the lane at height `lane` under the current cursor.
    pub fn lane(&self, lane: f64) -> f64 {
        self.sample(self.cursor, lane)
    }

    /// Move the cursor one spawn step along x.
    pub fn advance(&mut self) {
        self.cursor += self.step;
    }

    pub fn cursor(&self) -> f64 {
        self.cursor
    }
}
