//! Random sources for the bounce and block rolls

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Source of uniform draws in `[0, 1)`
pub trait Sampler: Send + Sync {
    fn sample(&self) -> f64;
}

/// Draws from the thread-local generator
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSampler;

impl Sampler for ThreadSampler {
    fn sample(&self) -> f64 {
        rand::random::<f64>()
    }
}

/// Reproducible draws from a seeded generator
#[derive(Debug)]
pub struct SeededSampler {
    rng: Mutex<StdRng>,
}

impl SeededSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Sampler for SeededSampler {
    fn sample(&self) -> f64 {
        self.rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .random::<f64>()
    }
}

/// Always returns the same draw
#[derive(Debug, Clone, Copy)]
pub struct FixedSampler(f64);

impl FixedSampler {
    /// Values outside `[0, 1)` are clamped into it; NaN becomes 0
    pub fn new(value: f64) -> Self {
        let value = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0 - f64::EPSILON)
        };
        Self(value)
    }
}

impl Sampler for FixedSampler {
    fn sample(&self) -> f64 {
        self.0
    }
}
