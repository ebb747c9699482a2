//! Confidence jitter sources
//!
//! Jitter is injected as an explicit capability rather than read from
//! ambient global randomness, so the pipeline stays deterministic in tests
//! and independent across concurrent calls. Each call draws exactly one
//! value per classification.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::confidence::JITTER_RANGE;

/// Source of the per-classification confidence jitter term
pub trait JitterSource {
    /// Draw one jitter value, expected in [-2.0, +2.0]
    fn draw(&mut self) -> f32;
}

/// No jitter: always returns 0.0
///
/// This is the default; the confidence score is then exactly the
/// deterministic baseline.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn draw(&mut self) -> f32 {
        0.0
    }
}

/// Uniform jitter in [-2.0, +2.0] backed by any `rand` RNG
#[derive(Debug, Clone)]
pub struct UniformJitter<R: Rng> {
    rng: R,
}

impl<R: Rng> UniformJitter<R> {
    /// Wrap an RNG as a jitter source
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl UniformJitter<StdRng> {
    /// Seeded jitter source for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> JitterSource for UniformJitter<R> {
    fn draw(&mut self) -> f32 {
        self.rng.gen_range(-JITTER_RANGE..=JITTER_RANGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_jitter_is_zero() {
        let mut source = NoJitter;
        for _ in 0..5 {
            assert_eq!(source.draw(), 0.0);
        }
    }

    #[test]
    fn test_uniform_jitter_bounded() {
        let mut source = UniformJitter::seeded(7);
        for _ in 0..1000 {
            let value = source.draw();
            assert!((-JITTER_RANGE..=JITTER_RANGE).contains(&value));
        }
    }

    #[test]
    fn test_seeded_jitter_reproducible() {
        let mut a = UniformJitter::seeded(42);
        let mut b = UniformJitter::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.draw(), b.draw());
        }
    }
}
