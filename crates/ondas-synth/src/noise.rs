//! Noise sequence generation.

use ondas_core::{EngineError, NoiseKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates finite-length noise sequences for a named noise model.
///
/// A fresh sequence is produced on every call; nothing is cached. The
/// source is seedable for deterministic tests, otherwise it seeds itself
/// from OS entropy.
#[derive(Debug, Clone)]
pub struct NoiseSource {
    rng: StdRng,
}

impl Default for NoiseSource {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseSource {
    /// Create a noise source seeded from OS entropy.
    pub fn new() -> Self {
        NoiseSource {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a deterministic noise source from an explicit seed.
    pub fn with_seed(seed: u64) -> Self {
        NoiseSource {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate `len` noise samples for the given model and magnitude.
    ///
    /// - `white`: independent uniform draws from `[0, magnitude)`.
    /// - `brown`: running sum of uniform `[0, 1)` draws divided by `len`,
    ///   scaled by magnitude. A random walk, not normalized to constant
    ///   power.
    /// - `pink`: fails with [`EngineError::NotImplemented`]; failing loudly
    ///   beats handing the caller a stale buffer.
    pub fn generate(
        &mut self,
        kind: NoiseKind,
        magnitude: f64,
        len: usize,
    ) -> Result<Vec<f64>, EngineError> {
        match kind {
            NoiseKind::White => Ok((0..len)
                .map(|_| self.rng.r#gen::<f64>() * magnitude)
                .collect()),
            NoiseKind::Brown => {
                let mut sum = 0.0;
                Ok((0..len)
                    .map(|_| {
                        sum += self.rng.r#gen::<f64>();
                        sum / len as f64 * magnitude
                    })
                    .collect())
            }
            NoiseKind::Pink => Err(EngineError::not_implemented("pink noise")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_noise_stays_in_range() {
        let mut source = NoiseSource::with_seed(7);
        let noise = source.generate(NoiseKind::White, 0.25, 4096).unwrap();
        assert_eq!(noise.len(), 4096);
        for &x in &noise {
            assert!((0.0..0.25).contains(&x), "out of range: {x}");
        }
    }

    #[test]
    fn white_noise_zero_magnitude_is_all_zero() {
        let mut source = NoiseSource::with_seed(7);
        let noise = source.generate(NoiseKind::White, 0.0, 64).unwrap();
        assert!(noise.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn brown_noise_is_a_nondecreasing_walk() {
        let mut source = NoiseSource::with_seed(42);
        let noise = source.generate(NoiseKind::Brown, 1.0, 1000).unwrap();
        for pair in noise.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
        // The final value is the mean of 1000 uniform draws, near 0.5.
        let last = *noise.last().unwrap();
        assert!((last - 0.5).abs() < 0.1, "final walk value {last}");
    }

    #[test]
    fn pink_noise_fails_loudly() {
        let mut source = NoiseSource::with_seed(1);
        assert!(matches!(
            source.generate(NoiseKind::Pink, 0.1, 16),
            Err(EngineError::NotImplemented { feature: "pink noise" })
        ));
    }

    #[test]
    fn same_seed_reproduces_the_sequence() {
        let mut a = NoiseSource::with_seed(1234);
        let mut b = NoiseSource::with_seed(1234);
        let na = a.generate(NoiseKind::White, 1.0, 256).unwrap();
        let nb = b.generate(NoiseKind::White, 1.0, 256).unwrap();
        assert_eq!(na, nb);
    }

    #[test]
    fn successive_calls_differ() {
        let mut source = NoiseSource::with_seed(9);
        let first = source.generate(NoiseKind::White, 1.0, 256).unwrap();
        let second = source.generate(NoiseKind::White, 1.0, 256).unwrap();
        assert_ne!(first, second);
    }
}
