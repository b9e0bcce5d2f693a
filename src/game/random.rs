use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of randomness for the secret and for effect parameters.
pub trait RandomSource {
    /// Uniform integer in `[min, max]`, both ends inclusive.
    ///
    /// Returns `min` when the range is empty or a single value.
    fn random_number(&mut self, min: i64, max: i64) -> i64;

    /// Uniform float in `[0, 1)`.
    fn random_unit(&mut self) -> f64;
}

impl RandomSource for SmallRng {
    fn random_number(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        self.random_range(min..=max)
    }

    fn random_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Deterministic generator when a seed is given, OS entropy otherwise.
pub fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    }
}
