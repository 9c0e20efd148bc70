use crate::{Board, InvalidParameter};
use anyhow::Result;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

impl Board {
    /// Creates a board where every cell is independently alive with probability `density`.
    ///
    /// # Arguments
    ///
    /// * `height`, `width` - Dimensions of the board, both at least 1.
    /// * `density` - Probability of a cell being alive, in `[0.0, 1.0]`.
    /// * `seed` - Optional seed for the random number generator.
    ///   If None, seeds from the OS.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameter::Density`] if `density` is out of range
    /// and an error if a dimension is zero.
    pub fn random(height: usize, width: usize, density: f64, seed: Option<u64>) -> Result<Self> {
        if !(0.0..=1.0).contains(&density) {
            return Err(InvalidParameter::Density(density).into());
        }
        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_os_rng()
        };
        Self::from_fn(height, width, |_, _| rng.random_bool(density))
    }
}
