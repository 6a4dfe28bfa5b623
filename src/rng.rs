use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform floats in `[0, 1)` used for food placement.
///
/// Any `FnMut() -> f64` closure is a source, so tests can script exact
/// draws. Values outside `[0, 1)` are tolerated; callers clamp them.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64,
{
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Adapts any [`rand::Rng`] into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Creates a reproducible source from a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates a source seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}

/// Maps a unit draw onto an index in `0..len`.
///
/// Equivalent to `floor(unit * len)` for well-formed draws; NaN maps to 0 and
/// out-of-range draws are clamped to the nearest valid index.
#[must_use]
pub fn scale_to_index(unit: f64, len: usize) -> usize {
    debug_assert!(len > 0);

    if unit.is_nan() || unit <= 0.0 {
        return 0;
    }

    let scaled = (unit * len as f64).floor();
    if scaled >= len as f64 {
        len - 1
    } else {
        scaled as usize
    }
}
