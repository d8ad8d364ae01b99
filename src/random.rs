//! Injectable randomness.
//!
//! Every generator in the crate draws through [`RandomSource`] instead of
//! reaching for `rand::thread_rng()` directly, so a fixed seed (or a scripted
//! source in tests) reproduces the exact same stations.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform samples in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Adapter turning any `rand` generator into a [`RandomSource`].
pub struct RngSource<R: Rng>(pub R);

impl RngSource<ChaCha8Rng> {
    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Non-reproducible but `Send`, for state shared across server threads.
    pub fn from_entropy() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Uniform sample in `[low, low + span)`.
pub fn uniform<S: RandomSource + ?Sized>(source: &mut S, low: f64, span: f64) -> f64 {
    low + source.next_unit() * span
}

/// Uniform index into a collection of `len` items. `len` must be non-zero.
pub fn pick_index<S: RandomSource + ?Sized>(source: &mut S, len: usize) -> usize {
    let index = (source.next_unit() * len as f64).floor() as usize;
    index.min(len - 1)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::RandomSource;

    /// Always yields the same value.
    pub struct ConstantSource(pub f64);

    impl RandomSource for ConstantSource {
        fn next_unit(&mut self) -> f64 {
            self.0
        }
    }

    /// Replays a fixed script, cycling when it runs out.
    pub struct ScriptedSource {
        values: Vec<f64>,
        cursor: usize,
    }

    impl ScriptedSource {
        pub fn new(values: &[f64]) -> Self {
            Self {
                values: values.to_vec(),
                cursor: 0,
            }
        }

        pub fn draws(&self) -> usize {
            self.cursor
        }
    }

    impl RandomSource for ScriptedSource {
        fn next_unit(&mut self) -> f64 {
            let value = self.values[self.cursor % self.values.len()];
            self.cursor += 1;
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{ConstantSource, ScriptedSource};
    use super::*;

    #[test]
    fn seeded_sources_repeat() {
        let mut a = RngSource::seeded(7);
        let mut b = RngSource::seeded(7);
        for _ in 0..32 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }

    #[test]
    fn samples_stay_in_unit_interval() {
        let mut source = RngSource::seeded(1);
        for _ in 0..1000 {
            let v = source.next_unit();
            assert!((0.0..1.0).contains(&v));
        }
        let mut entropy = RngSource::from_entropy();
        for _ in 0..1000 {
            assert!((0.0..1.0).contains(&entropy.next_unit()));
        }
    }

    #[test]
    fn uniform_maps_onto_range() {
        assert_eq!(uniform(&mut ConstantSource(0.0), 0.15, 0.20), 0.15);
        assert!((uniform(&mut ConstantSource(0.5), 0.15, 0.20) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn pick_index_never_overflows() {
        assert_eq!(pick_index(&mut ConstantSource(0.0), 39), 0);
        assert_eq!(pick_index(&mut ConstantSource(0.999_999_999), 39), 38);
        // Guards against sources that return exactly 1.0
        assert_eq!(pick_index(&mut ConstantSource(1.0), 39), 38);
    }

    #[test]
    fn scripted_source_cycles() {
        let mut source = ScriptedSource::new(&[0.1, 0.2]);
        assert_eq!(source.next_unit(), 0.1);
        assert_eq!(source.next_unit(), 0.2);
        assert_eq!(source.next_unit(), 0.1);
        assert_eq!(source.draws(), 3);
    }

    #[test]
    fn boxed_sources_forward() {
        let mut boxed: Box<dyn RandomSource + Send> = Box::new(ConstantSource(0.25));
        assert_eq!(uniform(&mut boxed, 0.0, 4.0), 1.0);
    }
}
