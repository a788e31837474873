use core::ops::RangeInclusive;

use rand::Rng;
use tracing::trace;

use crate::config::FixtureConfig;
use crate::Value;

/// Supplies the value stored under key `(index, index)`.
///
/// Indices arrive in strictly ascending order starting at zero, once each.
/// Any `FnMut(u32) -> Value` is a source, which lets a test script the exact
/// sequence it wants:
///
/// ```
/// use pairmax_fixture::{Fixture, ValueSource};
///
/// let mut even_sentinels = |i: u32| if i % 2 == 0 { 99 } else { i };
/// assert_eq!(even_sentinels.value_at(4), 99);
///
/// let fixture = Fixture::build(20, even_sentinels, |_, _| {});
/// assert_eq!(fixture.max_pair(), Some((0, 0)));
/// ```
pub trait ValueSource {
    fn value_at(&mut self, index: u32) -> Value;
}

impl<F> ValueSource for F
where
    F: FnMut(u32) -> Value,
{
    fn value_at(&mut self, index: u32) -> Value {
        self(index)
    }
}

/// The production source: the sentinel with a fixed probability, otherwise a
/// uniform integer from an inclusive range.
///
/// The random generator is borrowed, so a caller that seeds it controls the
/// whole fixture.
///
/// # Examples
///
/// ```
/// use pairmax_fixture::{BiasedValues, FixtureConfig, ValueSource};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let config = FixtureConfig::default();
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut values = BiasedValues::new(&mut rng, &config);
///
/// let value = values.value_at(0);
/// assert!(config.admits(value));
/// ```
#[derive(Debug)]
pub struct BiasedValues<'a, R: ?Sized> {
    rng: &'a mut R,
    sentinel: Value,
    probability: f64,
    uniform: RangeInclusive<Value>,
}

impl<'a, R: Rng + ?Sized> BiasedValues<'a, R> {
    /// Creates a source drawing from `rng`.
    ///
    /// The configuration is not validated here; an empty uniform range panics
    /// on the first non-sentinel draw. [`generate_into`](crate::generate_into)
    /// validates before building a source.
    pub fn new(rng: &'a mut R, config: &FixtureConfig) -> Self {
        BiasedValues {
            rng,
            sentinel: config.sentinel(),
            probability: config.sentinel_probability(),
            uniform: config.value_range().clone(),
        }
    }
}

impl<R: Rng + ?Sized> ValueSource for BiasedValues<'_, R> {
    fn value_at(&mut self, index: u32) -> Value {
        let r: f64 = self.rng.random();
        let value = if r < self.probability {
            self.sentinel
        } else {
            self.rng.random_range(self.uniform.clone())
        };
        trace!(index, r, value, "drew fixture value");
        value
    }
}
