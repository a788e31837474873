use core::ops::RangeInclusive;

use crate::error::ConfigError;
use crate::Value;

/// Number of `(i, i)` entries in a default fixture.
pub const DEFAULT_ENTRIES: u32 = 20;

/// The value drawn on the biased branch. It sits well above the uniform range
/// so that every sentinel ties for the maximum.
pub const SENTINEL_VALUE: Value = 99;

/// Probability of drawing [`SENTINEL_VALUE`] instead of a uniform value.
pub const SENTINEL_PROBABILITY: f64 = 0.25;

/// Smallest value of the uniform branch (inclusive).
pub const UNIFORM_MIN: Value = 0;

/// Largest value of the uniform branch (inclusive).
pub const UNIFORM_MAX: Value = 20;

/// Parameters of a generated fixture.
///
/// The defaults reproduce the canonical fixture: 20 entries, a 25% chance of
/// the sentinel `99`, and otherwise a uniform value in `0..=20`.
///
/// # Examples
///
/// ```
/// use pairmax_fixture::FixtureConfig;
///
/// let config = FixtureConfig::default()
///     .with_entries(8)
///     .with_sentinel_probability(0.5);
///
/// assert_eq!(config.entries(), 8);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FixtureConfig {
    entries: u32,
    sentinel: Value,
    sentinel_probability: f64,
    uniform: RangeInclusive<Value>,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        FixtureConfig {
            entries: DEFAULT_ENTRIES,
            sentinel: SENTINEL_VALUE,
            sentinel_probability: SENTINEL_PROBABILITY,
            uniform: UNIFORM_MIN..=UNIFORM_MAX,
        }
    }
}

impl FixtureConfig {
    #[must_use]
    pub fn with_entries(mut self, entries: u32) -> Self {
        self.entries = entries;
        self
    }

    #[must_use]
    pub fn with_sentinel(mut self, sentinel: Value) -> Self {
        self.sentinel = sentinel;
        self
    }

    #[must_use]
    pub fn with_sentinel_probability(mut self, probability: f64) -> Self {
        self.sentinel_probability = probability;
        self
    }

    #[must_use]
    pub fn with_value_range(mut self, range: RangeInclusive<Value>) -> Self {
        self.uniform = range;
        self
    }

    #[must_use]
    pub fn entries(&self) -> u32 {
        self.entries
    }

    #[must_use]
    pub fn sentinel(&self) -> Value {
        self.sentinel
    }

    #[must_use]
    pub fn sentinel_probability(&self) -> f64 {
        self.sentinel_probability
    }

    #[must_use]
    pub fn value_range(&self) -> &RangeInclusive<Value> {
        &self.uniform
    }

    /// Checks that values can actually be drawn with this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Probability`] if the sentinel probability is not
    /// a finite number in `[0, 1]`, and [`ConfigError::EmptyRange`] if the
    /// uniform range contains no values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = self.sentinel_probability;
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::Probability(p));
        }
        if self.uniform.is_empty() {
            return Err(ConfigError::EmptyRange {
                start: *self.uniform.start(),
                end: *self.uniform.end(),
            });
        }
        Ok(())
    }

    /// Returns `true` if `value` can be produced under this configuration.
    #[must_use]
    pub fn admits(&self, value: Value) -> bool {
        value == self.sentinel || self.uniform.contains(&value)
    }
}
