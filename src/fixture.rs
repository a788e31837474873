use core::convert::Infallible;
use core::fmt;
use std::io::{self, Write};

use indexmap::IndexMap;
use rand::Rng;
use tracing::{debug, info};

use crate::config::FixtureConfig;
use crate::error::Error;
use crate::max::max_entry;
use crate::render::{InsertionLine, ResultLine};
use crate::source::{BiasedValues, ValueSource};
use crate::{Pair, Value};

/// An insertion-ordered mapping of `(i, i)` keys to drawn values.
///
/// Keys are inserted for `i` in `0..n`, strictly ascending, so every insertion
/// creates a fresh entry and iteration order equals insertion order.
///
/// The [`Display`](fmt::Display) form is the complete printed fixture: one
/// insertion line per entry followed by the result line (omitted when the
/// fixture is empty).
///
/// # Examples
///
/// ```
/// use pairmax_fixture::Fixture;
///
/// let fixture = Fixture::build(4, |i: u32| [5u32, 99, 99, 3][i as usize], |_, _| {});
///
/// assert_eq!(fixture.len(), 4);
/// assert_eq!(fixture.max_pair(), Some((1, 1)));
/// assert_eq!(
///     fixture.to_string(),
///     "((0,0), 5)\n((1,1), 99)\n((2,2), 99)\n((3,3), 3)\n(1, 1)\n",
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fixture {
    stats: IndexMap<Pair, Value>,
}

impl Fixture {
    /// Builds a fixture of `entries` entries, calling `on_insert` right after
    /// each insertion.
    pub fn build<S, F>(entries: u32, source: S, mut on_insert: F) -> Self
    where
        S: ValueSource,
        F: FnMut(Pair, Value),
    {
        let built = Self::try_build(entries, source, |key, value| {
            on_insert(key, value);
            Ok::<(), Infallible>(())
        });
        match built {
            Ok(fixture) => fixture,
            Err(never) => match never {},
        }
    }

    /// Like [`build`](Self::build), but stops at the first error returned by
    /// `on_insert`.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `on_insert`. Entries inserted so far
    /// are discarded.
    pub fn try_build<S, F, E>(entries: u32, mut source: S, mut on_insert: F) -> Result<Self, E>
    where
        S: ValueSource,
        F: FnMut(Pair, Value) -> Result<(), E>,
    {
        let mut stats = IndexMap::with_capacity(entries as usize);
        for i in 0..entries {
            let key = (i, i);
            let value = source.value_at(i);
            let previous = stats.insert(key, value);
            debug_assert!(previous.is_none(), "key {key:?} inserted twice");
            debug!(index = i, value, "inserted fixture entry");
            on_insert(key, value)?;
        }
        Ok(Fixture { stats })
    }

    /// The underlying ordered mapping.
    #[must_use]
    pub fn stats(&self) -> &IndexMap<Pair, Value> {
        &self.stats
    }

    #[must_use]
    pub fn into_stats(self) -> IndexMap<Pair, Value> {
        self.stats
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Pair, Value> {
        self.stats.iter()
    }

    /// The earliest-inserted entry holding the maximum value.
    #[must_use]
    pub fn max_entry(&self) -> Option<(&Pair, &Value)> {
        max_entry(self.stats.iter())
    }

    /// The key reported on the result line.
    #[must_use]
    pub fn max_pair(&self) -> Option<Pair> {
        self.max_entry().map(|(pair, _)| *pair)
    }
}

impl<'a> IntoIterator for &'a Fixture {
    type Item = (&'a Pair, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Pair, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (&key, &value) in self {
            writeln!(f, "{}", InsertionLine(key, value))?;
        }
        if let Some(pair) = self.max_pair() {
            writeln!(f, "{}", ResultLine(pair))?;
        }
        Ok(())
    }
}

/// Generates a fixture from `rng`, writing each insertion line to `out` as it
/// happens and the result line once all entries are in.
///
/// Seeding `rng` makes the output reproducible byte for byte.
///
/// # Errors
///
/// Returns [`Error::Config`] if `config` does not validate (nothing is
/// written in that case) and [`Error::Io`] if writing to `out` fails.
///
/// # Examples
///
/// ```
/// use pairmax_fixture::{FixtureConfig, generate_into};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut out = Vec::new();
/// let mut rng = StdRng::seed_from_u64(42);
/// let fixture = generate_into(&mut rng, &FixtureConfig::default(), &mut out).unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// assert_eq!(text.lines().count(), 21);
/// assert_eq!(text, fixture.to_string());
/// ```
pub fn generate_into<R, W>(rng: &mut R, config: &FixtureConfig, out: &mut W) -> Result<Fixture, Error>
where
    R: Rng + ?Sized,
    W: Write + ?Sized,
{
    config.validate()?;

    let source = BiasedValues::new(rng, config);
    let fixture = Fixture::try_build(config.entries(), source, |key, value| {
        writeln!(out, "{}", InsertionLine(key, value))
    })?;

    if let Some((&pair, &value)) = fixture.max_entry() {
        info!(?pair, value, entries = fixture.len(), "selected maximum");
        writeln!(out, "{}", ResultLine(pair))?;
    }
    out.flush()?;
    Ok(fixture)
}

/// [`generate_into`] with the default configuration.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing to `out` fails.
pub fn generate_with<R, W>(rng: &mut R, out: &mut W) -> Result<Fixture, Error>
where
    R: Rng + ?Sized,
    W: Write + ?Sized,
{
    generate_into(rng, &FixtureConfig::default(), out)
}

/// Prints a fresh, unseeded default fixture to standard output.
///
/// # Errors
///
/// Returns [`Error::Io`] if standard output cannot be written.
pub fn generate() -> Result<(), Error> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    generate_with(&mut rand::rng(), &mut out)?;
    Ok(())
}
