//! Expected-output fixtures for insertion-ordered maps.
//!
//! This crate generates the oracle for a simple but easy-to-get-wrong test of
//! an insertion-ordered map (such as [`indexmap::IndexMap`]): insert twenty
//! `(i, i)` keys with random values, then ask for the key holding the maximum
//! value. When several keys tie, the answer must be the one inserted first.
//!
//! Values are biased: with probability `0.25` the value is the sentinel `99`,
//! otherwise a uniform integer in `0..=20`. The sentinel sits above every
//! uniform value, so ties on the maximum are common.
//!
//! # Output
//!
//! Twenty insertion lines followed by one result line:
//!
//! ```text
//! ((0,0), 13)
//! ((1,1), 99)
//! ((2,2), 4)
//! ...
//! ((19,19), 99)
//! (1, 1)
//! ```
//!
//! # Example
//!
//! ```
//! use pairmax_fixture::{generate_with, parse_fixture};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! // Seeded: the same seed always yields the same fixture.
//! let mut out = Vec::new();
//! let fixture = generate_with(&mut StdRng::seed_from_u64(1), &mut out).unwrap();
//!
//! // A consumer replays the printed pairs and recomputes the answer.
//! let text = String::from_utf8(out).unwrap();
//! let parsed = parse_fixture(&text).unwrap();
//! assert_eq!(parsed.replay(), *fixture.stats());
//! assert!(parsed.is_consistent());
//! ```
//!
//! # Features
//!
//! - **Explicit randomness** - every generator takes its `Rng`, so seeding is the caller's choice
//! - **Scriptable values** - any `FnMut(u32) -> u32` is a [`ValueSource`]
//! - **Explicit tie-break** - [`max_entry`] keeps the first maximum, unlike `Iterator::max_by_key`
//! - **Round trip** - [`parse_fixture`] reads printed fixtures back for replay

// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod config;
mod error;
mod fixture;
mod max;
mod parse;
mod source;

pub mod render;

/// A fixture key, always of the form `(i, i)`.
pub type Pair = (u32, u32);

/// A fixture value: the sentinel or a uniform draw.
pub type Value = u32;

pub use config::{
    DEFAULT_ENTRIES, FixtureConfig, SENTINEL_PROBABILITY, SENTINEL_VALUE, UNIFORM_MAX, UNIFORM_MIN,
};
pub use error::{ConfigError, Error, ParseError};
pub use fixture::{Fixture, generate, generate_into, generate_with};
pub use max::{max_entry, max_key};
pub use parse::{ParsedFixture, parse_fixture};
pub use source::{BiasedValues, ValueSource};
