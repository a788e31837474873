use std::io;

use thiserror::Error;

use crate::Value;

/// A [`FixtureConfig`](crate::FixtureConfig) that values cannot be drawn from.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("sentinel probability {0} is not within [0, 1]")]
    Probability(f64),

    #[error("uniform value range {start}..={end} is empty")]
    EmptyRange { start: Value, end: Value },
}

/// Failure to read a printed fixture back.
///
/// Line numbers are one-based.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("fixture has no result line")]
    MissingResult,

    #[error("line {line}: expected `((i,i), value)`, found {text:?}")]
    Insertion { line: usize, text: String },

    #[error("line {line}: expected `(i, i)`, found {text:?}")]
    Result { line: usize, text: String },

    #[error("line {line}: unexpected text after the result line: {text:?}")]
    Trailing { line: usize, text: String },
}

/// Any failure while producing a fixture.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to write fixture")]
    Io(#[from] io::Error),
}
