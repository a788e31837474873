use core::fmt;

use crate::{Pair, Value};

/// One insertion trace line: `((i,i), value)`.
///
/// ```
/// use pairmax_fixture::render::InsertionLine;
///
/// assert_eq!(InsertionLine((3, 3), 99).to_string(), "((3,3), 99)");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InsertionLine(pub Pair, pub Value);

impl fmt::Display for InsertionLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let InsertionLine((a, b), value) = *self;
        write!(f, "(({a},{b}), {value})")
    }
}

/// The closing result line: `(i, i)`.
///
/// Unlike the key inside an insertion line, the two components are separated
/// by a comma *and* a space.
///
/// ```
/// use pairmax_fixture::render::ResultLine;
///
/// assert_eq!(ResultLine((6, 6)).to_string(), "(6, 6)");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ResultLine(pub Pair);

impl fmt::Display for ResultLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ResultLine((a, b)) = *self;
        write!(f, "({a}, {b})")
    }
}
