use indexmap::IndexMap;

use crate::error::ParseError;
use crate::max::max_key;
use crate::{Pair, Value};

/// A printed fixture read back into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedFixture {
    entries: Vec<(Pair, Value)>,
    reported: Pair,
}

impl ParsedFixture {
    /// Insertion lines, in printed order.
    #[must_use]
    pub fn entries(&self) -> &[(Pair, Value)] {
        &self.entries
    }

    /// The key on the result line.
    #[must_use]
    pub fn reported(&self) -> Pair {
        self.reported
    }

    /// Inserts the printed entries, in order, into a fresh map.
    #[must_use]
    pub fn replay(&self) -> IndexMap<Pair, Value> {
        self.entries.iter().copied().collect()
    }

    /// Recomputes the maximum over the replayed map.
    #[must_use]
    pub fn recomputed_max(&self) -> Option<Pair> {
        max_key(self.replay())
    }

    /// Returns `true` if replaying the entries selects the reported key.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.recomputed_max() == Some(self.reported)
    }
}

/// Parses the text printed by [`generate_into`](crate::generate_into).
///
/// Trailing whitespace on each line and blank lines after the result line are
/// ignored.
///
/// # Errors
///
/// Returns [`ParseError`] naming the first line that does not fit the
/// `((i,i), value)`* `(i, i)` shape.
///
/// # Examples
///
/// ```
/// use pairmax_fixture::parse_fixture;
///
/// let parsed = parse_fixture("((0,0), 5)\n((1,1), 99)\n((2,2), 99)\n(1, 1)\n").unwrap();
/// assert_eq!(parsed.entries().len(), 3);
/// assert_eq!(parsed.reported(), (1, 1));
/// assert!(parsed.is_consistent());
/// ```
pub fn parse_fixture(text: &str) -> Result<ParsedFixture, ParseError> {
    let lines: Vec<(usize, &str)> = text.lines().map(str::trim_end).enumerate().map(|(n, l)| (n + 1, l)).collect();
    let Some(last) = lines.iter().rposition(|(_, l)| !l.is_empty()) else {
        return Err(ParseError::MissingResult);
    };

    let mut entries = Vec::with_capacity(last);
    for (at, &(line, text)) in lines[..last].iter().enumerate() {
        if let Some(entry) = insertion_line(text) {
            entries.push(entry);
        } else if result_line(text).is_some() {
            let (line, text) = lines[at + 1];
            return Err(ParseError::Trailing { line, text: text.to_owned() });
        } else {
            return Err(ParseError::Insertion { line, text: text.to_owned() });
        }
    }

    let (line, text) = lines[last];
    if insertion_line(text).is_some() {
        return Err(ParseError::MissingResult);
    }
    let reported = result_line(text).ok_or_else(|| ParseError::Result { line, text: text.to_owned() })?;

    Ok(ParsedFixture { entries, reported })
}

/// `((a,b), value)`
fn insertion_line(text: &str) -> Option<(Pair, Value)> {
    let rest = text.strip_prefix("((")?.strip_suffix(')')?;
    let (key, value) = rest.split_once("), ")?;
    let (a, b) = key.split_once(',')?;
    Some(((a.parse().ok()?, b.parse().ok()?), value.parse().ok()?))
}

/// `(a, b)`
fn result_line(text: &str) -> Option<Pair> {
    let (a, b) = text.strip_prefix('(')?.strip_suffix(')')?.split_once(", ")?;
    Some((a.parse().ok()?, b.parse().ok()?))
}
