//! Maximum-by-value selection with a first-occurrence tie-break.
//!
//! [`Iterator::max_by_key`] returns the *last* of several equal maxima, which
//! is the opposite of what an insertion-ordered consumer expects. The scan
//! here only replaces the current best on a strictly greater value.

/// Returns the first entry carrying the maximum value, or `None` if `entries`
/// is empty.
///
/// Entries are visited in iteration order; on ties the earliest one is kept.
///
/// # Examples
///
/// ```
/// use pairmax_fixture::max_entry;
///
/// let entries = [((0, 0), 5), ((1, 1), 99), ((2, 2), 99), ((3, 3), 3)];
/// assert_eq!(max_entry(entries), Some(((1, 1), 99)));
///
/// // `max_by_key` would have picked the later tie.
/// let last = entries.iter().max_by_key(|(_, v)| *v).unwrap();
/// assert_eq!(last.0, (2, 2));
/// ```
///
/// # Complexity
///
/// O(n)
pub fn max_entry<I, K, V>(entries: I) -> Option<(K, V)>
where
    I: IntoIterator<Item = (K, V)>,
    V: PartialOrd,
{
    let mut best: Option<(K, V)> = None;
    for (key, value) in entries {
        let greater = match &best {
            Some((_, best_value)) => value > *best_value,
            None => true,
        };
        if greater {
            best = Some((key, value));
        }
    }
    best
}

/// Returns the key of [`max_entry`].
pub fn max_key<I, K, V>(entries: I) -> Option<K>
where
    I: IntoIterator<Item = (K, V)>,
    V: PartialOrd,
{
    max_entry(entries).map(|(key, _)| key)
}
