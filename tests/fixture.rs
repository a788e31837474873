use indexmap::IndexMap;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use pairmax_fixture::render::{InsertionLine, ResultLine};
use pairmax_fixture::{Fixture, FixtureConfig, Pair, Value, generate_into, generate_with, max_key, parse_fixture};

fn seeded_output(seed: u64) -> (Fixture, String) {
    let mut out = Vec::new();
    let fixture = generate_with(&mut StdRng::seed_from_u64(seed), &mut out).unwrap();
    (fixture, String::from_utf8(out).unwrap())
}

// ─── Structural properties of generated fixtures ─────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Exactly 20 insertion lines for `(0,0)..(19,19)` in ascending order,
    /// followed by one result line.
    #[test]
    fn twenty_ascending_keys_then_result(seed in any::<u64>()) {
        let (_, text) = seeded_output(seed);
        let lines: Vec<&str> = text.lines().collect();
        prop_assert_eq!(lines.len(), 21);

        let parsed = parse_fixture(&text).unwrap();
        let keys: Vec<Pair> = parsed.entries().iter().map(|(k, _)| *k).collect();
        let expected: Vec<Pair> = (0..20).map(|i| (i, i)).collect();
        prop_assert_eq!(keys, expected);
    }

    /// Every value is the sentinel or lies in `0..=20`.
    #[test]
    fn values_are_sentinel_or_uniform(seed in any::<u64>()) {
        let (fixture, _) = seeded_output(seed);
        for (key, &value) in &fixture {
            prop_assert!(value == 99 || value <= 20, "{:?} -> {}", key, value);
        }
    }

    /// Replaying the printed pairs yields the same iteration order and the
    /// same reported key.
    #[test]
    fn replay_preserves_order_and_answer(seed in any::<u64>()) {
        let (fixture, text) = seeded_output(seed);
        let parsed = parse_fixture(&text).unwrap();

        let replayed: Vec<(Pair, Value)> = parsed.replay().into_iter().collect();
        let generated: Vec<(Pair, Value)> = fixture.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(replayed, generated);
        prop_assert!(parsed.is_consistent());
        prop_assert_eq!(Some(parsed.reported()), fixture.max_pair());
    }

    /// The reported key holds the maximum and no earlier key does.
    #[test]
    fn reported_key_is_first_maximum(seed in any::<u64>()) {
        let (fixture, _) = seeded_output(seed);
        let (&pair, &top) = fixture.max_entry().unwrap();
        prop_assert!(fixture.iter().all(|(_, &v)| v <= top));
        let first = fixture.iter().find(|&(_, &v)| v == top).map(|(&k, _)| k);
        prop_assert_eq!(first, Some(pair));
    }

    /// Identical seeds produce byte-identical output.
    #[test]
    fn fixed_seed_is_reproducible(seed in any::<u64>()) {
        let (_, first) = seeded_output(seed);
        let (_, second) = seeded_output(seed);
        prop_assert_eq!(first, second);
    }

    /// Non-default configurations keep the same structure.
    #[test]
    fn configured_fixture_shape(seed in any::<u64>(), entries in 1u32..64, p in 0.0f64..=1.0) {
        let config = FixtureConfig::default().with_entries(entries).with_sentinel_probability(p);
        let mut out = Vec::new();
        let fixture = generate_into(&mut StdRng::seed_from_u64(seed), &config, &mut out).unwrap();
        prop_assert_eq!(fixture.len(), entries as usize);
        prop_assert!(fixture.iter().all(|(_, &v)| config.admits(v)));
        prop_assert_eq!(String::from_utf8(out).unwrap().lines().count(), entries as usize + 1);
    }
}

// ─── Fixed scenarios ─────────────────────────────────────────────────────────

#[test]
fn alternating_sentinels_end_to_end() {
    let fixture = Fixture::build(20, |i: u32| if i % 2 == 0 { 99 } else { i }, |_, _| {});
    let text = fixture.to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "((0,0), 99)");
    assert_eq!(lines[1], "((1,1), 1)");
    assert_eq!(lines[19], "((19,19), 19)");
    assert_eq!(lines[20], "(0, 0)");
}

#[test]
fn tie_break_example() {
    let entries = [((0, 0), 5), ((1, 1), 99), ((2, 2), 99), ((3, 3), 3)];
    let stats: IndexMap<Pair, Value> = IndexMap::from(entries);

    assert_eq!(max_key(stats.iter()), Some(&(1, 1)));
    let naive = stats.iter().max_by_key(|(_, v)| **v).map(|(k, _)| *k);
    assert_eq!(naive, Some((2, 2)));
}

/// A hand-written fixture with many ties, checked against an `IndexMap` the
/// way a consuming test would.
#[test]
fn indexmap_replay_of_recorded_fixture() {
    let values: [Value; 20] = [2, 12, 18, 11, 1, 9, 99, 7, 20, 99, 99, 99, 4, 99, 19, 99, 5, 99, 99, 7];
    let mut text = String::new();
    for (i, &value) in (0u32..).zip(&values) {
        text += &format!("{}\n", InsertionLine((i, i), value));
    }
    text += &format!("{}\n", ResultLine((6, 6)));

    let parsed = parse_fixture(&text).unwrap();
    let stats = parsed.replay();

    let keys: Vec<Pair> = stats.keys().copied().collect();
    let input_keys: Vec<Pair> = parsed.entries().iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, input_keys, "keys are not in insertion order");
    assert_eq!(parsed.recomputed_max(), Some((6, 6)));
    assert!(parsed.is_consistent());
}

#[test]
fn certain_sentinel_reports_first_key() {
    let config = FixtureConfig::default().with_sentinel_probability(1.0);
    let mut out = Vec::new();
    generate_into(&mut StdRng::seed_from_u64(9), &config, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.lines().take(20).all(|l| l.ends_with(", 99)")));
    assert_eq!(text.lines().last(), Some("(0, 0)"));
}

#[test]
fn zero_entries_print_nothing() {
    let config = FixtureConfig::default().with_entries(0);
    let mut out = Vec::new();
    let fixture = generate_into(&mut StdRng::seed_from_u64(0), &config, &mut out).unwrap();
    assert!(fixture.is_empty());
    assert!(out.is_empty());
}
