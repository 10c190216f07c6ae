use std::collections::BTreeSet;

use ahash::{AHashMap, AHashSet};
use itertools::Itertools;
use proptest::prelude::*;

use crate::permutation::{factorial, Permutation};

use super::analysis::{pinnacles, pinnacles_and_vales};
use super::{generate, PinnacleError};

/// Exhaustive oracle: every word of `S_n`, grouped by pinnacle set.
fn brute_classes(n: usize) -> AHashMap<Vec<usize>, AHashSet<Vec<usize>>> {
    let mut classes: AHashMap<Vec<usize>, AHashSet<Vec<usize>>> = AHashMap::new();
    for r in 0..factorial(n) {
        let word = Permutation::unrank(r, n).map().to_vec();
        let pins: Vec<usize> = pinnacles(&word).into_iter().collect();
        classes.entry(pins).or_default().insert(word);
    }
    classes
}

fn collect_words(n: usize, pins: &BTreeSet<usize>) -> Vec<Vec<usize>> {
    generate(n, pins)
        .unwrap()
        .map(|p| p.map().to_vec())
        .collect()
}

fn render(mut words: Vec<Vec<usize>>) -> String {
    words.sort();
    words
        .iter()
        .map(|w| w.iter().map(|v| v.to_string()).join(" "))
        .join("\n")
}

#[test]
fn test_matches_brute_force_for_all_targets() {
    for n in 0..=7usize {
        let mut classes = brute_classes(n);
        let candidates: Vec<usize> = (1..n).collect();
        for mask in 0u32..(1 << candidates.len()) {
            let pins: BTreeSet<usize> = candidates
                .iter()
                .enumerate()
                .filter(|&(i, _)| mask >> i & 1 == 1)
                .map(|(_, &v)| v)
                .collect();
            let mut produced = AHashSet::new();
            for p in generate(n, &pins).unwrap() {
                assert!(
                    produced.insert(p.map().to_vec()),
                    "duplicate output for n={n} pins={pins:?}"
                );
            }
            let key: Vec<usize> = pins.iter().copied().collect();
            let expected = classes.remove(&key).unwrap_or_default();
            assert_eq!(produced, expected, "n={n} pins={pins:?}");
        }
        // Every class consumed exactly once: the targets partition S_n.
        assert!(
            classes.is_empty(),
            "pinnacle classes missed by enumeration: {:?}",
            classes.keys().collect::<Vec<_>>()
        );
    }
}

#[test]
fn test_partition_of_s5() {
    let mut total = 0usize;
    for mask in 0u32..16 {
        let pins: BTreeSet<usize> = (1..5).filter(|&v| mask >> (v - 1) & 1 == 1).collect();
        total += generate(5, &pins).unwrap().count();
    }
    assert_eq!(total, factorial(5));
}

#[test]
fn test_three_with_pinnacle_two() {
    let words = collect_words(3, &BTreeSet::from([2]));
    assert_eq!(words.len(), 2);
    let set: AHashSet<Vec<usize>> = words.into_iter().collect();
    let expected: AHashSet<Vec<usize>> = [vec![0, 2, 1], vec![1, 2, 0]].into_iter().collect();
    assert_eq!(set, expected);
}

#[test]
fn test_four_with_no_pinnacles() {
    let words = collect_words(4, &BTreeSet::new());
    let expected = brute_classes(4).remove(&Vec::new()).unwrap();
    assert_eq!(words.iter().cloned().collect::<AHashSet<_>>(), expected);
    insta::assert_snapshot!(render(words), @r"
    0 1 2 3
    1 0 2 3
    2 0 1 3
    2 1 0 3
    3 0 1 2
    3 1 0 2
    3 2 0 1
    3 2 1 0
    ");
}

#[test]
fn test_five_with_pinnacles_three_four() {
    let pins = BTreeSet::from([3, 4]);
    let count = generate(5, &pins).unwrap().count();
    let brute = (0..factorial(5))
        .filter(|&r| pinnacles(Permutation::unrank(r, 5).map()) == BTreeSet::from([3, 4]))
        .count();
    assert_eq!(count, brute);
}

#[test]
fn test_snapshot_pinnacle_two_in_s3() {
    let words = collect_words(3, &BTreeSet::from([2]));
    insta::assert_snapshot!(render(words), @r"
    0 2 1
    1 2 0
    ");
}

#[test]
fn test_output_invariants() {
    for (n, pins) in [
        (5usize, BTreeSet::from([2])),
        (5, BTreeSet::from([3, 4])),
        (6, BTreeSet::from([4])),
    ] {
        for p in generate(n, &pins).unwrap() {
            let word = p.map();
            let (ps, vs) = pinnacles_and_vales(word);
            assert_eq!(ps, pins, "wrong pinnacle set for {word:?}");
            assert!(ps.is_disjoint(&vs));
            assert!(vs.contains(&0));
            // Boundary positions never hold pinnacles.
            assert!(!ps.contains(&word[0]));
            assert!(!ps.contains(&word[n - 1]));
        }
    }
}

#[test]
fn test_unrealizable_target_is_empty_not_error() {
    // No permutation of 0..3 can raise 1 above two smaller neighbors.
    let words = collect_words(3, &BTreeSet::from([1]));
    assert!(words.is_empty());
}

#[test]
fn test_zero_pinnacle_rejected() {
    let err = generate(3, &BTreeSet::from([0])).err().unwrap();
    assert_eq!(err, PinnacleError::ZeroPinnacle);
}

#[test]
fn test_out_of_range_pinnacle_rejected() {
    let err = generate(3, &BTreeSet::from([3])).err().unwrap();
    assert_eq!(err, PinnacleError::ValueOutOfRange { value: 3, n: 3 });

    let err = generate(0, &BTreeSet::from([1])).err().unwrap();
    assert_eq!(err, PinnacleError::ValueOutOfRange { value: 1, n: 0 });
}

#[test]
fn test_empty_symmetric_group() {
    let words = collect_words(0, &BTreeSet::new());
    assert_eq!(words, vec![Vec::<usize>::new()]);
}

#[test]
fn test_first_element_without_full_consumption() {
    // A large target space must still hand out the first word on demand.
    let pins = BTreeSet::from([8]);
    let first = generate(9, &pins).unwrap().next();
    assert!(first.is_some());
}

proptest! {
    #[test]
    fn prop_analysis_invariants(r in 0usize..5040) {
        let p = Permutation::unrank(r, 7);
        let (pins, vals) = pinnacles_and_vales(p.map());
        prop_assert!(pins.is_disjoint(&vals));
        prop_assert!(vals.contains(&0));
        prop_assert_eq!(vals.len(), pins.len() + 1);
        prop_assert!(!pins.contains(&p.map()[0]));
        prop_assert!(!pins.contains(&p.map()[6]));
    }
}
