//! Canonical representatives.
//!
//! Every equivalence class of permutations sharing a pinnacle set contains
//! exactly one *canonical representative*: the word obtained by inserting
//! all values absent from a PV-arrangement in the unique canonical way. This
//! module builds them by flattening the vale-set and arrangement enumerators
//! and running the ascending insertion described below.
//!
//! Insertion processes the missing values smallest-first. A value `i` may
//! enter at a gap only where the left neighbor is smaller than `i` (no
//! unintended pinnacle appears) and the right neighbor is either the end of
//! the word or a still-live pinnacle target above `i` (placed pinnacles keep
//! their pattern). Before recursing, targets at or below `i` drop out of the
//! live set: no later value could unseat them anymore.

use std::iter;

use super::arrangements::arrangements;
use super::vale_sets::admissible_vale_sets;

/// Lazily enumerates every PV-arrangement for `pins`, over all admissible
/// vale sets. Distinct vale sets use distinct values, so the concatenation
/// stays duplicate-free.
pub fn full_arrangements(pins: &[usize]) -> Box<dyn Iterator<Item = Vec<usize>>> {
    let sets = admissible_vale_sets(pins);
    let pins = pins.to_vec();
    Box::new(sets.flat_map(move |vales| arrangements(pins.clone(), vales)))
}

/// Lazily enumerates every canonical representative in `S_n` consistent with
/// `arrangement`, inserting the values of `0..n` absent from it in ascending
/// order.
///
/// # Examples
///
/// ```
/// use pinnacles::pinnacle::roots::populate;
///
/// let full: Vec<Vec<usize>> = populate(vec![0, 2, 1], &[2], 4).collect();
/// assert_eq!(full, vec![vec![0, 2, 1, 3]]);
/// ```
pub fn populate(
    arrangement: Vec<usize>,
    pins: &[usize],
    n: usize,
) -> Box<dyn Iterator<Item = Vec<usize>>> {
    let remaining: Vec<usize> = (0..n).filter(|v| !arrangement.contains(v)).collect();
    if arrangement.is_empty() {
        return Box::new(iter::once(remaining));
    }
    insert_ascending(arrangement, pins.to_vec(), remaining)
}

/// Recursive worker behind [`populate`]: `remaining` is ascending, `pins`
/// holds the still-live pinnacle targets.
fn insert_ascending(
    seq: Vec<usize>,
    pins: Vec<usize>,
    remaining: Vec<usize>,
) -> Box<dyn Iterator<Item = Vec<usize>>> {
    let Some((&value, rest)) = remaining.split_first() else {
        return Box::new(iter::once(seq));
    };
    let rest = rest.to_vec();
    // Targets at or below the value being placed can no longer be unseated.
    let live: Vec<usize> = pins.into_iter().filter(|&p| p > value).collect();
    let last = seq.len();
    Box::new((1..=last).flat_map(move |k| {
        let open = seq[k - 1] < value && (k == last || live.contains(&seq[k]));
        if !open {
            return Box::new(iter::empty()) as Box<dyn Iterator<Item = Vec<usize>>>;
        }
        let mut child = seq.clone();
        child.insert(k, value);
        insert_ascending(child, live.clone(), rest.clone())
    }))
}

/// Lazily enumerates every canonical representative in `S_n` with pinnacle
/// set `pins` (sorted ascending).
pub fn canonical_roots(pins: Vec<usize>, n: usize) -> impl Iterator<Item = Vec<usize>> {
    let targets = pins.clone();
    full_arrangements(&pins).flat_map(move |arr| populate(arr, &targets, n))
}
