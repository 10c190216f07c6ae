//! Pinnacle and vale analysis of permutation words.
//!
//! A single left-to-right scan classifies every value: the scan enters the
//! word descending (so a small first value registers as a vale) and leaves
//! through a virtual plus-infinity sentinel (so the last value can register
//! as a vale but never as a pinnacle). A direction change from ascending to
//! descending marks a pinnacle, the opposite change marks a vale.

use std::collections::BTreeSet;

/// Returns the pinnacle set and vale set of the given word.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use pinnacles::pinnacle::analysis::pinnacles_and_vales;
///
/// let (pins, vals) = pinnacles_and_vales(&[5, 1, 4, 2, 3, 0]);
/// assert_eq!(pins, BTreeSet::from([3, 4]));
/// assert_eq!(vals, BTreeSet::from([0, 1, 2]));
/// ```
pub fn pinnacles_and_vales(word: &[usize]) -> (BTreeSet<usize>, BTreeSet<usize>) {
    let mut pins = BTreeSet::new();
    let mut vals = BTreeSet::new();
    let Some((&first, rest)) = word.split_first() else {
        return (pins, vals);
    };
    let mut prev = first;
    // The step into the first value counts as descending.
    let mut descending = true;
    for next in rest.iter().copied().map(Some).chain(std::iter::once(None)) {
        let now_descending = match next {
            Some(v) => prev > v,
            // Virtual +inf after the last value
            None => false,
        };
        match (descending, now_descending) {
            (false, true) => {
                pins.insert(prev);
            }
            (true, false) => {
                vals.insert(prev);
            }
            _ => {}
        }
        if let Some(v) = next {
            prev = v;
        }
        descending = now_descending;
    }
    (pins, vals)
}

/// Returns the pinnacle set of the given word.
pub fn pinnacles(word: &[usize]) -> BTreeSet<usize> {
    pinnacles_and_vales(word).0
}

/// Returns the vale set of the given word.
pub fn vales(word: &[usize]) -> BTreeSet<usize> {
    pinnacles_and_vales(word).1
}
