//! Enumeration of the vale sets admissible for a target pinnacle set.
//!
//! For a pinnacle set `P = {p1 < ... < pk}`, a vale set
//! `V = {0 = v0 < v1 < ... < vk}` is *admissible* iff `vi < pi` for every
//! `i >= 1` and `V` is disjoint from `P`. Admissibility is purely
//! arithmetic; it does not reference any concrete permutation.
//!
//! The construction strips pinnacles smallest-first, so vales enter the set
//! in descending index order: the innermost recursion level pairs the
//! largest pinnacle `pk` with each candidate `vk`, and each unwinding level
//! inserts a new second-smallest value bounded by both its pinnacle and the
//! vale it must stay below.

use std::iter;

use bitvec::bitvec;
use bitvec::vec::BitVec;

/// Lazily enumerates every vale set admissible for `pins`, as sorted words.
///
/// `pins` must be sorted ascending and duplicate-free. The empty pinnacle
/// set admits exactly the vale set `{0}`. No duplicates are produced.
///
/// # Examples
///
/// ```
/// use pinnacles::pinnacle::vale_sets::admissible_vale_sets;
///
/// let sets: Vec<Vec<usize>> = admissible_vale_sets(&[3]).collect();
/// assert_eq!(sets, vec![vec![0, 1], vec![0, 2]]);
/// ```
pub fn admissible_vale_sets(pins: &[usize]) -> Box<dyn Iterator<Item = Vec<usize>>> {
    debug_assert!(pins.windows(2).all(|w| w[0] < w[1]));
    let Some(&largest) = pins.last() else {
        return Box::new(iter::once(vec![0]));
    };
    let mut members: BitVec = bitvec![0; largest + 1];
    for &p in pins {
        members.set(p, true);
    }
    descend(pins.to_vec(), members)
}

/// Recursive step: `pins` is the ascending tail of the original pinnacle
/// set, `members` the membership mask of the full set.
fn descend(pins: Vec<usize>, members: BitVec) -> Box<dyn Iterator<Item = Vec<usize>>> {
    let pm = pins[0];
    let rest = pins[1..].to_vec();
    if rest.is_empty() {
        // Innermost level: the largest pinnacle picks the largest vale.
        return Box::new((1..pm).filter(move |&v| !members[v]).map(|v| vec![0, v]));
    }
    Box::new(descend(rest, members.clone()).flat_map(move |vales| {
        let cap = pm.min(vales[1]);
        let members = members.clone();
        (1..cap).filter(move |&v| !members[v]).map(move |v| {
            let mut widened = vales.clone();
            widened.insert(1, v);
            widened
        })
    }))
}
