//! Enumeration of PV-arrangements.
//!
//! A PV-arrangement is a word over exactly the values `P ∪ V` whose pinnacle
//! set is `P` and whose vale set is `V`: the minimal skeleton realizing the
//! target pattern, before any of the remaining values of `0..n` are placed.
//!
//! The recursion peels off the smallest pinnacle `p`. Every vale smaller
//! than `p` could flank it; choosing the 2-subset `{v1, v2}` that does and
//! removing it leaves a strictly smaller admissible pair to recurse on, with
//! `p` itself demoted to a vale of the subproblem. Splicing `v1 p v2` back
//! over `p`'s position in each sub-arrangement produces each valid
//! arrangement exactly once (structural induction on `|P|`).

use std::iter;

use itertools::Itertools;

/// Lazily enumerates every PV-arrangement for the sorted pinnacle word
/// `pins` and sorted vale word `vales`.
///
/// The inputs must be admissible (see
/// [`vale_sets`](super::vale_sets::admissible_vale_sets)), in particular
/// `vales.len() == pins.len() + 1`.
///
/// # Examples
///
/// ```
/// use pinnacles::pinnacle::arrangements::arrangements;
///
/// let arrs: Vec<Vec<usize>> = arrangements(vec![2], vec![0, 1]).collect();
/// assert_eq!(arrs, vec![vec![0, 2, 1]]);
/// ```
pub fn arrangements(pins: Vec<usize>, vales: Vec<usize>) -> Box<dyn Iterator<Item = Vec<usize>>> {
    debug_assert_eq!(vales.len(), pins.len() + 1);
    match pins.len() {
        0 => Box::new(iter::once(vales)),
        // A single pinnacle sits between its two vales.
        1 => Box::new(iter::once(vec![vales[0], pins[0], vales[1]])),
        _ => {
            let p = pins[0];
            let rest = pins[1..].to_vec();
            let split = vales.partition_point(|&v| v < p);
            let low = vales[..split].to_vec();
            // The subproblem sees p as a vale, placed right after max(low).
            let mut widened = vales;
            widened.insert(split, p);
            Box::new(low.into_iter().tuple_combinations().flat_map(move |(v1, v2)| {
                let mut reduced = widened.clone();
                reduced.retain(|&v| v != v1 && v != v2);
                arrangements(rest.clone(), reduced).map(move |mut arr| {
                    let j = arr
                        .iter()
                        .position(|&v| v == p)
                        .expect("spliced pinnacle missing from sub-arrangement");
                    arr.insert(j + 1, v2);
                    arr.insert(j, v1);
                    arr
                })
            }))
        }
    }
}
