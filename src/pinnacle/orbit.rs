//! Foata-Strehl orbit expansion.
//!
//! The elementary action at a value `x` factors the word as
//! `w1 w2 x w4 w5`, where `w2` and `w4` are the maximal runs of values
//! smaller than `x` immediately flanking it, and rebuilds `w1 w4 x w2 w5`.
//! Swapping the two flanking runs never moves a value past anything larger,
//! so the pinnacle set is preserved; applying the action twice at the same
//! `x` is the identity.
//!
//! Expanding over every non-vale value doubles the collection each time,
//! giving an orbit of exactly `2^(#non-vale values)` words, one per subset
//! of applicable values. Each step must act on the whole collection built so
//! far, not just the newest members; vale membership is fixed once, against
//! the root.

use bitvec::bitvec;
use bitvec::vec::BitVec;

use super::analysis::vales;

/// Block boundaries of the x-factorization `w1 w2 x w4 w5`:
/// `w1 = word[..i]`, `w2 = word[i..j]`, `x` at `j`, `w4 = word[j + 1..k]`,
/// `w5 = word[k..]`.
fn x_factorization(word: &[usize], x: usize) -> (usize, usize, usize) {
    let j = word
        .iter()
        .position(|&v| v == x)
        .expect("factorization value missing from word");
    let mut i = j;
    while i > 0 && word[i - 1] < x {
        i -= 1;
    }
    let mut k = j + 1;
    while k < word.len() && word[k] < x {
        k += 1;
    }
    (i, j, k)
}

/// Performs the elementary Foata-Strehl action at value `x`.
///
/// # Examples
///
/// ```
/// use pinnacles::pinnacle::orbit::foata_strehl_action;
///
/// assert_eq!(foata_strehl_action(&[0, 2, 1], 2), vec![1, 2, 0]);
/// ```
pub fn foata_strehl_action(word: &[usize], x: usize) -> Vec<usize> {
    let (i, j, k) = x_factorization(word, x);
    let mut out = Vec::with_capacity(word.len());
    out.extend_from_slice(&word[..i]);
    out.extend_from_slice(&word[j + 1..k]);
    out.push(x);
    out.extend_from_slice(&word[i..j]);
    out.extend_from_slice(&word[k..]);
    out
}

/// Returns the full Foata-Strehl orbit of `root`, including `root` itself.
///
/// All members share the pinnacle set of `root`. The orbit is materialized
/// whole; its size is `2^(#non-vale values of root)`.
pub fn orbit(root: &[usize]) -> Vec<Vec<usize>> {
    let vale_set = vales(root);
    let mut is_vale: BitVec = bitvec![0; root.len()];
    for v in vale_set {
        is_vale.set(v, true);
    }
    let mut members = vec![root.to_vec()];
    for x in 0..root.len() {
        if is_vale[x] {
            continue;
        }
        let images: Vec<Vec<usize>> = members
            .iter()
            .map(|m| foata_strehl_action(m, x))
            .collect();
        members.extend(images);
    }
    members
}
