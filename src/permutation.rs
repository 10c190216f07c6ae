//! # Permutations
//!
//! This module provides a `Permutation` struct for representing and working
//! with permutations of a sequence of integers `0..n`.
//!
//! ## Key Features:
//!
//! - **Representation**: A `Permutation` is stored by its direct mapping
//!   (`map[i]` is the image of `i`, equivalently its one-line word) and its
//!   inverse mapping.
//! - **Construction**: identity via `Permutation::id(n)`, or from a one-line
//!   word via `Permutation::from_map(vec![...])`.
//! - **Application**: `p.apply_slice(data)` returns a new `Vec` reordered by
//!   the permutation.
//! - **Ranking and Unranking**: `p.rank()` and `Permutation::unrank(number,
//!   size)` form a Lehmer-code bijection between permutations of length
//!   `size` and the integers `0..size!`. Unranking every integer in range is
//!   how the test suite enumerates a whole symmetric group.

use std::fmt;

/// A permutation of `0..n`, with the ability to apply itself to slices.
///
/// # Examples
///
/// ```
/// use pinnacles::permutation::Permutation;
///
/// // Create a permutation that maps 0->2, 1->0, 2->1, 3->3
/// let p = Permutation::from_map(vec![2, 0, 1, 3]);
///
/// // Apply the permutation to a slice
/// let data = vec![10, 20, 30, 40];
/// let permuted = p.apply_slice(&data);
/// assert_eq!(permuted, vec![20, 30, 10, 40]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Permutation {
    map: Vec<usize>,
    inv: Vec<usize>,
}

/// Implement ordering comparisons for permutations based on their `map` field.
impl PartialOrd for Permutation {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Permutation {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.map.cmp(&other.map)
    }
}

impl Permutation {
    // --------------------------------------------------------------------------------------------
    // Basic Constructors and Accessors
    // --------------------------------------------------------------------------------------------

    /// Creates the identity permutation of length `n`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pinnacles::permutation::Permutation;
    /// let p = Permutation::id(4);
    /// assert_eq!(p.apply_slice(&[10, 20, 30, 40]), vec![10, 20, 30, 40]);
    /// ```
    pub fn id(n: usize) -> Self {
        Permutation {
            map: (0..n).collect(),
            inv: (0..n).collect(),
        }
    }

    /// Creates a permutation from a mapping vector.
    /// The `map` vector states where index `i` is sent: `map[i]` is the image of `i`.
    /// Read as a one-line word, `map` lists the values position by position.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pinnacles::permutation::Permutation;
    /// let p = Permutation::from_map(vec![2, 0, 1]);
    /// assert_eq!(p.apply_slice(&[10, 20, 30]), vec![20, 30, 10]);
    /// ```
    pub fn from_map(map: Vec<usize>) -> Self {
        let mut inv = vec![0; map.len()];
        for (i, &j) in map.iter().enumerate() {
            inv[j] = i;
        }
        Permutation { map, inv }
    }

    /// Returns the internal mapping (the one-line word) as a slice.
    pub fn map(&self) -> &[usize] {
        &self.map
    }

    /// Returns the inverse mapping as a slice.
    pub fn inv(&self) -> &[usize] {
        &self.inv
    }

    /// Returns the number of elements the permutation acts on.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` for the empty permutation (the sole element of S0).
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Applies the permutation to a slice, returning a new `Vec` where the
    /// element at position `i` moves to position `map[i]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pinnacles::permutation::Permutation;
    /// let p = Permutation::from_map(vec![2, 1, 3, 0]);
    /// assert_eq!(p.apply_slice(&[10, 20, 30, 40]), vec![40, 20, 10, 30]);
    /// ```
    pub fn apply_slice<T: Clone>(&self, slice: &[T]) -> Vec<T> {
        self.inv.iter().map(|&i| slice[i].clone()).collect()
    }

    // --------------------------------------------------------------------------------------------
    // Lehmer-code Ranking/Unranking
    // --------------------------------------------------------------------------------------------

    /// Computes a unique numerical representation of the permutation.
    ///
    /// Each value of the word is encoded as its index in the shrinking pool
    /// of values not yet consumed, and the resulting digits are folded into a
    /// single integer in factorial base. The rank lies in `0..size!`.
    ///
    /// Returns `(number, size)`; [`Permutation::unrank`] performs the reverse
    /// operation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pinnacles::permutation::Permutation;
    /// let p = Permutation::from_map(vec![1, 0, 2]);
    /// let (number, size) = p.rank();
    /// assert_eq!(Permutation::unrank(number, size), p);
    /// ```
    pub fn rank(&self) -> (usize, usize) {
        let mut pool: Vec<usize> = (0..self.map.len()).collect();
        let mut digits = Vec::with_capacity(self.map.len());
        for &e in &self.map {
            let i = pool
                .iter()
                .position(|&v| v == e)
                .expect("word is a bijection onto 0..n");
            pool.remove(i);
            digits.push(i);
        }
        let mut number = 0;
        let mut size = 0;
        for &d in digits.iter().rev() {
            size += 1;
            number = number * size + d;
        }
        (number, size)
    }

    /// Unranks a permutation of length `size` from its Lehmer-code index.
    ///
    /// Every `number` in `0..size!` yields a distinct permutation, so
    /// iterating the whole range enumerates the symmetric group.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pinnacles::permutation::Permutation;
    /// let p = Permutation::unrank(0, 3);
    /// assert_eq!(p.map(), &[0, 1, 2]);
    /// ```
    pub fn unrank(mut number: usize, size: usize) -> Self {
        let mut pool: Vec<usize> = (0..size).collect();
        let mut map = Vec::with_capacity(size);
        let mut left = size;
        while left > 0 {
            let x = number % left;
            number /= left;
            map.push(pool.remove(x));
            left -= 1;
        }
        Permutation::from_map(map)
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // One-line notation
        write!(f, "[")?;
        for (i, &x) in self.map.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, "]")
    }
}

/// Returns `n!` for a non-negative integer `n`.
///
/// # Examples
///
/// ```
/// # use pinnacles::permutation::factorial;
/// assert_eq!(factorial(0), 1);
/// assert_eq!(factorial(5), 120);
/// ```
pub fn factorial(n: usize) -> usize {
    (1..=n).product()
}
