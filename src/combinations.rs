//! Provides the `Combinations` iterator, which yields every non-empty subset
//! of `0..n` in printing order, and `combination_count`.
use std::iter::FusedIterator;

use crate::subset::Subset;

/// The number of non-empty subsets of `0..n`, that is `2^n - 1`, or `None` if
/// that doesn't fit in a `u128`.
#[must_use]
pub fn combination_count(n: usize) -> Option<u128> {
    let n = u32::try_from(n).ok()?;
    1_u128.checked_shl(n).map(|power| power - 1)
}

/// `Combinations::new(n)` yields each of the `2^n - 1` non-empty subsets of
/// `0..n` exactly once, in ascending `Subset` order: all the one-element
/// subsets, then all the two-element subsets, and so on, with subsets of the
/// same size in lexicographic order of their index lists.
///
/// Rather than generating all `2^n` subsets and sorting them, we step from
/// each subset directly to its successor, so the iterator needs only `O(n)`
/// memory no matter how many subsets it yields.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    // The next subset to yield. Empty when we're done.
    next: Vec<usize>,
    remaining: Option<u128>,
}

impl Combinations {
    /// The iterator over the non-empty subsets of `0..n`.
    #[must_use]
    pub fn new(n: usize) -> Self {
        let next = if n == 0 { Vec::new() } else { vec![0] };
        Combinations { n, next, remaining: combination_count(n) }
    }

    /// Replace `self.next` by its successor. Within a size `k`, the successor
    /// comes from bumping the rightmost index that isn't yet at its maximum
    /// (`n - k + i` for position `i`) and packing every index after it
    /// immediately to its right. Once `[n-k, ..., n-1]` is reached, we move
    /// on to `[0, 1, ..., k]`.
    fn advance(&mut self) {
        let n = self.n;
        let k = self.next.len();
        for i in (0..k).rev() {
            if self.next[i] < n - k + i {
                self.next[i] += 1;
                for j in i + 1..k {
                    self.next[j] = self.next[j - 1] + 1;
                }
                return;
            }
        }
        if k < n {
            self.next = (0..=k).collect();
        } else {
            self.next.clear();
        }
    }
}

impl Iterator for Combinations {
    type Item = Subset;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next.is_empty() {
            return None;
        }
        let subset = Subset::from_ascending(self.next.clone());
        self.advance();
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }
        Some(subset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining.and_then(|remaining| usize::try_from(remaining).ok()) {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Combinations {}
