//! Provides `Subset`, a non-empty selection of input line positions, and the
//! order in which subsets are printed.
use std::cmp::Ordering;

/// A `Subset` is a set of zero-based line positions, kept as a strictly
/// ascending `Vec<usize>`.
///
/// Subsets are ordered first by size (smallest first) and then by comparing
/// their index lists element by element. So `{2}` comes before `{0, 1}`,
/// and `{0, 2}` comes before `{1, 2}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subset {
    indices: Vec<usize>,
}

impl Subset {
    /// The subset of positions `i` for which `mask[i]` is `true`
    #[must_use]
    pub fn from_mask(mask: &[bool]) -> Self {
        let indices = mask.iter().enumerate().filter_map(|(i, &included)| included.then_some(i));
        Subset { indices: indices.collect() }
    }

    /// `indices` must be strictly ascending; that's the caller's promise.
    pub(crate) fn from_ascending(indices: Vec<usize>) -> Self {
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        Subset { indices }
    }

    /// The positions in the subset, in ascending order
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// The number of positions in the subset (its popcount)
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Is this the empty subset? `Combinations` never yields one.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl Ord for Subset {
    fn cmp(&self, other: &Self) -> Ordering {
        self.len().cmp(&other.len()).then_with(|| self.indices.cmp(&other.indices))
    }
}

impl PartialOrd for Subset {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
