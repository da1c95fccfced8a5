//! Subset enumeration for the backtracking search.

/// Walks every non-empty subset of `0..len`.
///
/// Order matches counting upward in binary from 1, where position `k` is
/// bit `k`: `{0}`, `{1}`, `{0,1}`, `{2}`, `{0,2}`, … Subsets that use only
/// low positions therefore come first. The empty set (count 0) is the
/// starting point and is never yielded. There is no width limit; the
/// counter is a vector of flags, not a machine integer.
///
/// The cursor is resumable: after yielding a subset it continues from the
/// next one, and [`reset`](Self::reset) rewinds to the start.
#[derive(Debug, Clone)]
pub struct SubsetCursor {
    selected: Vec<bool>,
    exhausted: bool,
}

impl SubsetCursor {
    /// Creates a cursor over the subsets of `len` positions.
    pub fn new(len: usize) -> Self {
        Self {
            selected: vec![false; len],
            exhausted: false,
        }
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether there are no positions (nothing to yield).
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Rewinds to the start; the next subset is `{0}` again.
    pub fn reset(&mut self) {
        self.selected.iter_mut().for_each(|s| *s = false);
        self.exhausted = false;
    }

    fn positions(&self) -> Vec<usize> {
        self.selected
            .iter()
            .enumerate()
            .filter_map(|(i, &on)| on.then_some(i))
            .collect()
    }
}

impl Iterator for SubsetCursor {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        // Increment: lowest clear position becomes set, everything below clears.
        match self.selected.iter().position(|&on| !on) {
            Some(k) => {
                self.selected[..k].iter_mut().for_each(|s| *s = false);
                self.selected[k] = true;
                Some(self.positions())
            }
            None => {
                self.exhausted = true;
                None
            }
        }
    }
}
