use std::cmp::Ordering;

use crate::Sequence;

use super::common;

/// Bubble sort over `[start, end)`. The active frontier shrinks from the
/// end of the range inward; only adjacent swaps happen, so the sort is
/// stable.
pub fn sort<S, F>(seq: &mut S, start: usize, end: usize, compare: &mut F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    if end - start < 2 {
        return;
    }

    let mut frontier = end - 1;
    while frontier > start {
        for j in start..frontier {
            common::swap_if_inverted(seq, j, j + 1, compare);
        }
        frontier -= 1;
    }
}
