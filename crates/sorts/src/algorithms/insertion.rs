use std::cmp::Ordering;

use crate::Sequence;

/// Insertion sort over `[start, end)`. Each element walks backward with
/// adjacent swaps while strictly less than its predecessor, stopping at
/// `start`. Stable, and O(n) on nearly-sorted input, which is what the
/// adaptive sort relies on to finish short and padded runs.
pub fn sort<S, F>(seq: &mut S, start: usize, end: usize, compare: &mut F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    for i in (start + 1)..end {
        let mut j = i;
        while j > start && compare(seq.get(j), seq.get(j - 1)) == Ordering::Less {
            seq.swap(j, j - 1);
            j -= 1;
        }
    }
}
