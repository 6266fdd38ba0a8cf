use std::cmp::Ordering;

use crate::Sequence;

/// Orders the pair at `(a, b)` with a single comparison, swapping on
/// `Greater` so equal elements keep their relative order.
#[inline]
pub fn swap_if_inverted<S, F>(seq: &mut S, a: usize, b: usize, compare: &mut F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    if compare(seq.get(a), seq.get(b)) == Ordering::Greater {
        seq.swap(a, b);
    }
}

/// Clones `[start, end)` into a fresh scratch buffer for a merge step.
/// The buffer is owned by the calling merge and dropped at its exit.
#[inline]
pub fn collect_range<S>(seq: &S, start: usize, end: usize) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
{
    let mut buf = Vec::with_capacity(end - start);
    for i in start..end {
        buf.push(seq.get(i).clone());
    }
    buf
}
