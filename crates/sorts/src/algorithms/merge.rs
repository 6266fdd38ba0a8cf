use std::cmp::Ordering;

use crate::Sequence;

use super::common;

/// Top-down merge sort over `[start, end)`. Splits at the midpoint,
/// recurses into both halves, then merges through a scratch buffer sized
/// to the sub-range. Ties take the left half first, so the sort is
/// stable. A two-element sub-range is a single conditional swap, which
/// keeps the recursion leaves allocation-free.
pub fn sort<S, F>(seq: &mut S, start: usize, end: usize, compare: &mut F)
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let len = end - start;
    if len < 2 {
        return;
    }
    if len == 2 {
        common::swap_if_inverted(seq, start, start + 1, compare);
        return;
    }

    let mid = start + (len >> 1);
    sort(seq, start, mid, compare);
    sort(seq, mid, end, compare);

    let mut buf = Vec::with_capacity(len);
    let mut i1 = start;
    let mut i2 = mid;
    while i1 < mid && i2 < end {
        if compare(seq.get(i1), seq.get(i2)) == Ordering::Greater {
            buf.push(seq.get(i2).clone());
            i2 += 1;
        } else {
            buf.push(seq.get(i1).clone());
            i1 += 1;
        }
    }
    while i1 < mid {
        buf.push(seq.get(i1).clone());
        i1 += 1;
    }
    while i2 < end {
        buf.push(seq.get(i2).clone());
        i2 += 1;
    }

    for (offset, value) in buf.into_iter().enumerate() {
        seq.set(start + offset, value);
    }
}
