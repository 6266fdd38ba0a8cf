use std::cmp::Ordering;

use crate::Sequence;

/// Quicksort over `[start, end)`. The pivot is the element at the
/// sub-range midpoint, parked in the last slot for a Lomuto scan and
/// swapped into its final position afterwards. The smaller partition
/// recurses and the larger one continues in the loop, bounding stack
/// depth at O(log n) even when the fixed midpoint rule degenerates.
/// Not stable.
pub fn sort<S, F>(seq: &mut S, mut start: usize, mut end: usize, compare: &mut F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    while end - start > 1 {
        let pivot = partition(seq, start, end, compare);
        if pivot - start < end - (pivot + 1) {
            sort(seq, start, pivot, compare);
            start = pivot + 1;
        } else {
            sort(seq, pivot + 1, end, compare);
            end = pivot;
        }
    }
}

/// Lomuto partition of `[start, end)` around the midpoint element.
/// Returns the pivot's final index; everything left of it compares
/// strictly less than the pivot.
fn partition<S, F>(seq: &mut S, start: usize, end: usize, compare: &mut F) -> usize
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let mid = start + ((end - start) >> 1);
    seq.swap(mid, end - 1);

    let mut boundary = start;
    for i in start..(end - 1) {
        if compare(seq.get(i), seq.get(end - 1)) == Ordering::Less {
            seq.swap(boundary, i);
            boundary += 1;
        }
    }
    seq.swap(boundary, end - 1);
    boundary
}
