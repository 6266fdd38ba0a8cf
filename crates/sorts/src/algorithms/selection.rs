use std::cmp::Ordering;

use crate::Sequence;

/// Selection sort over `[start, end)`. The strict `Less` test keeps the
/// first occurrence among equal minima, but the long-distance swap into
/// position makes the sort unstable overall.
pub fn sort<S, F>(seq: &mut S, start: usize, end: usize, compare: &mut F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    for i in start..end {
        let mut min_index = i;
        for j in (i + 1)..end {
            if compare(seq.get(j), seq.get(min_index)) == Ordering::Less {
                min_index = j;
            }
        }
        if min_index != i {
            seq.swap(i, min_index);
        }
    }
}
