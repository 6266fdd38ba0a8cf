use std::cmp::Ordering;

use crate::Sequence;

/// Heap sort over `[start, end)`. Builds an implicit binary max-heap by
/// sifting down from the last parent to the root, then repeatedly swaps
/// the root with the last live slot and sifts the new root down. Heap
/// indices are relative to `start`. Not stable.
pub fn sort<S, F>(seq: &mut S, start: usize, end: usize, compare: &mut F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let size = end - start;
    if size < 2 {
        return;
    }

    let mut heap = MaxHeap {
        seq,
        start,
        size,
        compare,
    };
    heap.sort();
}

/// Per-call heap state: the shrinking live size lives here instead of in
/// any longer-lived structure.
struct MaxHeap<'a, S: ?Sized, F> {
    seq: &'a mut S,
    start: usize,
    size: usize,
    compare: &'a mut F,
}

impl<S, F> MaxHeap<'_, S, F>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    fn sort(&mut self) {
        let mut parent = (self.size - 2) / 2;
        loop {
            self.sift_down(parent);
            if parent == 0 {
                break;
            }
            parent -= 1;
        }

        while self.size > 1 {
            self.size -= 1;
            self.seq.swap(self.start, self.start + self.size);
            self.sift_down(0);
        }
    }

    #[inline]
    fn greater(&mut self, a: usize, b: usize) -> bool {
        (self.compare)(self.seq.get(self.start + a), self.seq.get(self.start + b))
            == Ordering::Greater
    }

    fn sift_down(&mut self, root: usize) {
        let child = 2 * root + 1;
        if child >= self.size {
            return;
        }

        let mut max_child = child;
        if child + 1 < self.size && self.greater(child + 1, child) {
            max_child = child + 1;
        }

        if self.greater(max_child, root) {
            self.seq.swap(self.start + root, self.start + max_child);
            self.sift_down(max_child);
        }
    }
}
