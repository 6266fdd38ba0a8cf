//! Adaptive hybrid merge sort.
//!
//! Consumes the range left to right as natural runs (already ascending, or
//! strictly descending and reversed in place), pads short runs up to a
//! computed minimum length and finishes them with insertion sort, and
//! keeps pending runs on a stack whose balance invariant bounds both the
//! stack depth and the total merge work. Adjacent runs merge through a
//! scratch copy of the left run, switching into galloping mode when one
//! side keeps winning comparisons.
//!
//! Stability holds for naturally ascending input; a detected-descending
//! run is reversed before it is finished, and the guarantee is not
//! extended across that reversal.

use std::cmp::Ordering;

use crate::Sequence;

use super::{common, insertion};

/// Ranges shorter than this are a single run sorted by insertion alone.
pub(crate) const MAX_MINRUN: usize = 64;

/// Consecutive single-side wins before a merge switches to galloping.
const GALLOP_COUNT: u32 = 7;

/// A pending stretch of `[start, start + len)` already sorted ascending.
#[derive(Clone, Copy)]
struct Run {
    start: usize,
    len: usize,
}

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

    let minrun = min_run_length(len);
    let mut runs: Vec<Run> = Vec::new();

    let mut run_start = start;
    while run_start < end {
        let mut run_end = extract_run(seq, run_start, end, compare);
        if run_end < end && run_end - run_start < minrun {
            run_end = (run_start + minrun).min(end);
        }
        insertion::sort(seq, run_start, run_end, compare);

        runs.push(Run {
            start: run_start,
            len: run_end - run_start,
        });
        rebalance(seq, &mut runs, compare);

        run_start = run_end;
    }

    collapse(seq, &mut runs, start, end, compare);
}

/// Computed from the range length by halving while recording whether any
/// removed bit was set; the result lands in [32, 64] so that the run
/// count stays close to, without exceeding, a power of two.
pub(crate) fn min_run_length(mut n: usize) -> usize {
    let mut r = 0;
    while n >= MAX_MINRUN {
        r |= n & 1;
        n >>= 1;
    }
    n + r
}

/// Scans the maximal monotonic stretch starting at `run_start` and
/// returns its exclusive end, reversing it in place when it was
/// descending. The descending direction requires strict `Greater`, so a
/// tie ends a descending run and the reversal never crosses equal
/// elements.
fn extract_run<S, F>(seq: &mut S, run_start: usize, end: usize, compare: &mut F) -> usize
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let mut run_end = run_start + 1;
    if run_end == end {
        return run_end;
    }

    let ascending = compare(seq.get(run_start), seq.get(run_start + 1)) != Ordering::Greater;
    run_end += 1;
    if ascending {
        while run_end < end && compare(seq.get(run_end - 1), seq.get(run_end)) != Ordering::Greater
        {
            run_end += 1;
        }
    } else {
        while run_end < end && compare(seq.get(run_end - 1), seq.get(run_end)) == Ordering::Greater
        {
            run_end += 1;
        }
        reverse_range(seq, run_start, run_end);
    }

    run_end
}

fn reverse_range<S: Sequence + ?Sized>(seq: &mut S, start: usize, end: usize) {
    let mut a = start;
    let mut b = end - 1;
    while a < b {
        seq.swap(a, b);
        a += 1;
        b -= 1;
    }
}

/// Restores the stack invariant |X| > |Y| + |Z| and |Y| > |Z| over the
/// three topmost runs after a push. Merging X,Y keeps Z on top; merging
/// Y,Z keeps X beneath. Stops as soon as the invariant holds or fewer
/// than three runs remain.
fn rebalance<S, F>(seq: &mut S, runs: &mut Vec<Run>, compare: &mut F)
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    while runs.len() >= 3 {
        let n = runs.len();
        let x = runs[n - 3].len;
        let y = runs[n - 2].len;
        let z = runs[n - 1].len;

        if z > y + x || (y > x && z < x) {
            merge_runs(seq, runs, n - 3, compare);
        } else if y > x {
            merge_runs(seq, runs, n - 2, compare);
        } else {
            break;
        }
    }
}

/// Folds the remaining runs into one spanning `[start, end)`. Exactly two
/// runs merge directly across the whole range; with three or more, X,Y
/// merge when the top run outweighs the third-from-top, otherwise Y,Z.
fn collapse<S, F>(seq: &mut S, runs: &mut Vec<Run>, start: usize, end: usize, compare: &mut F)
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    loop {
        let n = runs.len();
        if n < 2 {
            break;
        }
        if n == 2 {
            merge(seq, start, runs[1].start, end, compare);
            break;
        }
        if runs[n - 1].len > runs[n - 3].len {
            merge_runs(seq, runs, n - 3, compare);
        } else {
            merge_runs(seq, runs, n - 2, compare);
        }
    }
}

/// Merges `runs[idx]` with `runs[idx + 1]`, replacing both with the
/// combined run.
fn merge_runs<S, F>(seq: &mut S, runs: &mut Vec<Run>, idx: usize, compare: &mut F)
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let left = runs[idx];
    let right = runs[idx + 1];
    debug_assert_eq!(left.start + left.len, right.start);

    merge(seq, left.start, right.start, right.start + right.len, compare);

    runs[idx] = Run {
        start: left.start,
        len: left.len + right.len,
    };
    runs.remove(idx + 1);
}

/// Merges the adjacent sorted runs `[start, mid)` and `[mid, end)`. The
/// left run is copied into a scratch buffer and the result is written
/// back over `[start, end)`; ties take the buffered left element first.
/// After `GALLOP_COUNT` consecutive wins by either side, a binary search
/// finds the whole stretch that side may emit before the other side's
/// next element, and the stretch is copied in bulk. Once the right run
/// drains, the buffered remainder is copied without further comparisons.
fn merge<S, F>(seq: &mut S, start: usize, mid: usize, end: usize, compare: &mut F)
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let buf = common::collect_range(seq, start, mid);

    let mut idx = 0;
    let mut right = mid;
    let mut out = start;
    let mut left_streak = 0;
    let mut right_streak = 0;

    while idx < buf.len() && right < end {
        if compare(&buf[idx], seq.get(right)) != Ordering::Greater {
            seq.set(out, buf[idx].clone());
            idx += 1;
            out += 1;
            left_streak += 1;
            right_streak = 0;

            if left_streak == GALLOP_COUNT {
                left_streak = 0;
                let stretch = gallop_left(&buf, idx, seq.get(right), compare);
                for _ in 0..stretch {
                    seq.set(out, buf[idx].clone());
                    idx += 1;
                    out += 1;
                }
            }
        } else {
            let value = seq.get(right).clone();
            seq.set(out, value);
            right += 1;
            out += 1;
            right_streak += 1;
            left_streak = 0;

            if right_streak == GALLOP_COUNT {
                right_streak = 0;
                let stretch = gallop_right(seq, right, end, &buf[idx], compare);
                for _ in 0..stretch {
                    let value = seq.get(right).clone();
                    seq.set(out, value);
                    right += 1;
                    out += 1;
                }
            }
        }
    }

    while idx < buf.len() {
        seq.set(out, buf[idx].clone());
        idx += 1;
        out += 1;
    }
}

/// Number of buffered left elements from `idx` onward that compare `<=`
/// the next right element and may be emitted ahead of it.
fn gallop_left<T, F>(buf: &[T], idx: usize, next_right: &T, compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut lo = idx;
    let mut hi = buf.len();
    while lo < hi {
        let m = lo + ((hi - lo) >> 1);
        if compare(&buf[m], next_right) == Ordering::Greater {
            hi = m;
        } else {
            lo = m + 1;
        }
    }
    lo - idx
}

/// Number of right-run elements from `right` onward that compare strictly
/// `<` the next buffered left element; the strict bound keeps equal
/// elements emitting from the left first.
fn gallop_right<S, F>(
    seq: &S,
    right: usize,
    end: usize,
    next_left: &S::Item,
    compare: &mut F,
) -> usize
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let mut lo = right;
    let mut hi = end;
    while lo < hi {
        let m = lo + ((hi - lo) >> 1);
        if compare(seq.get(m), next_left) == Ordering::Less {
            lo = m + 1;
        } else {
            hi = m;
        }
    }
    lo - right
}
