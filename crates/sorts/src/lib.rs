//! In-place, comparator-driven sorting over an abstract indexable
//! sequence.
//!
//! Seven interchangeable algorithms sit behind one dispatcher: the
//! O(n²) baselines (selection, bubble, insertion), the classic
//! divide-and-conquer sorts (merge, quick, heap), and an adaptive hybrid
//! merge sort that exploits pre-existing order through natural-run
//! detection and galloping merges. All of them mutate the given
//! half-open range in place and leave everything outside it untouched.

mod algorithms;
mod sequence;

pub use sequence::Sequence;

use std::cmp::Ordering;
use std::error::Error;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortKind {
    Selection,
    Bubble,
    Insertion,
    Merge,
    Quick,
    Heap,
    AdaptiveHybrid,
    /// Resolved against the dispatching [`SortConfig`]'s default kind.
    UseDefault,
}

/// The concrete kinds, in dispatch order. `UseDefault` is a selector,
/// not an algorithm, and is deliberately absent.
pub const ALL_KINDS: [SortKind; 7] = [
    SortKind::Selection,
    SortKind::Bubble,
    SortKind::Insertion,
    SortKind::Merge,
    SortKind::Quick,
    SortKind::Heap,
    SortKind::AdaptiveHybrid,
];

pub fn all_kinds() -> &'static [SortKind] {
    &ALL_KINDS
}

pub fn kind_name(kind: SortKind) -> &'static str {
    match kind {
        SortKind::Selection => "selection",
        SortKind::Bubble => "bubble",
        SortKind::Insertion => "insertion",
        SortKind::Merge => "merge",
        SortKind::Quick => "quick",
        SortKind::Heap => "heap",
        SortKind::AdaptiveHybrid => "adaptive_hybrid",
        SortKind::UseDefault => "use_default",
    }
}

/// Whether a kind guarantees that elements comparing equal keep their
/// original relative order. `AdaptiveHybrid` only makes that guarantee
/// for naturally ascending input, so it is reported unstable here.
pub fn is_stable(kind: SortKind) -> bool {
    matches!(kind, SortKind::Bubble | SortKind::Insertion | SortKind::Merge)
}

/// Programmer errors detected at the dispatch boundary. A rejected call
/// has performed no mutation; there is no partial-failure mode and
/// retrying with the same inputs reproduces the same error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortError {
    /// `start > end`, or `end` past the sequence length.
    InvalidRange { start: usize, end: usize, len: usize },
    /// Attempted to set a config's default kind to `UseDefault`.
    InvalidConfiguration,
    /// Dispatch reached algorithm selection still holding `UseDefault`;
    /// indicates a dispatcher bug, not a caller error.
    UnresolvedKind,
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::InvalidRange { start, end, len } => {
                write!(f, "invalid range [{start}, {end}) for sequence of length {len}")
            }
            SortError::InvalidConfiguration => {
                write!(f, "the default sort kind cannot be set to UseDefault")
            }
            SortError::UnresolvedKind => {
                write!(f, "dispatch reached algorithm selection with UseDefault")
            }
        }
    }
}

impl Error for SortError {}

/// Caller-owned dispatch configuration: holds the kind that `UseDefault`
/// resolves to. The field stays private so a stored `UseDefault` is
/// unrepresentable through the public API.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SortConfig {
    default_kind: SortKind,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            default_kind: SortKind::AdaptiveHybrid,
        }
    }
}

impl SortConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_kind(&self) -> SortKind {
        self.default_kind
    }

    /// Rejects `UseDefault` with [`SortError::InvalidConfiguration`];
    /// the stored default is unchanged on error.
    pub fn set_default_kind(&mut self, kind: SortKind) -> Result<(), SortError> {
        if kind == SortKind::UseDefault {
            return Err(SortError::InvalidConfiguration);
        }
        self.default_kind = kind;
        Ok(())
    }

    /// Whole-sequence sort with this config's default kind.
    pub fn sort<S, F>(&self, seq: &mut S, compare: F) -> Result<(), SortError>
    where
        S: Sequence + ?Sized,
        S::Item: Clone,
        F: FnMut(&S::Item, &S::Item) -> Ordering,
    {
        self.sort_range_with(seq, 0, seq.len(), compare, SortKind::UseDefault)
    }

    /// Ranged sort with this config's default kind.
    pub fn sort_range<S, F>(
        &self,
        seq: &mut S,
        start: usize,
        end: usize,
        compare: F,
    ) -> Result<(), SortError>
    where
        S: Sequence + ?Sized,
        S::Item: Clone,
        F: FnMut(&S::Item, &S::Item) -> Ordering,
    {
        self.sort_range_with(seq, start, end, compare, SortKind::UseDefault)
    }

    /// Whole-sequence sort with an explicit kind (or `UseDefault`).
    pub fn sort_with<S, F>(&self, seq: &mut S, compare: F, kind: SortKind) -> Result<(), SortError>
    where
        S: Sequence + ?Sized,
        S::Item: Clone,
        F: FnMut(&S::Item, &S::Item) -> Ordering,
    {
        self.sort_range_with(seq, 0, seq.len(), compare, kind)
    }

    /// Ranged sort with an explicit kind (or `UseDefault`). Validates the
    /// range before any mutation, then delegates range and comparator
    /// unchanged to exactly one algorithm. Degenerate ranges (length 0
    /// or 1) are no-ops inside each algorithm's own entry.
    pub fn sort_range_with<S, F>(
        &self,
        seq: &mut S,
        start: usize,
        end: usize,
        mut compare: F,
        kind: SortKind,
    ) -> Result<(), SortError>
    where
        S: Sequence + ?Sized,
        S::Item: Clone,
        F: FnMut(&S::Item, &S::Item) -> Ordering,
    {
        let kind = match kind {
            SortKind::UseDefault => self.default_kind,
            concrete => concrete,
        };

        let len = seq.len();
        if start > end || end > len {
            return Err(SortError::InvalidRange { start, end, len });
        }

        match kind {
            SortKind::Selection => algorithms::selection::sort(seq, start, end, &mut compare),
            SortKind::Bubble => algorithms::bubble::sort(seq, start, end, &mut compare),
            SortKind::Insertion => algorithms::insertion::sort(seq, start, end, &mut compare),
            SortKind::Merge => algorithms::merge::sort(seq, start, end, &mut compare),
            SortKind::Quick => algorithms::quick::sort(seq, start, end, &mut compare),
            SortKind::Heap => algorithms::heap::sort(seq, start, end, &mut compare),
            SortKind::AdaptiveHybrid => algorithms::adaptive::sort(seq, start, end, &mut compare),
            SortKind::UseDefault => return Err(SortError::UnresolvedKind),
        }
        Ok(())
    }
}

/// Whole-sequence sort with the default kind (adaptive hybrid).
pub fn sort<S, F>(seq: &mut S, compare: F) -> Result<(), SortError>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    SortConfig::new().sort(seq, compare)
}

/// Ranged sort with the default kind.
pub fn sort_range<S, F>(
    seq: &mut S,
    start: usize,
    end: usize,
    compare: F,
) -> Result<(), SortError>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    SortConfig::new().sort_range(seq, start, end, compare)
}

/// Whole-sequence sort with an explicit kind.
pub fn sort_with<S, F>(seq: &mut S, compare: F, kind: SortKind) -> Result<(), SortError>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    SortConfig::new().sort_with(seq, compare, kind)
}

/// Ranged sort with an explicit kind.
pub fn sort_range_with<S, F>(
    seq: &mut S,
    start: usize,
    end: usize,
    compare: F,
    kind: SortKind,
) -> Result<(), SortError>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    SortConfig::new().sort_range_with(seq, start, end, compare, kind)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn assert_sorts_like_std(data: &[i64]) {
        for &kind in all_kinds() {
            let mut actual = data.to_vec();
            sort_with(&mut actual, |a, b| a.cmp(b), kind).unwrap();

            let mut expected = data.to_vec();
            expected.sort();

            assert_eq!(
                actual,
                expected,
                "kind={} input_len={}",
                kind_name(kind),
                data.len(),
            );
        }
    }

    #[test]
    fn kind_names_are_unique() {
        let mut seen = HashSet::new();
        for &kind in all_kinds() {
            assert!(seen.insert(kind_name(kind)));
        }
        assert!(seen.insert(kind_name(SortKind::UseDefault)));
    }

    #[test]
    fn edge_cases() {
        let cases = [
            vec![],
            vec![42],
            vec![1, 2, 3, 4, 5, 6],
            vec![6, 5, 4, 3, 2, 1],
            vec![7; 128],
            vec![i64::MIN, 1, i64::MAX, 0, i64::MAX - 1, 2],
            vec![5, 5, 3, 3, 1, 1, 4, 4, 2, 2, 0, 0],
        ];

        for case in &cases {
            assert_sorts_like_std(case);
        }
    }

    #[test]
    fn fixed_seed_random_cases() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        // 63, 64, 65 straddle the minrun cutoff and exercise both the
        // natural-run and padded-run branches of the adaptive sort.
        for &size in &[2_usize, 3, 8, 31, 32, 63, 64, 65, 127, 128, 511, 2048] {
            let mut data = Vec::with_capacity(size);
            for _ in 0..size {
                data.push(rng.random::<i64>());
            }
            assert_sorts_like_std(&data);
        }
    }

    #[test]
    fn fixed_seed_many_duplicates() {
        let mut rng = StdRng::seed_from_u64(0xD0D1_2026);
        for &size in &[64_usize, 1024, 4096] {
            let mut data = Vec::with_capacity(size);
            for _ in 0..size {
                data.push((rng.random::<u32>() % 16) as i64 * 17);
            }
            assert_sorts_like_std(&data);
        }
    }

    #[test]
    fn already_sorted_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(0x1D3_2026);
        let mut data: Vec<i64> = (0..512).map(|_| rng.random::<i64>()).collect();
        data.sort();

        for &kind in all_kinds() {
            let mut actual = data.clone();
            sort_with(&mut actual, |a, b| a.cmp(b), kind).unwrap();
            assert_eq!(actual, data, "kind={}", kind_name(kind));
        }
    }

    #[test]
    fn descending_comparator() {
        let mut rng = StdRng::seed_from_u64(0xDE5C_2026);
        let data: Vec<i64> = (0..300).map(|_| rng.random::<i64>()).collect();

        let mut expected = data.clone();
        expected.sort();
        expected.reverse();

        for &kind in all_kinds() {
            let mut actual = data.clone();
            sort_with(&mut actual, |a, b| b.cmp(a), kind).unwrap();
            assert_eq!(actual, expected, "kind={}", kind_name(kind));
        }
    }

    #[test]
    fn adaptive_concrete_scenario() {
        let mut data = vec![1, 5, 0, -2, -1, 4, 5, 4, 3, 8, 1, 9, 0, 20, -25, 133];
        sort_with(&mut data, |a: &i64, b: &i64| a.cmp(b), SortKind::AdaptiveHybrid).unwrap();
        assert_eq!(data, vec![-25, -2, -1, 0, 0, 1, 1, 3, 4, 4, 5, 5, 8, 9, 20, 133]);
    }

    #[test]
    fn quick_concrete_scenario() {
        let mut data = vec![3, 1, 2];
        sort_with(&mut data, |a: &i64, b: &i64| a.cmp(b), SortKind::Quick).unwrap();
        assert_eq!(data, vec![1, 2, 3]);
    }

    // Decorated element for stability checks: compared on `key` only,
    // `tag` records the original position.
    fn tagged(keys: &[u32]) -> Vec<(u32, usize)> {
        keys.iter().enumerate().map(|(i, &k)| (k, i)).collect()
    }

    fn assert_equal_order_preserved(sorted: &[(u32, usize)], kind: SortKind) {
        for pair in sorted.windows(2) {
            assert!(
                pair[0].0 < pair[1].0 || (pair[0].0 == pair[1].0 && pair[0].1 < pair[1].1),
                "kind={} broke order at {:?}",
                kind_name(kind),
                pair,
            );
        }
    }

    #[test]
    fn stable_kinds_preserve_equal_order() {
        let mut rng = StdRng::seed_from_u64(0x57AB_2026);
        let keys: Vec<u32> = (0..400).map(|_| rng.random_range(0..8)).collect();

        for &kind in all_kinds() {
            if !is_stable(kind) {
                continue;
            }
            let mut data = tagged(&keys);
            sort_with(&mut data, |a, b| a.0.cmp(&b.0), kind).unwrap();
            assert_equal_order_preserved(&data, kind);
        }
    }

    #[test]
    fn insertion_keeps_tagged_duplicates_in_order() {
        let mut data = tagged(&[2, 2, 1, 1]);
        sort_with(&mut data, |a, b| a.0.cmp(&b.0), SortKind::Insertion).unwrap();
        assert_eq!(data, vec![(1, 2), (1, 3), (2, 0), (2, 1)]);
    }

    #[test]
    fn adaptive_stable_on_ascending_runs() {
        // Five ascending runs with plenty of ties; no descending run is
        // ever detected, so the stability guarantee applies.
        let mut keys = Vec::new();
        for _ in 0..5 {
            keys.extend((0..120_u32).map(|k| k / 3));
        }

        let mut data = tagged(&keys);
        sort_with(&mut data, |a, b| a.0.cmp(&b.0), SortKind::AdaptiveHybrid).unwrap();
        assert_equal_order_preserved(&data, SortKind::AdaptiveHybrid);
    }

    #[test]
    fn ranged_sort_touches_only_the_range() {
        let mut rng = StdRng::seed_from_u64(0x9A9E_2026);
        let data: Vec<i64> = (0..200).map(|_| rng.random::<i64>()).collect();

        for &kind in all_kinds() {
            let mut actual = data.clone();
            sort_range_with(&mut actual, 40, 160, |a, b| a.cmp(b), kind).unwrap();

            assert_eq!(&actual[..40], &data[..40], "kind={}", kind_name(kind));
            assert_eq!(&actual[160..], &data[160..], "kind={}", kind_name(kind));

            let mut expected = data[40..160].to_vec();
            expected.sort();
            assert_eq!(&actual[40..160], &expected[..], "kind={}", kind_name(kind));
        }
    }

    #[test]
    fn degenerate_ranges_are_noops() {
        let data: Vec<i64> = (0..20).rev().collect();

        for &kind in all_kinds() {
            let mut untouched = data.clone();
            sort_range_with(&mut untouched, 5, 5, |a, b| a.cmp(b), kind).unwrap();
            sort_range_with(&mut untouched, 7, 8, |a, b| a.cmp(b), kind).unwrap();
            assert_eq!(untouched, data, "kind={}", kind_name(kind));
        }
    }

    #[test]
    fn two_element_base_cases() {
        for kind in [SortKind::Merge, SortKind::AdaptiveHybrid] {
            let mut data = vec![9_i64, 4];
            sort_with(&mut data, |a, b| a.cmp(b), kind).unwrap();
            assert_eq!(data, vec![4, 9]);

            let mut data = vec![4_i64, 9];
            sort_with(&mut data, |a, b| a.cmp(b), kind).unwrap();
            assert_eq!(data, vec![4, 9]);
        }
    }

    #[test]
    fn invalid_ranges_are_rejected_before_mutation() {
        let data = vec![3_i64, 1, 2];

        let mut actual = data.clone();
        assert_eq!(
            sort_range(&mut actual, 2, 1, |a, b| a.cmp(b)),
            Err(SortError::InvalidRange { start: 2, end: 1, len: 3 }),
        );
        assert_eq!(actual, data);

        let mut actual = data.clone();
        assert_eq!(
            sort_range(&mut actual, 0, 4, |a, b| a.cmp(b)),
            Err(SortError::InvalidRange { start: 0, end: 4, len: 3 }),
        );
        assert_eq!(actual, data);
    }

    #[test]
    fn default_kind_configuration() {
        let mut config = SortConfig::new();
        assert_eq!(config.default_kind(), SortKind::AdaptiveHybrid);

        assert_eq!(
            config.set_default_kind(SortKind::UseDefault),
            Err(SortError::InvalidConfiguration),
        );
        assert_eq!(config.default_kind(), SortKind::AdaptiveHybrid);

        config.set_default_kind(SortKind::Selection).unwrap();
        assert_eq!(config.default_kind(), SortKind::Selection);

        let mut data = vec![5_i64, 1, 4, 2, 3];
        config.sort(&mut data, |a, b| a.cmp(b)).unwrap();
        assert_eq!(data, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn use_default_resolves_to_configured_kind() {
        let mut config = SortConfig::new();
        config.set_default_kind(SortKind::Bubble).unwrap();

        let mut data = vec![3_i64, 1, 2];
        config
            .sort_with(&mut data, |a, b| a.cmp(b), SortKind::UseDefault)
            .unwrap();
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn min_run_length_values() {
        use crate::algorithms::adaptive::min_run_length;

        assert_eq!(min_run_length(2), 2);
        assert_eq!(min_run_length(63), 63);
        assert_eq!(min_run_length(64), 32);
        assert_eq!(min_run_length(65), 33);
        assert_eq!(min_run_length(96), 48);
        assert_eq!(min_run_length(127), 64);
        assert_eq!(min_run_length(128), 32);
        assert_eq!(min_run_length(2048), 32);
        assert_eq!(min_run_length(2049), 33);

        for n in 64..4096 {
            let minrun = min_run_length(n);
            assert!((32..=64).contains(&minrun), "n={n} minrun={minrun}");
        }
    }

    #[test]
    fn shrunk_sequence_sorts_only_live_elements() {
        let mut rng = StdRng::seed_from_u64(0xC0DE_2026);
        let mut data: Vec<i64> = (0..64).map(|_| rng.random::<i64>()).collect();

        data.drain(..32);
        sort_with(&mut data, |a, b| a.cmp(b), SortKind::Insertion).unwrap();

        assert_eq!(data.len(), 32);
        assert!(data.windows(2).all(|w| w[0] <= w[1]));
    }

    // A sequence the engine only knows through the trait, with its own
    // backing storage layout.
    struct Deck {
        cards: Vec<u16>,
    }

    impl Sequence for Deck {
        type Item = u16;

        fn len(&self) -> usize {
            self.cards.len()
        }

        fn get(&self, index: usize) -> &u16 {
            &self.cards[index]
        }

        fn set(&mut self, index: usize, value: u16) {
            self.cards[index] = value;
        }

        fn swap(&mut self, a: usize, b: usize) {
            self.cards.swap(a, b);
        }
    }

    #[test]
    fn custom_sequence_implementor() {
        let mut rng = StdRng::seed_from_u64(0xDECC_2026);
        let cards: Vec<u16> = (0..500).map(|_| rng.random::<u16>()).collect();

        for &kind in all_kinds() {
            let mut deck = Deck {
                cards: cards.clone(),
            };
            sort_with(&mut deck, |a, b| a.cmp(b), kind).unwrap();

            let mut expected = cards.clone();
            expected.sort();
            assert_eq!(deck.cards, expected, "kind={}", kind_name(kind));
        }
    }

    #[test]
    fn error_messages_name_the_failure() {
        let err = SortError::InvalidRange { start: 4, end: 2, len: 10 };
        assert_eq!(
            err.to_string(),
            "invalid range [4, 2) for sequence of length 10"
        );
        assert!(SortError::InvalidConfiguration.to_string().contains("UseDefault"));
    }
}
