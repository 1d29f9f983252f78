//! Top-down merge sort.
//!
//! Runs are split at `n / 2` and merged through one auxiliary buffer of the
//! same length as the input. Ties are taken from the left run, so the sort is
//! stable.

use foundation::{Op, Sink, SortStats, TracingSink};

/// Merge two sorted slices into the output buffer
///
/// `left` and `right` are treated as one run laid out back to back, so a
/// write only counts as a move when the element lands somewhere other than
/// its index in that run.
pub fn merge<T: Ord + Copy>(left: &[T], right: &[T], output: &mut [T], stats: &mut SortStats) {
    debug_assert!(output.len() >= left.len() + right.len());

    let mut i = 0;
    let mut j = 0;
    let mut k = 0;

    while i < left.len() && j < right.len() {
        stats.comparisons += 1;
        if left[i] <= right[j] {
            output[k] = left[i];
            stats.moves += u64::from(i != k);
            i += 1;
        } else {
            output[k] = right[j];
            stats.moves += u64::from(left.len() + j != k);
            j += 1;
        }
        k += 1;
    }

    // Whichever run is left over is already in order. A right remainder is
    // already in its final place.
    if i < left.len() {
        let rest = &left[i..];
        output[k..k + rest.len()].copy_from_slice(rest);
        stats.moves += rest.len() as u64 * u64::from(i != k);
    } else {
        let rest = &right[j..];
        output[k..k + rest.len()].copy_from_slice(rest);
    }
}

/// Merge sort using a caller-provided auxiliary buffer (`aux.len() >= arr.len()`).
pub fn merge_sort_with_buffer<T: Ord + Copy>(arr: &mut [T], aux: &mut [T], stats: &mut SortStats) {
    let n = arr.len();
    if n <= 1 {
        return;
    }

    let mid = n / 2;

    merge_sort_with_buffer(&mut arr[..mid], &mut aux[..mid], stats);
    merge_sort_with_buffer(&mut arr[mid..], &mut aux[mid..n], stats);

    merge(&arr[..mid], &arr[mid..], &mut aux[..n], stats);

    arr.copy_from_slice(&aux[..n]);
}

pub fn merge_sort_in_place<T: Ord + Copy>(data: &mut [T], stats: &mut SortStats) {
    if data.len() <= 1 {
        return;
    }
    let mut aux = data.to_vec();
    merge_sort_with_buffer(data, &mut aux, stats);
}

pub fn merge_sort<T: Ord + Copy>(numbers: &[T]) -> Vec<T> {
    merge_sort_with(numbers, TracingSink)
}

pub fn merge_sort_with<T: Ord + Copy>(numbers: &[T], sink: impl Sink) -> Vec<T> {
    crate::run(Op::MergeSort, numbers, sink, merge_sort_in_place)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cmp::Ordering;

    #[test]
    fn test_merge() {
        let left = [1, 3, 5, 7];
        let right = [2, 4, 6, 8];
        let mut output = [0u32; 8];
        let mut stats = SortStats::default();
        merge(&left, &right, &mut output, &mut stats);
        assert_eq!(output, [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(stats.comparisons, 7);
        // 1 and 8 are already where they belong.
        assert_eq!(stats.moves, 6);
    }

    #[test]
    fn test_merge_counts_displaced_left_remainder() {
        let mut output = [0u32; 5];
        let mut stats = SortStats::default();
        merge(&[5, 6, 7], &[1, 2], &mut output, &mut stats);
        assert_eq!(output, [1, 2, 5, 6, 7]);
        assert_eq!(stats.comparisons, 2);
        assert_eq!(stats.moves, 5);
    }

    #[test]
    fn test_sorted_input_needs_no_moves() {
        let mut data: Vec<u32> = (1..=8).collect();
        let mut stats = SortStats::default();
        merge_sort_in_place(&mut data, &mut stats);
        assert_eq!(data, (1..=8).collect::<Vec<_>>());
        assert_eq!(stats.comparisons, 12);
        assert_eq!(stats.moves, 0);
    }

    #[test]
    fn test_merge_uneven_runs() {
        let mut output = [0u32; 5];
        let mut stats = SortStats::default();
        merge(&[9], &[1, 2, 3, 4], &mut output, &mut stats);
        assert_eq!(output, [1, 2, 3, 4, 9]);
    }

    #[test]
    fn test_merge_sort() {
        assert_eq!(merge_sort(&[5, 2, 8, 1, 9, 3, 7, 4, 6]), [1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(merge_sort::<i64>(&[]), Vec::<i64>::new());
        assert_eq!(merge_sort(&[7]), [7]);
    }

    #[test]
    fn test_merge_sort_is_idempotent() {
        let once = merge_sort(&[3, -1, 3, 0, 12, -8]);
        let twice = merge_sort(&once);
        assert_eq!(once, twice);
    }

    // Compares on `key` only, so equal keys reveal the original order.
    #[derive(Clone, Copy, Debug)]
    struct Tagged {
        key: u8,
        tag: u8,
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for Tagged {}

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> Ordering {
            self.key.cmp(&other.key)
        }
    }

    #[test]
    fn test_merge_sort_is_stable() {
        let input: Vec<Tagged> = [2, 1, 2, 1, 2, 0]
            .iter()
            .enumerate()
            .map(|(tag, &key)| Tagged { key, tag: tag as u8 })
            .collect();
        let sorted = merge_sort(&input);
        let tags: Vec<u8> = sorted.iter().map(|t| t.tag).collect();
        assert_eq!(tags, [5, 1, 3, 0, 2, 4]);
    }
}
