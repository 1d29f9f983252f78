use foundation::{Op, Sink, SortStats, TracingSink};

/// Swap the minimum of `data[i..]` into position `i`, for every `i` but the
/// last.
pub fn selection_sort_in_place<T: Ord>(data: &mut [T], stats: &mut SortStats) {
    let n = data.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            stats.comparisons += 1;
            if data[j] < data[min] {
                min = j;
            }
        }
        if min != i {
            data.swap(i, min);
            stats.moves += 1;
        }
    }
}

pub fn selection_sort<T: Ord + Copy>(numbers: &[T]) -> Vec<T> {
    selection_sort_with(numbers, TracingSink)
}

pub fn selection_sort_with<T: Ord + Copy>(numbers: &[T], sink: impl Sink) -> Vec<T> {
    crate::run(Op::SelectionSort, numbers, sink, selection_sort_in_place)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_sort() {
        assert_eq!(selection_sort(&[5, 3, 1, 4, 2]), [1, 2, 3, 4, 5]);
        assert_eq!(selection_sort(&[2, 2, 1, 1]), [1, 1, 2, 2]);
    }

    #[test]
    fn test_comparisons_are_quadratic_swaps_linear() {
        let mut data: Vec<i64> = (0..20).rev().collect();
        let mut stats = SortStats::default();
        selection_sort_in_place(&mut data, &mut stats);
        assert_eq!(stats.comparisons, 20 * 19 / 2);
        assert!(stats.moves < 20);
    }

    #[test]
    fn test_short_inputs() {
        let mut stats = SortStats::default();
        let mut empty: [i64; 0] = [];
        selection_sort_in_place(&mut empty, &mut stats);
        let mut one = [7];
        selection_sort_in_place(&mut one, &mut stats);
        assert_eq!(one, [7]);
        assert_eq!(stats, SortStats::default());
    }
}
