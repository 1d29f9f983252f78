use foundation::{Op, Sink, SortStats, TracingSink};

/// Shift each element left past its larger sorted predecessors.
///
/// Already sorted input costs `n - 1` comparisons and no moves.
pub fn insertion_sort_in_place<T: Ord + Copy>(data: &mut [T], stats: &mut SortStats) {
    for i in 1..data.len() {
        let current = data[i];
        let mut j = i;
        while j > 0 {
            stats.comparisons += 1;
            if data[j - 1] <= current {
                break;
            }
            data[j] = data[j - 1];
            stats.moves += 1;
            j -= 1;
        }
        if j != i {
            data[j] = current;
            stats.moves += 1;
        }
    }
}

pub fn insertion_sort<T: Ord + Copy>(numbers: &[T]) -> Vec<T> {
    insertion_sort_with(numbers, TracingSink)
}

pub fn insertion_sort_with<T: Ord + Copy>(numbers: &[T], sink: impl Sink) -> Vec<T> {
    crate::run(Op::InsertionSort, numbers, sink, insertion_sort_in_place)
}
