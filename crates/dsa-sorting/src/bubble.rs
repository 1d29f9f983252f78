use foundation::{Op, Sink, SortStats, TracingSink};

/// Repeated adjacent-swap passes until a full pass swaps nothing.
pub fn bubble_sort_in_place<T: Ord>(data: &mut [T], stats: &mut SortStats) {
    if data.len() < 2 {
        return;
    }

    let mut sorted = false;
    while !sorted {
        sorted = true;
        for i in 0..data.len() - 1 {
            stats.comparisons += 1;
            if data[i] > data[i + 1] {
                data.swap(i, i + 1);
                stats.moves += 1;
                sorted = false;
            }
        }
    }
}

pub fn bubble_sort<T: Ord + Copy>(numbers: &[T]) -> Vec<T> {
    bubble_sort_with(numbers, TracingSink)
}

pub fn bubble_sort_with<T: Ord + Copy>(numbers: &[T], sink: impl Sink) -> Vec<T> {
    crate::run(Op::BubbleSort, numbers, sink, bubble_sort_in_place)
}
