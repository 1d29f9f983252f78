//! Classic comparison sorts over ordered numeric sequences.
//!
//! Every algorithm comes in three shapes:
//! - `*_sort` copies the input, sorts the copy and reports to `tracing`,
//! - `*_sort_with` does the same but reports to a caller-chosen [`Sink`],
//! - `*_sort_in_place` is the bare algorithm, counting its work in
//!   [`SortStats`].
//!
//! The copying shapes emit exactly one [`Event::Sorted`] per call.

use foundation::{Event, Op, Sink, SortStats, Stopwatch};

pub mod algorithm;
pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod selection;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use bubble::{bubble_sort, bubble_sort_in_place, bubble_sort_with};
pub use insertion::{insertion_sort, insertion_sort_in_place, insertion_sort_with};
pub use merge::{merge, merge_sort, merge_sort_in_place, merge_sort_with, merge_sort_with_buffer};
pub use selection::{selection_sort, selection_sort_in_place, selection_sort_with};

/// Check if a slice is sorted in non-decreasing order.
#[inline]
pub fn is_sorted<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Copy, sort, report.
pub(crate) fn run<T, S>(
    op: Op,
    numbers: &[T],
    mut sink: S,
    sort: fn(&mut [T], &mut SortStats),
) -> Vec<T>
where
    T: Copy,
    S: Sink,
{
    let watch = Stopwatch::start();
    let mut sorted = numbers.to_vec();
    let mut stats = SortStats::default();
    sort(&mut sorted, &mut stats);
    sink.record(&Event::Sorted {
        op,
        len: sorted.len(),
        stats,
        elapsed: watch.elapsed(),
    });
    sorted
}
