use core::fmt;
use core::str::FromStr;

use foundation::{Op, Sink, SortStats, TracingSink};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown sorting algorithm `{0}` (expected bubble, selection, insertion or merge)")]
pub struct ParseAlgorithmError(String);

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
    ];

    pub const fn op(self) -> Op {
        match self {
            Algorithm::Bubble => Op::BubbleSort,
            Algorithm::Selection => Op::SelectionSort,
            Algorithm::Insertion => Op::InsertionSort,
            Algorithm::Merge => Op::MergeSort,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
        }
    }

    pub fn sort_in_place<T: Ord + Copy>(self, data: &mut [T], stats: &mut SortStats) {
        match self {
            Algorithm::Bubble => crate::bubble_sort_in_place(data, stats),
            Algorithm::Selection => crate::selection_sort_in_place(data, stats),
            Algorithm::Insertion => crate::insertion_sort_in_place(data, stats),
            Algorithm::Merge => crate::merge_sort_in_place(data, stats),
        }
    }

    pub fn sort<T: Ord + Copy>(self, numbers: &[T]) -> Vec<T> {
        self.sort_with(numbers, TracingSink)
    }

    pub fn sort_with<T: Ord + Copy>(self, numbers: &[T], sink: impl Sink) -> Vec<T> {
        match self {
            Algorithm::Bubble => crate::bubble_sort_with(numbers, sink),
            Algorithm::Selection => crate::selection_sort_with(numbers, sink),
            Algorithm::Insertion => crate::insertion_sort_with(numbers, sink),
            Algorithm::Merge => crate::merge_sort_with(numbers, sink),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Accepts `merge`, `Merge`, `merge-sort`, `merge_sort`, ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let base = lower
            .strip_suffix("-sort")
            .or_else(|| lower.strip_suffix("_sort"))
            .or_else(|| lower.strip_suffix("sort"))
            .unwrap_or(&lower);

        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == base)
            .ok_or_else(|| ParseAlgorithmError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foundation::Recorder;

    #[test]
    fn test_parse() {
        assert_eq!("bubble".parse(), Ok(Algorithm::Bubble));
        assert_eq!("Selection".parse(), Ok(Algorithm::Selection));
        assert_eq!("insertion-sort".parse(), Ok(Algorithm::Insertion));
        assert_eq!("merge_sort".parse(), Ok(Algorithm::Merge));
        assert_eq!("mergesort".parse(), Ok(Algorithm::Merge));
        assert!("quick".parse::<Algorithm>().is_err());
        assert!("".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse(), Ok(algorithm));
        }
    }

    #[test]
    fn test_every_algorithm_sorts_and_reports_its_op() {
        let input = [9, -3, 4, 4, 0, 12, -7];
        for algorithm in Algorithm::ALL {
            let mut recorder = Recorder::new();
            let sorted = algorithm.sort_with(&input, &mut recorder);
            assert_eq!(sorted, [-7, -3, 0, 4, 4, 9, 12], "{algorithm}");
            assert_eq!(recorder.len(), 1);
            assert_eq!(recorder.count(algorithm.op()), 1);

            let mut data = input;
            let mut stats = SortStats::default();
            algorithm.sort_in_place(&mut data, &mut stats);
            assert_eq!(data.as_slice(), sorted.as_slice());
        }
    }
}
