use core::fmt;
use core::time::Duration;

/// Instrumented operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    CheckFirst,
    PrintNames,
    PrintNamesTwice,
    BubbleSort,
    SelectionSort,
    InsertionSort,
    MergeSort,
}

impl Op {
    pub const ALL: [Op; 7] = [
        Op::CheckFirst,
        Op::PrintNames,
        Op::PrintNamesTwice,
        Op::BubbleSort,
        Op::SelectionSort,
        Op::InsertionSort,
        Op::MergeSort,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Op::CheckFirst => "check_first",
            Op::PrintNames => "print_names",
            Op::PrintNamesTwice => "print_names_twice",
            Op::BubbleSort => "bubble_sort",
            Op::SelectionSort => "selection_sort",
            Op::InsertionSort => "insertion_sort",
            Op::MergeSort => "merge_sort",
        }
    }

    pub const fn is_sort(self) -> bool {
        matches!(
            self,
            Op::BubbleSort | Op::SelectionSort | Op::InsertionSort | Op::MergeSort
        )
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Work counters filled in by a sort.
///
/// `moves` counts element writes that change an element's position; a swap
/// counts once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortStats {
    pub comparisons: u64,
    pub moves: u64,
}

/// One diagnostic record. `elapsed` is measured from entry into the
/// operation that emitted it.
#[derive(Clone, Copy, Debug)]
pub enum Event<'a> {
    Peek {
        op: Op,
        first: Option<&'a str>,
        elapsed: Duration,
    },
    Visit {
        op: Op,
        index: usize,
        name: &'a str,
        elapsed: Duration,
    },
    VisitPair {
        op: Op,
        outer: usize,
        inner: usize,
        name: &'a str,
        other: &'a str,
        elapsed: Duration,
    },
    Sorted {
        op: Op,
        len: usize,
        stats: SortStats,
        elapsed: Duration,
    },
}

impl Event<'_> {
    pub fn op(&self) -> Op {
        match *self {
            Event::Peek { op, .. }
            | Event::Visit { op, .. }
            | Event::VisitPair { op, .. }
            | Event::Sorted { op, .. } => op,
        }
    }

    pub fn elapsed(&self) -> Duration {
        match *self {
            Event::Peek { elapsed, .. }
            | Event::Visit { elapsed, .. }
            | Event::VisitPair { elapsed, .. }
            | Event::Sorted { elapsed, .. } => elapsed,
        }
    }
}
