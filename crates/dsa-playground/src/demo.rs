use core::convert::Infallible;

use anyhow::ensure;
use derive_builder::Builder;
use foundation::{Event, FnSink, NullSink, Op, Sink, SortStats, Stopwatch, TracingSink};
use meter::Meter;
use sorting::Algorithm;

use crate::report::{MemoryReading, Report};

#[derive(Clone, Debug, Builder)]
#[builder(default)]
pub struct RunOptions {
    /// Print every visited name to stdout.
    pub echo: bool,
    /// Repeat the demonstration under the meter.
    pub measure: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            echo: false,
            measure: true,
        }
    }
}

/// The three traversal demonstrations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scan {
    Constant,
    Linear,
    Quadratic,
}

impl Scan {
    pub const fn op(self) -> Op {
        match self {
            Scan::Constant => Op::CheckFirst,
            Scan::Linear => Op::PrintNames,
            Scan::Quadratic => Op::PrintNamesTwice,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Scan::Constant => "Constant Time",
            Scan::Linear => "Linear Time",
            Scan::Quadratic => "Quadratic Time",
        }
    }

    fn run(self, names: &[String], sink: impl Sink) {
        match self {
            Scan::Constant => complexity::check_first_with(names, sink),
            Scan::Linear => complexity::print_names_with(names, sink),
            Scan::Quadratic => complexity::print_names_twice_with(names, sink),
        }
    }
}

fn echo(event: &Event<'_>) {
    match *event {
        Event::Peek {
            first: Some(name), ..
        }
        | Event::Visit { name, .. }
        | Event::VisitPair { name, .. } => println!("{name}"),
        Event::Peek { first: None, .. } | Event::Sorted { .. } => {}
    }
}

fn reading<T>(m: &meter::Measurement<T>) -> MemoryReading {
    MemoryReading {
        delta_bytes: m.delta,
        probe: m.probe.name(),
    }
}

pub fn run_scan(scan: Scan, names: &[String], opts: &RunOptions) -> Report {
    tracing::info!(demo = scan.title(), names = names.len(), "running");

    let mut visits = 0usize;
    let watch = Stopwatch::start();
    scan.run(
        names,
        FnSink::new(|event| {
            visits += 1;
            if opts.echo {
                echo(event);
            }
            TracingSink.record(event);
        }),
    );
    let elapsed = watch.elapsed();

    let memory = opts.measure.then(|| {
        let measured = Meter::detect()
            .measure_value(|| {
                scan.run(names, TracingSink);
                Ok::<_, Infallible>(())
            })
            .unwrap_or_else(|never| match never {});
        reading(&measured)
    });

    Report {
        demo: scan.op().name(),
        title: scan.title(),
        input_len: names.len(),
        visits: Some(visits),
        comparisons: None,
        moves: None,
        elapsed_us: elapsed.as_micros() as u64,
        memory,
    }
}

pub fn run_sort(algorithm: Algorithm, numbers: &[i64], opts: &RunOptions) -> anyhow::Result<Report> {
    tracing::info!(algorithm = %algorithm, numbers = numbers.len(), "sorting");

    let mut stats = SortStats::default();
    let watch = Stopwatch::start();
    let sorted = algorithm.sort_with(
        numbers,
        FnSink::new(|event| {
            if let Event::Sorted { stats: s, .. } = *event {
                stats = s;
            }
            TracingSink.record(event);
        }),
    );
    let elapsed = watch.elapsed();

    ensure!(
        sorting::is_sorted(&sorted) && sorted.len() == numbers.len(),
        "{algorithm} sort produced an unsorted sequence"
    );

    // The sorted copy stays alive across the second sample, so the reading
    // covers the output buffer.
    let memory = opts.measure.then(|| {
        let measured = Meter::detect()
            .measure_value(|| Ok::<_, Infallible>(algorithm.sort_with(numbers, NullSink)))
            .unwrap_or_else(|never| match never {});
        reading(&measured)
    });

    Ok(Report {
        demo: algorithm.op().name(),
        title: if algorithm == Algorithm::Bubble {
            "Other"
        } else {
            algorithm.op().name()
        },
        input_len: numbers.len(),
        visits: None,
        comparisons: Some(stats.comparisons),
        moves: Some(stats.moves),
        elapsed_us: elapsed.as_micros() as u64,
        memory,
    })
}

/// Every algorithm on the same input.
pub fn compare(numbers: &[i64], opts: &RunOptions) -> anyhow::Result<Vec<Report>> {
    Algorithm::ALL
        .into_iter()
        .map(|algorithm| run_sort(algorithm, numbers, opts))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{generate_numbers, shuffled_numbers};
    use complexity::generate_names;

    fn quiet() -> RunOptions {
        RunOptionsBuilder::default().measure(false).build().unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let opts = RunOptionsBuilder::default().build().unwrap();
        assert!(!opts.echo);
        assert!(opts.measure);
    }

    #[test]
    fn test_scan_visit_counts() {
        let names = generate_names(100);
        assert_eq!(run_scan(Scan::Constant, &names, &quiet()).visits, Some(1));
        assert_eq!(run_scan(Scan::Linear, &names, &quiet()).visits, Some(100));

        let pair = generate_names(2);
        let report = run_scan(Scan::Quadratic, &pair, &quiet());
        assert_eq!(report.visits, Some(4));
        assert_eq!(report.demo, "print_names_twice");
        assert!(report.memory.is_none());
    }

    #[test]
    fn test_empty_constant_scan() {
        let report = run_scan(Scan::Constant, &[], &quiet());
        assert_eq!(report.visits, Some(1));
        assert_eq!(report.input_len, 0);
    }

    #[test]
    fn test_sort_report_carries_stats() {
        let report = run_sort(Algorithm::Insertion, &generate_numbers(50), &quiet()).unwrap();
        assert_eq!(report.comparisons, Some(49));
        assert_eq!(report.moves, Some(0));
    }

    #[test]
    fn test_bubble_is_the_other_demo() {
        let report = run_sort(Algorithm::Bubble, &generate_numbers(3), &quiet()).unwrap();
        assert_eq!(report.title, "Other");
        assert_eq!(report.demo, "bubble_sort");
    }

    #[test]
    fn test_measured_sort_has_reading() {
        // The test binary shares the global counting allocator from main.rs.
        meter::counting::mark_installed();
        let opts = RunOptions::default();
        let report = run_sort(Algorithm::Merge, &shuffled_numbers(10_000, 1), &opts).unwrap();
        let memory = report.memory.unwrap();
        // The retained output (10k i64) dominates the reading.
        assert_eq!(memory.probe, "allocator");
        assert!(memory.delta_bytes > 0, "delta {}", memory.delta_bytes);
    }

    #[test]
    fn test_compare_runs_all_four() {
        let reports = compare(&shuffled_numbers(200, 9), &quiet()).unwrap();
        let demos: Vec<_> = reports.iter().map(|r| r.demo).collect();
        assert_eq!(
            demos,
            ["bubble_sort", "selection_sort", "insertion_sort", "merge_sort"]
        );
        // Same input, so the merge sort does the fewest comparisons.
        let merge = reports[3].comparisons.unwrap();
        assert!(reports[..3].iter().all(|r| r.comparisons.unwrap() > merge));
    }
}
