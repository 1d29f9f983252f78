use crate::event::{Event, Op, SortStats};

/// Destination for diagnostic events.
pub trait Sink {
    fn record(&mut self, event: &Event<'_>);
}

// Allow passing `&mut sink` where a sink is taken by value.
impl<S: Sink + ?Sized> Sink for &mut S {
    #[inline]
    fn record(&mut self, event: &Event<'_>) {
        (**self).record(event)
    }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl Sink for NullSink {
    #[inline]
    fn record(&mut self, _event: &Event<'_>) {}
}

/// Forwards every event to `tracing` at DEBUG under the `dsa` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn record(&mut self, event: &Event<'_>) {
        let elapsed_us = event.elapsed().as_micros() as u64;
        match *event {
            Event::Peek {
                op,
                first: Some(name),
                ..
            } => {
                tracing::debug!(target: "dsa", op = %op, name, elapsed_us, "peek");
            }
            Event::Peek {
                op, first: None, ..
            } => {
                tracing::debug!(target: "dsa", op = %op, elapsed_us, "no names");
            }
            Event::Visit {
                op, index, name, ..
            } => {
                tracing::debug!(target: "dsa", op = %op, index, name, elapsed_us, "visit");
            }
            Event::VisitPair {
                op,
                outer,
                inner,
                name,
                other,
                ..
            } => {
                tracing::debug!(
                    target: "dsa",
                    op = %op,
                    outer,
                    inner,
                    elapsed_us,
                    "{name} of {other}"
                );
            }
            Event::Sorted { op, len, stats, .. } => {
                tracing::debug!(
                    target: "dsa",
                    op = %op,
                    len,
                    comparisons = stats.comparisons,
                    moves = stats.moves,
                    elapsed_us,
                    "sorted"
                );
            }
        }
    }
}

/// Adapts a closure into a sink.
pub struct FnSink<F>(pub F);

impl<F> FnSink<F>
where
    F: FnMut(&Event<'_>),
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> Sink for FnSink<F>
where
    F: FnMut(&Event<'_>),
{
    #[inline]
    fn record(&mut self, event: &Event<'_>) {
        (self.0)(event)
    }
}

/// Owned copy of an [`Event`], minus timing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Recorded {
    Peek {
        op: Op,
        first: Option<String>,
    },
    Visit {
        op: Op,
        index: usize,
        name: String,
    },
    VisitPair {
        op: Op,
        outer: usize,
        inner: usize,
    },
    Sorted {
        op: Op,
        len: usize,
        stats: SortStats,
    },
}

impl Recorded {
    pub fn op(&self) -> Op {
        match *self {
            Recorded::Peek { op, .. }
            | Recorded::Visit { op, .. }
            | Recorded::VisitPair { op, .. }
            | Recorded::Sorted { op, .. } => op,
        }
    }
}

impl From<&Event<'_>> for Recorded {
    fn from(event: &Event<'_>) -> Self {
        match *event {
            Event::Peek { op, first, .. } => Recorded::Peek {
                op,
                first: first.map(str::to_owned),
            },
            Event::Visit {
                op, index, name, ..
            } => Recorded::Visit {
                op,
                index,
                name: name.to_owned(),
            },
            Event::VisitPair {
                op, outer, inner, ..
            } => Recorded::VisitPair { op, outer, inner },
            Event::Sorted { op, len, stats, .. } => Recorded::Sorted { op, len, stats },
        }
    }
}

/// Keeps every event it sees, in order.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    events: Vec<Recorded>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Recorded] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Recorded> {
        self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn count(&self, op: Op) -> usize {
        self.events.iter().filter(|e| e.op() == op).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Sink for Recorder {
    fn record(&mut self, event: &Event<'_>) {
        self.events.push(Recorded::from(event));
    }
}
