//! Shared vocabulary for the playground crates.
//!
//! Every instrumented operation reports its work as [`Event`]s pushed into a
//! caller-supplied [`Sink`]. The sorting and complexity crates never print;
//! what happens to an event (a `tracing` record, a test recorder, nothing at
//! all) is decided by whoever calls them.

pub mod clock;
pub mod event;
pub mod sink;

pub use clock::Stopwatch;
pub use event::{Event, Op, SortStats};
pub use sink::{FnSink, NullSink, Recorded, Recorder, Sink, TracingSink};
