//! Coarse memory measurement.
//!
//! [`measure`] samples "bytes in use" right before and right after running an
//! operation and returns the signed difference. The number is approximate:
//! other threads allocate and free concurrently, and the source of the sample
//! depends on the platform and on how the binary was built.
//!
//! Sources, best first:
//! - [`CountingAllocator`] installed as `#[global_allocator]` and announced
//!   with [`counting::mark_installed`]: bytes handed out minus bytes
//!   returned, counted exactly but process-wide,
//! - [`RssProbe`]: resident set size from `/proc/self/statm`, page granular,
//! - [`ZeroProbe`]: nothing available, every delta is 0.

pub mod counting;
mod measure;
mod probe;

pub use counting::{AllocStats, CountingAllocator};
pub use measure::{measure, Measurement, Meter};
pub use probe::{AllocatorProbe, DefaultProbe, HeapProbe, ProbeError, ProbeKind, RssProbe, ZeroProbe};
