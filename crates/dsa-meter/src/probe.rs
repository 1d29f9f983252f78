use core::fmt;
use core::sync::atomic::{AtomicUsize, Ordering};

use crate::counting;

const STATM: &str = "/proc/self/statm";

/// Source of a "bytes in use" reading.
pub trait HeapProbe {
    fn sample(&self) -> usize;

    fn kind(&self) -> ProbeKind;
}

impl<P: HeapProbe + ?Sized> HeapProbe for &P {
    fn sample(&self) -> usize {
        (**self).sample()
    }

    fn kind(&self) -> ProbeKind {
        (**self).kind()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProbeKind {
    Allocator,
    Rss,
    None,
}

impl ProbeKind {
    pub const fn name(self) -> &'static str {
        match self {
            ProbeKind::Allocator => "allocator",
            ProbeKind::Rss => "rss",
            ProbeKind::None => "none",
        }
    }
}

impl fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("resident set size is not available on this platform")]
    Unsupported,
    #[error("failed to read /proc/self/statm")]
    Io(#[from] std::io::Error),
    #[error("malformed /proc/self/statm contents: {0:?}")]
    Malformed(String),
}

/// Bytes held according to the [`CountingAllocator`](crate::CountingAllocator).
#[derive(Clone, Copy, Debug, Default)]
pub struct AllocatorProbe;

impl HeapProbe for AllocatorProbe {
    fn sample(&self) -> usize {
        counting::stats().in_use()
    }

    fn kind(&self) -> ProbeKind {
        ProbeKind::Allocator
    }
}

/// Resident set size, page granular.
///
/// A failed read repeats the last good reading, so a transient error shows up
/// as a zero delta rather than as the whole resident set.
#[derive(Debug)]
pub struct RssProbe {
    page_size: usize,
    last: AtomicUsize,
}

impl RssProbe {
    /// Fails unless a first reading succeeds.
    pub fn open() -> Result<Self, ProbeError> {
        let probe = Self {
            page_size: page_size()?,
            last: AtomicUsize::new(0),
        };
        let first = probe.read()?;
        probe.last.store(first, Ordering::Relaxed);
        Ok(probe)
    }

    pub fn read(&self) -> Result<usize, ProbeError> {
        let statm = std::fs::read_to_string(STATM)?;
        Ok(parse_resident_pages(&statm)? * self.page_size)
    }

    fn settle(&self, reading: Result<usize, ProbeError>) -> usize {
        match reading {
            Ok(bytes) => {
                self.last.store(bytes, Ordering::Relaxed);
                bytes
            }
            Err(err) => {
                let last = self.last.load(Ordering::Relaxed);
                tracing::warn!(%err, last, "rss sample failed, repeating last reading");
                last
            }
        }
    }
}

impl HeapProbe for RssProbe {
    fn sample(&self) -> usize {
        self.settle(self.read())
    }

    fn kind(&self) -> ProbeKind {
        ProbeKind::Rss
    }
}

fn page_size() -> Result<usize, ProbeError> {
    cfg_if::cfg_if! {
        if #[cfg(target_os = "linux")] {
            let size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
            if size <= 0 {
                return Err(ProbeError::Unsupported);
            }
            Ok(size as usize)
        } else {
            Err(ProbeError::Unsupported)
        }
    }
}

/// Second field of statm: resident pages.
fn parse_resident_pages(statm: &str) -> Result<usize, ProbeError> {
    statm
        .split_whitespace()
        .nth(1)
        .and_then(|field| field.parse().ok())
        .ok_or_else(|| ProbeError::Malformed(statm.trim().to_string()))
}

/// Always reads 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroProbe;

impl HeapProbe for ZeroProbe {
    fn sample(&self) -> usize {
        0
    }

    fn kind(&self) -> ProbeKind {
        ProbeKind::None
    }
}

/// Best probe available to this process.
#[derive(Debug)]
pub enum DefaultProbe {
    Allocator(AllocatorProbe),
    Rss(RssProbe),
    Zero(ZeroProbe),
}

impl DefaultProbe {
    pub fn detect() -> Self {
        if counting::is_active() {
            return DefaultProbe::Allocator(AllocatorProbe);
        }
        match RssProbe::open() {
            Ok(rss) => DefaultProbe::Rss(rss),
            Err(err) => {
                tracing::warn!(%err, "no memory probe available, deltas will read 0");
                DefaultProbe::Zero(ZeroProbe)
            }
        }
    }
}

impl HeapProbe for DefaultProbe {
    fn sample(&self) -> usize {
        match self {
            DefaultProbe::Allocator(p) => p.sample(),
            DefaultProbe::Rss(p) => p.sample(),
            DefaultProbe::Zero(p) => p.sample(),
        }
    }

    fn kind(&self) -> ProbeKind {
        match self {
            DefaultProbe::Allocator(p) => p.kind(),
            DefaultProbe::Rss(p) => p.kind(),
            DefaultProbe::Zero(p) => p.kind(),
        }
    }
}
