use core::alloc::{GlobalAlloc, Layout};
use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::alloc::System;

static ALLOCATED: AtomicUsize = AtomicUsize::new(0);
static FREED: AtomicUsize = AtomicUsize::new(0);
static INSTALLED: AtomicBool = AtomicBool::new(false);

/// Allocator wrapper that keeps process-wide byte totals.
///
/// ```ignore
/// #[global_allocator]
/// static GLOBAL: meter::CountingAllocator = meter::CountingAllocator::system();
///
/// fn main() {
///     meter::counting::mark_installed();
///     // ...
/// }
/// ```
///
/// The totals are shared by every instance, so installing it once as the
/// global allocator is the only meaningful use. Rust gives no way to ask
/// which allocator is global, so the binary has to say so with
/// [`mark_installed`].
pub struct CountingAllocator<A = System> {
    inner: A,
}

impl CountingAllocator<System> {
    pub const fn system() -> Self {
        Self { inner: System }
    }
}

impl<A> CountingAllocator<A> {
    pub const fn new(inner: A) -> Self {
        Self { inner }
    }
}

unsafe impl<A: GlobalAlloc> GlobalAlloc for CountingAllocator<A> {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = self.inner.alloc(layout);
        if !ptr.is_null() {
            ALLOCATED.fetch_add(layout.size(), Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = self.inner.alloc_zeroed(layout);
        if !ptr.is_null() {
            ALLOCATED.fetch_add(layout.size(), Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        self.inner.dealloc(ptr, layout);
        FREED.fetch_add(layout.size(), Ordering::Relaxed);
    }

    unsafe fn realloc(&self, ptr: *mut u8, old_layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = self.inner.realloc(ptr, old_layout, new_size);
        if !new_ptr.is_null() {
            ALLOCATED.fetch_add(new_size, Ordering::Relaxed);
            FREED.fetch_add(old_layout.size(), Ordering::Relaxed);
        }
        new_ptr
    }
}

/// Running totals since process start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AllocStats {
    pub allocated: usize,
    pub freed: usize,
}

impl AllocStats {
    /// Bytes currently held.
    pub fn in_use(&self) -> usize {
        // The two loads are not atomic together; a racing free may be seen
        // before its allocation.
        self.allocated.saturating_sub(self.freed)
    }
}

pub fn stats() -> AllocStats {
    AllocStats {
        allocated: ALLOCATED.load(Ordering::Relaxed),
        freed: FREED.load(Ordering::Relaxed),
    }
}

/// Declare that a [`CountingAllocator`] is the `#[global_allocator]`.
///
/// Only then do the totals cover every allocation in the process.
pub fn mark_installed() {
    INSTALLED.store(true, Ordering::Release);
}

/// Whether [`mark_installed`] has been called.
///
/// Traffic through a wrapper that is not the global allocator does not count.
pub fn is_active() -> bool {
    INSTALLED.load(Ordering::Acquire)
}
