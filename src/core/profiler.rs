//! Allocation tracking for `--mem-profile`.
//!
//! [`TrackingAllocator`] wraps the system allocator and keeps live/peak byte
//! counters.  It only observes anything once a binary registers it as the
//! `#[global_allocator]`; until then [`MemoryProfiler`] reports "not
//! measured".

use std::{
    alloc::{GlobalAlloc, Layout, System},
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
};

use tracing::debug;

use crate::core::result::MemoryStats;

static LIVE: AtomicUsize = AtomicUsize::new(0);
static PEAK: AtomicUsize = AtomicUsize::new(0);
static INSTALLED: AtomicBool = AtomicBool::new(false);

/// Counting wrapper around [`System`].
pub struct TrackingAllocator;

impl TrackingAllocator {
    /// Has any allocation been routed through us yet?
    #[must_use]
    pub fn is_installed() -> bool {
        INSTALLED.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn live_bytes() -> usize {
        LIVE.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn peak_bytes() -> usize {
        PEAK.load(Ordering::Relaxed)
    }

    /// Drop the high-water mark back to the current live count.
    pub fn reset_peak() {
        PEAK.store(LIVE.load(Ordering::Relaxed), Ordering::Relaxed);
    }

    fn record_alloc(size: usize) {
        INSTALLED.store(true, Ordering::Relaxed);
        let live = LIVE.fetch_add(size, Ordering::Relaxed) + size;
        PEAK.fetch_max(live, Ordering::Relaxed);
    }

    fn record_dealloc(size: usize) {
        LIVE.fetch_sub(size, Ordering::Relaxed);
    }
}

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            Self::record_alloc(layout.size());
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            Self::record_alloc(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        Self::record_dealloc(layout.size());
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            Self::record_dealloc(layout.size());
            Self::record_alloc(new_size);
        }
        new_ptr
    }
}

/// Measures memory allocated strictly while a closure runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct MemoryProfiler;

impl MemoryProfiler {
    /// Run `f`, returning its output plus live/peak bytes relative to the
    /// start of the call.  `None` when the tracking allocator is absent.
    pub fn measure<T>(&self, f: impl FnOnce() -> T) -> (T, Option<MemoryStats>) {
        if !TrackingAllocator::is_installed() {
            debug!("tracking allocator not installed; memory not measured");
            return (f(), None);
        }

        let baseline = TrackingAllocator::live_bytes();
        TrackingAllocator::reset_peak();

        let out = f();

        let stats = MemoryStats {
            current: TrackingAllocator::live_bytes().saturating_sub(baseline),
            peak: TrackingAllocator::peak_bytes().saturating_sub(baseline),
        };
        (out, Some(stats))
    }
}
