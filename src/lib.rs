//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

use std::time::Instant;

pub use crate::core::{
    color::{AnsiCode, PALETTE},
    config::{Config, ConfigBuilder, InputSource},
    error::{AnimationUnavailable, ConfigError, FestError},
    finder::{DuplicateFinder, HistogramFinder},
    profiler::{MemoryProfiler, TrackingAllocator},
    result::{AnalysisResult, MemoryStats},
};

pub use render::{
    AnimatedVisualizer, BalloonSlot, BalloonStyle, Layout, SummaryVisualizer, Visualizer,
};

/// Run `finder` over `text`, timing it and, when `profile` is set, measuring
/// the memory it allocates.
pub fn analyze<F: DuplicateFinder + ?Sized>(text: &str, finder: &F, profile: bool) -> AnalysisResult {
    let timed = || {
        let start = Instant::now();
        let duplicates = finder.find_duplicates(text);
        (duplicates, start.elapsed())
    };

    let ((duplicates, elapsed), memory) = if profile {
        MemoryProfiler.measure(timed)
    } else {
        (timed(), None)
    };
    AnalysisResult::new(text, duplicates, elapsed, memory)
}
