//! Aggregates the “business logic” layer.

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod finder;
pub mod profiler;
pub mod result;

// re-export frequently-used items for convenience
pub use color::{AnsiCode, PALETTE, palette_color};
pub use config::{Config, ConfigBuilder, InputSource};
pub use constants::{DEFAULT_HEIGHT, FAST_FRAME_DELAY, LONG_INPUT_LIMIT, NORMAL_FRAME_DELAY};
pub use error::{AnimationUnavailable, ConfigError, FestError};
pub use finder::{DuplicateFinder, HistogramFinder};
pub use profiler::{MemoryProfiler, TrackingAllocator};
pub use result::{AnalysisResult, MemoryStats};
