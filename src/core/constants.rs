//! A collection of constants.

use std::time::Duration;

/// Number of vertical steps a balloon rises when `--height` is not given.
pub const DEFAULT_HEIGHT: usize = 12;

/// Pause between animation frames.
pub const NORMAL_FRAME_DELAY: Duration = Duration::from_millis(100);
/// Pause between animation frames with `--fast`.
pub const FAST_FRAME_DELAY: Duration = Duration::from_millis(50);
/// How long the finished balloon field stays on screen.
pub const FINAL_LINGER_MS: u64 = 1000;
pub const FINAL_LINGER: Duration = Duration::from_millis(FINAL_LINGER_MS);

/// Inputs longer than this (in characters) are summarised, never animated.
pub const LONG_INPUT_LIMIT: usize = 30;

/// Seven-line balloon; `{}` is replaced by the duplicate character.
pub const BALLOON_ART: [&str; 7] = [
    "   .---.   ",
    "  /     \\  ",
    "  |  {}  |  ",
    "  \\     /  ",
    "   `---'   ",
    "     |     ",
    "     |     ",
];
/// Column count of every `BALLOON_ART` line once filled in.
pub const BALLOON_WIDTH: usize = 11;

/// Three-column balloon used when bins are too narrow for the full art.
pub const COMPACT_ART: [&str; 3] = [" _ ", "({})", " | "];
pub const COMPACT_WIDTH: usize = 3;

/// Blank row between the balloon field and the summary block.
pub const SUMMARY_GAP: usize = 1;

/// Shown under the balloons on the last frame.
pub const FINAL_CAPTION: &str = "🎈 All balloons are here! 🎈";
