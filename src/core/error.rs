//! Centralised error types used across the crate.

use std::{error::Error, fmt, io, path::PathBuf};

/// Precise configuration faults.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    InvalidHeight(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidHeight(h) => {
                write!(f, "animation height must be at least 1, got {h}")
            }
        }
    }
}
impl Error for ConfigError {}

/// Why a balloon animation cannot be played.  Always recoverable: the caller
/// falls back to the summary-only visualizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationUnavailable {
    NoDuplicates,
    NotATerminal,
    TooSmall {
        want_rows: usize,
        got_cols: usize,
        got_rows: usize,
    },
}

impl fmt::Display for AnimationUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimationUnavailable::NoDuplicates => f.write_str("no duplicates to animate"),
            AnimationUnavailable::NotATerminal => f.write_str("output is not a terminal"),
            AnimationUnavailable::TooSmall {
                want_rows,
                got_cols,
                got_rows,
            } => write!(
                f,
                "terminal too small: need ≥{want_rows} rows, got {got_cols}×{got_rows}"
            ),
        }
    }
}
impl Error for AnimationUnavailable {}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum FestError {
    Io(io::Error),
    Input { path: PathBuf, source: io::Error },
    Config(ConfigError),
    Animation(AnimationUnavailable),
    Interrupt(ctrlc::Error),
}

impl FestError {
    /// `true` when the summary visualizer can take over.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, FestError::Animation(_))
    }
}

impl fmt::Display for FestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FestError::Io(e) => write!(f, "{e}"),
            FestError::Input { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            FestError::Config(e) => write!(f, "{e}"),
            FestError::Animation(e) => write!(f, "cannot animate: {e}"),
            FestError::Interrupt(e) => write!(f, "cannot install Ctrl-C handler: {e}"),
        }
    }
}
impl Error for FestError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FestError::Io(e) | FestError::Input { source: e, .. } => Some(e),
            FestError::Config(e) => Some(e),
            FestError::Animation(e) => Some(e),
            FestError::Interrupt(e) => Some(e),
        }
    }
}

// automatic conversions
impl From<io::Error> for FestError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ConfigError> for FestError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
impl From<AnimationUnavailable> for FestError {
    fn from(e: AnimationUnavailable) -> Self {
        Self::Animation(e)
    }
}
impl From<ctrlc::Error> for FestError {
    fn from(e: ctrlc::Error) -> Self {
        Self::Interrupt(e)
    }
}
