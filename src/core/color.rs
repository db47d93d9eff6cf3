//! Zero-alloc ANSI colour wrapper + the balloon palette.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnsiCode(&'static str);

impl AnsiCode {
    pub const fn red() -> Self {
        Self("\x1b[31m")
    }
    pub const fn green() -> Self {
        Self("\x1b[32m")
    }
    pub const fn yellow() -> Self {
        Self("\x1b[33m")
    }
    pub const fn blue() -> Self {
        Self("\x1b[34m")
    }
    pub const fn magenta() -> Self {
        Self("\x1b[35m")
    }
    #[inline]
    pub const fn reset() -> Self {
        Self("\x1b[0m")
    }

    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Balloon colours, cycled by position in the duplicate sequence.
pub const PALETTE: [AnsiCode; 5] = [
    AnsiCode::red(),
    AnsiCode::yellow(),
    AnsiCode::green(),
    AnsiCode::blue(),
    AnsiCode::magenta(),
];

/// Palette entry for the balloon at `index`.
#[inline]
#[must_use]
pub fn palette_color(index: usize) -> AnsiCode {
    PALETTE[index % PALETTE.len()]
}

/// Wrap `text` in colour + reset sequence.
#[inline]
#[must_use]
pub fn colorize(c: &AnsiCode, text: &str) -> String {
    format!("{c}{text}{}", AnsiCode::reset())
}
