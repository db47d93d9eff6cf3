//! Horizontal slot assignment for the balloon field.
//!
//! The usable width is cut into one equal bin per duplicate and every balloon
//! is centred in its bin.  Widths are terminal columns, so a CJK or emoji
//! glyph counts double.  The balloon art shrinks with the bin so neighbours
//! never share a column as long as each bin can hold the widest glyph.

use unicode_width::UnicodeWidthChar;

use crate::core::{
    color::{AnsiCode, palette_color},
    constants::{BALLOON_ART, BALLOON_WIDTH, COMPACT_ART, COMPACT_WIDTH},
};

/// How much art fits in one bin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BalloonStyle {
    /// Seven-line ASCII balloon.
    Full,
    /// `(x)` on a string.
    Compact,
    /// Just the character.
    Bare,
}

impl BalloonStyle {
    /// Largest style whose art fits `bin_width` columns around a glyph
    /// `glyph_cols` wide.
    #[must_use]
    pub fn for_bin(bin_width: usize, glyph_cols: usize) -> Self {
        if bin_width >= Self::Full.columns(glyph_cols) {
            Self::Full
        } else if bin_width >= Self::Compact.columns(glyph_cols) {
            Self::Compact
        } else {
            Self::Bare
        }
    }

    /// Art width around a single-column glyph.
    #[must_use]
    pub fn width(self) -> usize {
        match self {
            Self::Full => BALLOON_WIDTH,
            Self::Compact => COMPACT_WIDTH,
            Self::Bare => 1,
        }
    }

    /// Art width around a glyph `glyph_cols` columns wide.
    #[must_use]
    pub fn columns(self, glyph_cols: usize) -> usize {
        self.width() - 1 + glyph_cols
    }

    #[must_use]
    pub fn height(self) -> usize {
        match self {
            Self::Full => BALLOON_ART.len(),
            Self::Compact => COMPACT_ART.len(),
            Self::Bare => 1,
        }
    }

    /// Art rows with `glyph` filled in.
    #[must_use]
    pub fn art(self, glyph: char) -> Vec<String> {
        let fill = |rows: &[&str]| {
            let g = glyph.to_string();
            rows.iter().map(|r| r.replace("{}", &g)).collect()
        };
        match self {
            Self::Full => fill(&BALLOON_ART),
            Self::Compact => fill(&COMPACT_ART),
            Self::Bare => vec![glyph.to_string()],
        }
    }
}

/// One balloon's place on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BalloonSlot {
    /// Centre column.
    pub column: usize,
    pub glyph: char,
    pub color_index: usize,
}

impl BalloonSlot {
    #[inline]
    #[must_use]
    pub fn color(&self) -> AnsiCode {
        palette_color(self.color_index)
    }

    /// First column covered by art `art_cols` wide centred on this slot.
    #[inline]
    #[must_use]
    pub fn left(&self, art_cols: usize) -> usize {
        self.column.saturating_sub(art_cols / 2)
    }
}

/// Terminal columns taken by `c`; zero-width and control characters count
/// as one.
#[inline]
#[must_use]
pub fn glyph_cols(c: char) -> usize {
    c.width().unwrap_or(1).max(1)
}

/// Slots for every duplicate plus the art style they share.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    pub slots: Vec<BalloonSlot>,
    pub style: BalloonStyle,
    /// Columns of the widest balloon; every slot is spaced for this.
    pub art_cols: usize,
    pub width: usize,
}

impl Layout {
    /// `None` when there is nothing to animate.
    #[must_use]
    pub fn compute(duplicates: &[char], width: usize) -> Option<Self> {
        let n = duplicates.len();
        if n == 0 {
            return None;
        }

        let bin = width / n;
        let widest = duplicates.iter().map(|&c| glyph_cols(c)).max().unwrap_or(1);
        let style = BalloonStyle::for_bin(bin, widest);
        let slots = duplicates
            .iter()
            .enumerate()
            .map(|(i, &glyph)| BalloonSlot {
                column: slot_center(i, n, width),
                glyph,
                color_index: i,
            })
            .collect();

        Some(Self {
            slots,
            style,
            art_cols: style.columns(widest),
            width,
        })
    }
}

/// Midpoint of bin `i` out of `n` across `width` columns.  Narrower than one
/// column per bin, positions pile up against the right edge.
#[inline]
fn slot_center(i: usize, n: usize, width: usize) -> usize {
    if width < n {
        return i.min(width.saturating_sub(1));
    }
    (2 * i + 1) * width / (2 * n)
}
