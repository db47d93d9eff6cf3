//! Per-step frame contents for the balloon rise.
//!
//! Screen split, top to bottom: the balloon field, one blank row, the final
//! caption, then the summary lines.  Balloons start resting on the bottom of
//! the field and climb one row per step until they reach the top row.

use crate::core::{
    color::AnsiCode,
    constants::{FINAL_CAPTION, SUMMARY_GAP},
    error::AnimationUnavailable,
};

use super::layout::Layout;

/// A run of text at a fixed screen position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub row: usize,
    pub col: usize,
    pub text: String,
    pub color: Option<AnsiCode>,
}

pub struct Scene {
    layout: Layout,
    art: Vec<Vec<String>>,
    summary: Vec<String>,
    field_rows: usize,
    height: usize,
}

impl Scene {
    /// Fits `layout` onto a `cols × rows` screen, leaving room for `summary`.
    pub fn new(
        layout: Layout,
        (cols, rows): (usize, usize),
        summary: Vec<String>,
        height: usize,
    ) -> Result<Self, AnimationUnavailable> {
        let footer_rows = SUMMARY_GAP + 1 + summary.len();
        let want_rows = layout.style.height() + footer_rows;
        if rows < want_rows || cols == 0 {
            return Err(AnimationUnavailable::TooSmall {
                want_rows,
                got_cols: cols,
                got_rows: rows,
            });
        }

        let art = layout
            .slots
            .iter()
            .map(|s| layout.style.art(s.glyph))
            .collect();
        Ok(Self {
            layout,
            art,
            summary: summary.into_iter().map(|l| printable(&l)).collect(),
            field_rows: rows - footer_rows,
            height,
        })
    }

    #[must_use]
    pub fn steps(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Top row of every balloon at `step`.
    #[must_use]
    pub fn balloon_top(&self, step: usize) -> usize {
        let start = self.field_rows - self.layout.style.height();
        start - step.min(start)
    }

    /// Balloons only.
    #[must_use]
    pub fn frame(&self, step: usize) -> Vec<Sprite> {
        let top = self.balloon_top(step);
        let mut sprites = Vec::with_capacity(self.art.len() * self.layout.style.height());
        for (slot, art) in self.layout.slots.iter().zip(&self.art) {
            let col = slot.left(self.layout.art_cols);
            for (dy, line) in art.iter().enumerate() {
                sprites.push(Sprite {
                    row: top + dy,
                    col,
                    text: line.clone(),
                    color: Some(slot.color()),
                });
            }
        }
        sprites
    }

    /// Balloons at their resting height plus caption and summary.
    #[must_use]
    pub fn final_frame(&self) -> Vec<Sprite> {
        let mut sprites = self.frame(self.height.saturating_sub(1));
        let caption_row = self.field_rows + SUMMARY_GAP;
        sprites.push(Sprite {
            row: caption_row,
            col: 0,
            text: FINAL_CAPTION.to_owned(),
            color: None,
        });
        for (i, line) in self.summary.iter().enumerate() {
            sprites.push(Sprite {
                row: caption_row + 1 + i,
                col: 0,
                text: line.clone(),
                color: None,
            });
        }
        sprites
    }
}

/// `line` with control characters spelled out, so input text cannot move the
/// cursor or change modes on the alternate screen.
fn printable(line: &str) -> String {
    if !line.chars().any(char::is_control) {
        return line.to_owned();
    }
    line.chars()
        .fold(String::with_capacity(line.len()), |mut out, c| {
            if c.is_control() {
                out.extend(c.escape_debug());
            } else {
                out.push(c);
            }
            out
        })
}
