//! Full-screen drawing target for the animation.
//!
//! [`AnsiSurface`] switches to the alternate screen and hides the cursor on
//! construction; [`Surface::restore`] (also run on `Drop`) undoes both.  A
//! frame is accumulated in memory and written in one go, wrapped in
//! synchronized-update sequences, so a frame is never seen half drawn.

use std::{
    io::{self, Write},
    sync::atomic::{AtomicBool, Ordering},
};

use unicode_width::UnicodeWidthChar;

use crate::core::color::{AnsiCode, colorize};

const ENTER_SEQ: &[u8] = b"\x1b[?1049h\x1b[?25l";
/// End any open synchronized update, reset colour, show cursor, leave the
/// alternate screen.
pub const RESTORE_SEQ: &[u8] = b"\x1b[?2026l\x1b[0m\x1b[?25h\x1b[?1049l";
const CLEAR_SEQ: &[u8] = b"\x1b[H\x1b[2J";
const BEGIN_SYNC: &[u8] = b"\x1b[?2026h";
const END_SYNC: &[u8] = b"\x1b[?2026l";

/// Set while some surface holds the alternate screen; read by the Ctrl-C
/// handler.
static SCREEN_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Primitives the animation needs from a display.
pub trait Surface {
    /// `(cols, rows)`.
    fn size(&self) -> (usize, usize);
    /// Start a new frame from a blank screen.
    fn clear(&mut self) -> io::Result<()>;
    /// Queue `text` at `row`/`col` (0-based); anything off screen is clipped.
    fn put(&mut self, row: usize, col: usize, text: &str, color: Option<AnsiCode>)
    -> io::Result<()>;
    /// Make the queued frame visible.
    fn refresh(&mut self) -> io::Result<()>;
    /// Give the display back in its original mode.  Idempotent.
    fn restore(&mut self) -> io::Result<()>;
}

pub struct AnsiSurface<W: Write> {
    out: W,
    frame: Vec<u8>,
    cols: usize,
    rows: usize,
    active: bool,
}

impl<W: Write> AnsiSurface<W> {
    /// Take over `out` as a `cols × rows` screen.
    pub fn enter(mut out: W, (cols, rows): (usize, usize)) -> io::Result<Self> {
        out.write_all(ENTER_SEQ)?;
        out.flush()?;
        SCREEN_ACTIVE.store(true, Ordering::SeqCst);
        Ok(Self {
            out,
            frame: Vec::new(),
            cols,
            rows,
            active: true,
        })
    }

    /// Bytes written so far (tests use a `Vec<u8>` writer).
    pub fn writer(&self) -> &W {
        &self.out
    }
}

impl<W: Write> Surface for AnsiSurface<W> {
    fn size(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    fn clear(&mut self) -> io::Result<()> {
        self.frame.clear();
        self.frame.extend_from_slice(CLEAR_SEQ);
        Ok(())
    }

    fn put(
        &mut self,
        row: usize,
        col: usize,
        text: &str,
        color: Option<AnsiCode>,
    ) -> io::Result<()> {
        if row >= self.rows || col >= self.cols {
            return Ok(());
        }
        let visible = clip(text, self.cols - col);
        write!(self.frame, "\x1b[{};{}H", row + 1, col + 1)?;
        match color {
            Some(c) => self.frame.extend_from_slice(colorize(&c, &visible).as_bytes()),
            None => self.frame.extend_from_slice(visible.as_bytes()),
        }
        Ok(())
    }

    fn refresh(&mut self) -> io::Result<()> {
        self.out.write_all(BEGIN_SYNC)?;
        self.out.write_all(&self.frame)?;
        self.out.write_all(END_SYNC)?;
        self.out.flush()
    }

    fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        SCREEN_ACTIVE.store(false, Ordering::SeqCst);
        self.out.write_all(RESTORE_SEQ)?;
        self.out.flush()
    }
}

impl<W: Write> Drop for AnsiSurface<W> {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Longest prefix of `text` that fits in `cols` terminal columns.
fn clip(text: &str, cols: usize) -> &str {
    let mut used = 0;
    for (i, c) in text.char_indices() {
        used += c.width().unwrap_or(0);
        if used > cols {
            return &text[..i];
        }
    }
    text
}

/// Called from the Ctrl-C handler: put the terminal back if a surface still
/// owns it.
pub fn emergency_restore<W: Write>(out: &mut W) -> io::Result<()> {
    if SCREEN_ACTIVE.swap(false, Ordering::SeqCst) {
        out.write_all(RESTORE_SEQ)?;
        out.flush()?;
    }
    Ok(())
}

/// Filler for the second cell of a double-width character.
#[cfg(test)]
const WIDE_TAIL: char = '\0';

/// In-memory character grid for asserting what a frame shows.
#[cfg(test)]
pub(crate) struct Canvas {
    cols: usize,
    rows: usize,
    pending: Vec<Vec<char>>,
    pub(crate) shown: Vec<Vec<Vec<char>>>,
    pub(crate) restored: bool,
}

#[cfg(test)]
impl Canvas {
    pub(crate) fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            pending: vec![vec![' '; cols]; rows],
            shown: Vec::new(),
            restored: false,
        }
    }

    pub(crate) fn last_frame_lines(&self) -> Vec<String> {
        self.shown
            .last()
            .map(|f| {
                f.iter()
                    .map(|r| r.iter().filter(|&&c| c != WIDE_TAIL).collect())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
impl Surface for Canvas {
    fn size(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    fn clear(&mut self) -> io::Result<()> {
        self.pending = vec![vec![' '; self.cols]; self.rows];
        Ok(())
    }

    fn put(
        &mut self,
        row: usize,
        col: usize,
        text: &str,
        _color: Option<AnsiCode>,
    ) -> io::Result<()> {
        if let Some(line) = self.pending.get_mut(row) {
            let mut at = col;
            for ch in text.chars() {
                let w = ch.width().unwrap_or(0);
                if at + w > line.len() {
                    break;
                }
                if w > 0 {
                    line[at] = ch;
                    line[at + 1..at + w].fill(WIDE_TAIL);
                }
                at += w;
            }
        }
        Ok(())
    }

    fn refresh(&mut self) -> io::Result<()> {
        self.shown.push(self.pending.clone());
        Ok(())
    }

    fn restore(&mut self) -> io::Result<()> {
        self.restored = true;
        Ok(())
    }
}
