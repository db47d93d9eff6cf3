//! The two ways of presenting an [`AnalysisResult`].

use std::{
    io::{self, IsTerminal, Write, stdout},
    thread,
    time::Duration,
};

use terminal_size::{Height, Width, terminal_size};
use tracing::debug;

use crate::core::{
    config::Config,
    constants::FINAL_LINGER,
    error::{AnimationUnavailable, FestError},
    result::AnalysisResult,
};

use super::{
    layout::Layout,
    scene::{Scene, Sprite},
    surface::{AnsiSurface, Surface},
};

/// Something that can show a result to the user.
pub trait Visualizer {
    fn render(&self, result: &AnalysisResult) -> Result<(), FestError>;
}

/// Plain text recap; never touches the screen mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct SummaryVisualizer;

impl Visualizer for SummaryVisualizer {
    fn render(&self, result: &AnalysisResult) -> Result<(), FestError> {
        let mut out = stdout().lock();
        write_summary(&mut out, result)?;
        out.flush()?;
        Ok(())
    }
}

/// Write the textual recap used by both visualizers.
pub fn write_summary<W: Write>(out: &mut W, result: &AnalysisResult) -> io::Result<()> {
    if result.duplicates().is_empty() {
        writeln!(out, "\nNo duplicate letters found! Nice and unique.")?;
    }
    writeln!(out, "\nSummary:")?;
    for line in result.summary_lines() {
        writeln!(out, "  {line}")?;
    }
    writeln!(out, "\n---\n")
}

/// Fixed-delay frame loop.
#[derive(Debug, Clone, Copy)]
pub struct Animator {
    pub delay: Duration,
    pub linger: Duration,
}

impl Animator {
    /// Draw every step of `scene`, then the final frame.
    pub fn play<S: Surface>(&self, surface: &mut S, scene: &Scene) -> io::Result<()> {
        for step in 0..scene.steps() {
            draw(surface, &scene.frame(step))?;
            thread::sleep(self.delay);
        }
        draw(surface, &scene.final_frame())?;
        thread::sleep(self.linger);
        Ok(())
    }
}

fn draw<S: Surface>(surface: &mut S, sprites: &[Sprite]) -> io::Result<()> {
    surface.clear()?;
    for s in sprites {
        surface.put(s.row, s.col, &s.text, s.color)?;
    }
    surface.refresh()
}

/// Balloons rising for every duplicate, followed by the summary.
#[derive(Debug, Clone, Copy)]
pub struct AnimatedVisualizer {
    height: usize,
    animator: Animator,
}

impl AnimatedVisualizer {
    #[must_use]
    pub fn new(delay: Duration, height: usize) -> Self {
        Self {
            height,
            animator: Animator {
                delay,
                linger: FINAL_LINGER,
            },
        }
    }

    #[must_use]
    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.frame_delay(), cfg.height).with_linger(cfg.linger)
    }

    /// Override how long the last frame stays up.
    #[must_use]
    pub fn with_linger(mut self, linger: Duration) -> Self {
        self.animator.linger = linger;
        self
    }

    /// Lay out `result` on a `cols × rows` screen, or explain why it can't be.
    pub fn prepare(
        &self,
        result: &AnalysisResult,
        size: (usize, usize),
    ) -> Result<Scene, AnimationUnavailable> {
        let layout =
            Layout::compute(result.duplicates(), size.0).ok_or(AnimationUnavailable::NoDuplicates)?;
        debug!(
            "{} balloons, {:?} style, {}×{} screen",
            layout.slots.len(),
            layout.style,
            size.0,
            size.1
        );
        Scene::new(layout, size, result.summary_lines(), self.height)
    }

    /// Animate on `surface` and hand it back restored, even on error.
    pub fn render_on<S: Surface>(
        &self,
        surface: &mut S,
        result: &AnalysisResult,
    ) -> Result<(), FestError> {
        let scene = self.prepare(result, surface.size())?;
        let played = self.animator.play(surface, &scene);
        let restored = surface.restore();
        played?;
        restored?;
        Ok(())
    }
}

impl Visualizer for AnimatedVisualizer {
    fn render(&self, result: &AnalysisResult) -> Result<(), FestError> {
        if result.duplicates().is_empty() {
            return Err(AnimationUnavailable::NoDuplicates.into());
        }
        if !stdout().is_terminal() {
            return Err(AnimationUnavailable::NotATerminal.into());
        }
        let (Width(w), Height(h)) = terminal_size().ok_or(AnimationUnavailable::NotATerminal)?;
        let size = (usize::from(w), usize::from(h));

        // Fail before switching screens if it will not fit.
        let scene = self.prepare(result, size)?;
        {
            let mut surface = AnsiSurface::enter(stdout(), size)?;
            let played = self.animator.play(&mut surface, &scene);
            surface.restore()?;
            played?;
        }

        // The alternate screen is gone; leave the recap on the normal one.
        SummaryVisualizer.render(result)
    }
}
