//! Run-time configuration object + fluent builder.

use std::{path::PathBuf, time::Duration};

use crate::core::{
    constants::{DEFAULT_HEIGHT, FAST_FRAME_DELAY, FINAL_LINGER, NORMAL_FRAME_DELAY},
    error::ConfigError,
};

/// Where the text to analyse comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputSource {
    /// Ask on stdin.
    #[default]
    Prompt,
    /// A single string given on the command line.
    Text(String),
    /// One input per line.
    File(PathBuf),
}

/// Immutable parameters handed to the pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    pub animate: bool,
    pub fast: bool,
    pub height: usize,
    /// How long the last frame stays up before the screen is restored.
    pub linger: Duration,
    pub verbose: bool,
    pub mem_profile: bool,
    pub source: InputSource,
}

impl Config {
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Pause between two animation frames.
    #[must_use]
    pub fn frame_delay(&self) -> Duration {
        if self.fast {
            FAST_FRAME_DELAY
        } else {
            NORMAL_FRAME_DELAY
        }
    }
}

/// Fluent builder; validation happens in `build`.
#[derive(Debug)]
pub struct ConfigBuilder {
    animate: bool,
    fast: bool,
    height: usize,
    linger: Duration,
    verbose: bool,
    mem_profile: bool,
    source: InputSource,
}

impl ConfigBuilder {
    pub(crate) fn new() -> Self {
        Self {
            animate: true,
            fast: false,
            height: DEFAULT_HEIGHT,
            linger: FINAL_LINGER,
            verbose: false,
            mem_profile: false,
            source: InputSource::Prompt,
        }
    }

    #[inline]
    #[must_use]
    pub fn animate(mut self, on: bool) -> Self {
        self.animate = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn fast(mut self, on: bool) -> Self {
        self.fast = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn height(mut self, steps: usize) -> Self {
        self.height = steps;
        self
    }
    #[inline]
    #[must_use]
    pub fn linger(mut self, linger: Duration) -> Self {
        self.linger = linger;
        self
    }
    #[inline]
    #[must_use]
    pub fn verbose(mut self, on: bool) -> Self {
        self.verbose = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn mem_profile(mut self, on: bool) -> Self {
        self.mem_profile = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn source(mut self, source: InputSource) -> Self {
        self.source = source;
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        if self.height == 0 {
            return Err(ConfigError::InvalidHeight(self.height));
        }
        Ok(Config {
            animate: self.animate,
            fast: self.fast,
            height: self.height,
            linger: self.linger,
            verbose: self.verbose,
            mem_profile: self.mem_profile,
            source: self.source,
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ConfigBuilder> for Result<Config, ConfigError> {
    fn from(b: ConfigBuilder) -> Self {
        b.build()
    }
}
