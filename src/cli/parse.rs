use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::core::{
    config::{Config, InputSource},
    constants::{DEFAULT_HEIGHT, FINAL_LINGER_MS},
    error::ConfigError,
};

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "balloon-fest",
    version,
    about = "Duplicate Letter Fest: spot repeated letters with fun balloon animations"
)]
pub struct Cli {
    /// Text to analyse (prompted for when neither this nor --input-file is given)
    #[arg(value_name = "TEXT", conflicts_with = "input_file")]
    pub text: Option<String>,

    /// Path to a file containing one input per line
    #[arg(long, value_name = "FILE")]
    pub input_file: Option<PathBuf>,

    /// Enable debug logging of character counts
    #[arg(short, long)]
    pub verbose: bool,

    /// Use faster balloon animation speed
    #[arg(long)]
    pub fast: bool,

    /// Height (number of steps) for balloon float
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Milliseconds the final frame stays on screen
    #[arg(long, value_name = "MS", default_value_t = FINAL_LINGER_MS)]
    pub linger: u64,

    /// Skip balloon animation and only show summary
    #[arg(long)]
    pub no_animation: bool,

    /// Show memory usage statistics for the duplicate-finding algorithm
    #[arg(long)]
    pub mem_profile: bool,
}

impl Cli {
    /// Translate flags into the pipeline configuration.
    pub fn config(&self) -> Result<Config, ConfigError> {
        let source = match (&self.text, &self.input_file) {
            (_, Some(path)) => InputSource::File(path.clone()),
            (Some(text), None) => InputSource::Text(text.clone()),
            (None, None) => InputSource::Prompt,
        };
        Config::builder()
            .animate(!self.no_animation)
            .fast(self.fast)
            .height(self.height)
            .linger(Duration::from_millis(self.linger))
            .verbose(self.verbose)
            .mem_profile(self.mem_profile)
            .source(source)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("balloon-fest").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn default_args() {
        let cli = parse(&[]);
        assert!(!cli.verbose);
        assert!(!cli.fast);
        assert_eq!(cli.height, 12);
        assert_eq!(cli.linger, 1000);
        assert!(!cli.no_animation);
        assert!(!cli.mem_profile);
        assert_eq!(cli.input_file, None);
        assert_eq!(cli.config().unwrap().source, InputSource::Prompt);
    }

    #[test]
    fn verbose_flag() {
        assert!(parse(&["--verbose"]).verbose);
        assert!(parse(&["-v"]).verbose);
    }

    #[test]
    fn animation_flags() {
        let cli = parse(&["--fast", "--height", "20"]);
        assert!(cli.fast);
        assert_eq!(cli.height, 20);

        let cfg = parse(&["--no-animation"]).config().unwrap();
        assert!(!cfg.animate);

        let cfg = parse(&["--linger", "2500"]).config().unwrap();
        assert_eq!(cfg.linger, Duration::from_millis(2500));
    }

    #[test]
    fn memory_profiling_flag() {
        assert!(parse(&["--mem-profile"]).config().unwrap().mem_profile);
    }

    #[test]
    fn input_sources() {
        let cfg = parse(&["--input-file", "inputs.txt"]).config().unwrap();
        assert_eq!(cfg.source, InputSource::File("inputs.txt".into()));

        let cfg = parse(&["balloon"]).config().unwrap();
        assert_eq!(cfg.source, InputSource::Text("balloon".into()));
    }

    #[test]
    fn text_and_file_conflict() {
        let res = Cli::try_parse_from(["balloon-fest", "abc", "--input-file", "x.txt"]);
        assert!(res.is_err());
    }

    #[test]
    fn zero_height_fails_validation() {
        let err = parse(&["--height", "0"]).config().unwrap_err();
        assert_eq!(err, ConfigError::InvalidHeight(0));
    }
}
