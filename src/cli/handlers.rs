use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write, stdin, stdout},
    path::Path,
    process,
};

use tracing::{debug, info, warn};

use crate::{
    analyze,
    core::{
        config::{Config, InputSource},
        constants::LONG_INPUT_LIMIT,
        error::{AnimationUnavailable, FestError},
        finder::{DuplicateFinder, HistogramFinder},
    },
    render::{
        AnimatedVisualizer, SummaryVisualizer, Visualizer,
        surface::emergency_restore,
    },
};

/// Gather every input, then analyse and show each one in turn.
pub fn run(cfg: &Config) -> Result<(), FestError> {
    let inputs = gather_inputs(&cfg.source)?;
    if inputs.is_empty() {
        println!("No input provided. Exiting.");
        return Ok(());
    }

    if cfg.animate {
        install_interrupt_handler()?;
    }

    let finder = HistogramFinder;
    let animated = AnimatedVisualizer::from_config(cfg);
    for (i, text) in inputs.iter().enumerate() {
        debug!("input {}/{}", i + 1, inputs.len());
        process_input(text, &finder, cfg, &animated)?;
    }
    Ok(())
}

/// Analyse one string and hand the result to the configured visualizer,
/// dropping back to the plain summary when animation is not possible.
pub fn process_input<F, V>(
    text: &str,
    finder: &F,
    cfg: &Config,
    animated: &V,
) -> Result<(), FestError>
where
    F: DuplicateFinder + ?Sized,
    V: Visualizer + ?Sized,
{
    let len = text.chars().count();
    let too_long = len > LONG_INPUT_LIMIT;
    if cfg.animate && too_long {
        warn!("input length {len} > {LONG_INPUT_LIMIT}, skipping balloon animation");
    }

    let result = analyze(text, finder, cfg.mem_profile);

    if !cfg.animate || too_long {
        return SummaryVisualizer.render(&result);
    }
    match animated.render(&result) {
        Err(FestError::Animation(AnimationUnavailable::NoDuplicates)) => {
            SummaryVisualizer.render(&result)
        }
        Err(e) if e.is_recoverable() => {
            info!("{e}; showing summary instead");
            SummaryVisualizer.render(&result)
        }
        other => other,
    }
}

fn gather_inputs(source: &InputSource) -> Result<Vec<String>, FestError> {
    match source {
        InputSource::Text(text) => Ok(non_empty(text).into_iter().collect()),
        InputSource::File(path) => read_batch_file(path),
        InputSource::Prompt => {
            let line = prompt(&mut stdin().lock(), &mut stdout())?;
            Ok(line.into_iter().collect())
        }
    }
}

fn read_batch_file(path: &Path) -> Result<Vec<String>, FestError> {
    let file = File::open(path).map_err(|e| FestError::Input {
        path: path.to_path_buf(),
        source: e,
    })?;
    let inputs = read_batch(BufReader::new(file)).map_err(|e| FestError::Input {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!("{} inputs read from {}", inputs.len(), path.display());
    Ok(inputs)
}

/// One input per line; surrounding whitespace trimmed, blank lines skipped.
pub fn read_batch<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in reader.lines() {
        if let Some(text) = non_empty(&line?) {
            inputs.push(text);
        }
    }
    Ok(inputs)
}

/// Greet the user and read one line.  `None` on empty input or EOF.
pub fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<String>> {
    writeln!(out, "🎈 Welcome to the Duplicate Letter Fest! 🎈")?;
    writeln!(
        out,
        "Type any word or name, and watch repeated letters pop up as balloons if enabled."
    )?;
    write!(out, "Enter text: ")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(non_empty(&line))
}

fn non_empty(s: &str) -> Option<String> {
    let t = s.trim();
    (!t.is_empty()).then(|| t.to_owned())
}

/// Ctrl-C while balloons are up must not leave the terminal in the alternate
/// screen with a hidden cursor.  The stdout lock is held until exit so no
/// frame bytes follow the restore sequence.
fn install_interrupt_handler() -> Result<(), FestError> {
    ctrlc::set_handler(|| {
        let mut out = stdout().lock();
        let _ = emergency_restore(&mut out);
        process::exit(130);
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, io::Cursor};

    use super::*;
    use crate::core::result::AnalysisResult;

    /// Visualizer stub that counts calls and fails in a chosen way.
    struct Stub {
        calls: Cell<usize>,
        fail: fn() -> FestError,
    }

    impl Visualizer for Stub {
        fn render(&self, _result: &AnalysisResult) -> Result<(), FestError> {
            self.calls.set(self.calls.get() + 1);
            Err((self.fail)())
        }
    }

    fn cfg(animate: bool) -> Config {
        Config::builder().animate(animate).build().unwrap()
    }

    #[test]
    fn batch_skips_blank_lines() {
        let data = "banana\n\n   \n  hello world  \nabc\n";
        let inputs = read_batch(Cursor::new(data)).unwrap();
        assert_eq!(inputs, ["banana", "hello world", "abc"]);
    }

    #[test]
    fn prompt_reads_trimmed_line() {
        let mut out = Vec::new();
        let got = prompt(&mut Cursor::new("  balloon \n"), &mut out).unwrap();
        assert_eq!(got.as_deref(), Some("balloon"));
        assert!(String::from_utf8(out).unwrap().ends_with("Enter text: "));
    }

    #[test]
    fn prompt_empty_or_eof_is_none() {
        let mut sink = Vec::new();
        assert_eq!(prompt(&mut Cursor::new("   \n"), &mut sink).unwrap(), None);
        assert_eq!(prompt(&mut Cursor::new(""), &mut sink).unwrap(), None);
    }

    #[test]
    fn text_source_is_trimmed() {
        let got = gather_inputs(&InputSource::Text("  aa ".into())).unwrap();
        assert_eq!(got, ["aa"]);
        assert!(gather_inputs(&InputSource::Text("   ".into())).unwrap().is_empty());
    }

    #[test]
    fn missing_batch_file_names_the_path() {
        let err = gather_inputs(&InputSource::File("/no/such/inputs.txt".into())).unwrap_err();
        assert!(err.to_string().contains("/no/such/inputs.txt"));
    }

    #[test]
    fn cannot_animate_falls_back_to_summary() {
        let stub = Stub {
            calls: Cell::new(0),
            fail: || AnimationUnavailable::NotATerminal.into(),
        };
        process_input("balloon", &HistogramFinder, &cfg(true), &stub).unwrap();
        assert_eq!(stub.calls.get(), 1);
    }

    #[test]
    fn other_errors_propagate() {
        let stub = Stub {
            calls: Cell::new(0),
            fail: || io::Error::other("broken pipe").into(),
        };
        let err = process_input("balloon", &HistogramFinder, &cfg(true), &stub).unwrap_err();
        assert!(matches!(err, FestError::Io(_)));
    }

    #[test]
    fn animation_disabled_or_long_input_never_animates() {
        let stub = Stub {
            calls: Cell::new(0),
            fail: || AnimationUnavailable::NotATerminal.into(),
        };
        process_input("balloon", &HistogramFinder, &cfg(false), &stub).unwrap();
        let long = "abcdefghij".repeat(4);
        process_input(&long, &HistogramFinder, &cfg(true), &stub).unwrap();
        assert_eq!(stub.calls.get(), 0);
    }
}
