//! Outcome of one analysis run.

use std::time::Duration;

/// Bytes allocated while the finder ran, relative to when measuring began.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryStats {
    pub current: usize,
    pub peak: usize,
}

/// Immutable bundle consumed by a visualizer.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    original_text: String,
    duplicates: Vec<char>,
    elapsed: Duration,
    memory: Option<MemoryStats>,
}

impl AnalysisResult {
    #[must_use]
    pub fn new(
        original_text: impl Into<String>,
        duplicates: Vec<char>,
        elapsed: Duration,
        memory: Option<MemoryStats>,
    ) -> Self {
        Self {
            original_text: original_text.into(),
            duplicates,
            elapsed,
            memory,
        }
    }

    #[must_use]
    pub fn original_text(&self) -> &str {
        &self.original_text
    }
    #[must_use]
    pub fn duplicates(&self) -> &[char] {
        &self.duplicates
    }
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
    /// `None` means "not measured", which is distinct from zero bytes.
    #[must_use]
    pub fn memory(&self) -> Option<MemoryStats> {
        self.memory
    }

    #[must_use]
    pub fn memory_current_bytes(&self) -> Option<usize> {
        self.memory.map(|m| m.current)
    }
    #[must_use]
    pub fn memory_peak_bytes(&self) -> Option<usize> {
        self.memory.map(|m| m.peak)
    }

    /// Labelled recap lines, without indentation.
    #[must_use]
    pub fn summary_lines(&self) -> Vec<String> {
        let duplicates = if self.duplicates.is_empty() {
            "None".to_owned()
        } else {
            self.duplicates
                .iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };

        let mut lines = vec![
            format!("Input text             : '{}'", self.original_text),
            format!(
                "Length                 : {} characters",
                self.original_text.chars().count()
            ),
            format!("Duplicates             : {duplicates}"),
            format!("Algorithm time         : {:.6} seconds", self.elapsed_seconds()),
        ];
        if let Some(MemoryStats { current, peak }) = self.memory {
            lines.push(format!("Memory current usage   : {:.2} KiB", kib(current)));
            lines.push(format!("Memory peak usage      : {:.2} KiB", kib(peak)));
        }
        lines
    }
}

#[allow(clippy::cast_precision_loss)]
fn kib(bytes: usize) -> f64 {
    bytes as f64 / 1024.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let stats = MemoryStats {
            current: 1000,
            peak: 2000,
        };
        let r = AnalysisResult::new("hello", vec!['l'], Duration::from_micros(100), Some(stats));
        assert_eq!(r.original_text(), "hello");
        assert_eq!(r.duplicates(), ['l']);
        assert!((r.elapsed_seconds() - 0.0001).abs() < 1e-12);
        assert_eq!(r.memory_current_bytes(), Some(1000));
        assert_eq!(r.memory_peak_bytes(), Some(2000));
    }

    #[test]
    fn summary_without_memory() {
        let r = AnalysisResult::new("banana", vec!['a', 'n'], Duration::from_micros(200), None);
        let lines = r.summary_lines();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Input text"));
        assert!(lines[0].ends_with("'banana'"));
        assert!(lines[1].contains("6 characters"));
        assert!(lines[2].ends_with("a, n"));
        assert!(lines[3].contains("0.000200 seconds"));
        assert_eq!(r.memory(), None);
    }

    #[test]
    fn summary_with_memory() {
        let stats = MemoryStats {
            current: 1024,
            peak: 2048,
        };
        let r = AnalysisResult::new("hello", vec!['l'], Duration::ZERO, Some(stats));
        let lines = r.summary_lines();
        assert_eq!(lines.len(), 6);
        assert!(lines[4].starts_with("Memory current usage"));
        assert!(lines[4].ends_with("1.00 KiB"));
        assert!(lines[5].starts_with("Memory peak usage"));
        assert!(lines[5].ends_with("2.00 KiB"));
    }

    #[test]
    fn measured_zero_is_not_absent() {
        let zero = MemoryStats {
            current: 0,
            peak: 0,
        };
        let r = AnalysisResult::new("abc", vec![], Duration::ZERO, Some(zero));
        assert_eq!(r.memory_peak_bytes(), Some(0));
        assert_eq!(r.summary_lines().len(), 6);
        assert!(r.summary_lines()[2].ends_with("None"));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let r = AnalysisResult::new("éé", vec!['é'], Duration::ZERO, None);
        assert!(r.summary_lines()[1].contains("2 characters"));
    }
}
