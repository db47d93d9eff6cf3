//! Repeated-character detection.

use std::collections::HashMap;

use tracing::debug;

/// Strategy for locating characters that occur more than once.
pub trait DuplicateFinder {
    /// Non-whitespace characters seen at least twice, in order of first
    /// appearance.
    fn find_duplicates(&self, text: &str) -> Vec<char>;
}

/// Single-pass histogram.  A character is emitted the moment its count
/// reaches two, which fixes the output order to first appearance.
#[derive(Debug, Default, Clone, Copy)]
pub struct HistogramFinder;

impl DuplicateFinder for HistogramFinder {
    fn find_duplicates(&self, text: &str) -> Vec<char> {
        let mut histogram: HashMap<char, usize> = HashMap::new();
        let mut first_seen: Vec<char> = Vec::new();

        for ch in text.chars().filter(|c| !c.is_whitespace()) {
            let count = histogram.entry(ch).or_insert(0);
            *count += 1;
            debug!("Count for '{ch}': {count}");
            if *count == 1 {
                first_seen.push(ch);
            }
        }

        // Keep first-appearance order, not the order in which counts hit two.
        first_seen.retain(|ch| histogram[ch] > 1);
        first_seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dups(s: &str) -> Vec<char> {
        HistogramFinder.find_duplicates(s)
    }

    #[test]
    fn empty_and_unique() {
        assert!(dups("").is_empty());
        assert!(dups("abcdef").is_empty());
    }

    #[test]
    fn first_seen_order() {
        assert_eq!(dups("balloon"), ['l', 'o']);
        assert_eq!(dups("banana"), ['a', 'n']);
        assert_eq!(dups("aabbcc"), ['a', 'b', 'c']);
        // 'b' repeats first, but 'a' appeared first
        assert_eq!(dups("abba"), ['a', 'b']);
    }

    #[test]
    fn case_sensitive() {
        assert!(dups("Aa").is_empty());
        assert_eq!(dups("AaAa"), ['A', 'a']);
    }

    #[test]
    fn whitespace_excluded() {
        assert_eq!(dups("a a"), ['a']);
        assert_eq!(dups("a b a"), ['a']);
        assert!(dups("   \t\t\n\n").is_empty());
        assert_eq!(dups("x\u{3000}x\u{3000}"), ['x']);
    }

    #[test]
    fn raw_code_points() {
        // precomposed é vs e + combining acute: no normalisation
        assert!(dups("\u{e9}e\u{301}").is_empty());
        assert_eq!(dups("🎈🎈"), ['🎈']);
    }

    #[test]
    fn idempotent() {
        let s = "Mississippi river";
        assert_eq!(dups(s), dups(s));
        assert_eq!(dups(s), ['i', 's', 'p', 'r']);
    }
}
