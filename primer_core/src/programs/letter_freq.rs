//! # Letter Frequency Counter
//!
//! Counts each of the six vowels `a, e, i, o, u, y` and the total number of
//! consonants in a line of text. Matching is case-insensitive. Anything
//! outside the ASCII letter ranges (digits, punctuation, whitespace,
//! non-ASCII letters) is skipped entirely.
//!
//! ## Example
//!
//! ```rust
//! use primer_core::programs::letter_freq::{calculate, LetterFreqInput};
//!
//! let tally = calculate(&LetterFreqInput::new("Hello, World! 123"));
//! assert_eq!(tally.count('o'), Some(2));
//! assert_eq!(tally.consonants, 7);
//! ```

use serde::{Deserialize, Serialize};

use crate::format;

/// The vowels, in display order. `y` is always a vowel here.
pub const VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];

/// Field width for each displayed vowel and count
pub const COLUMN_WIDTH: usize = 2;

/// Input text for the counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LetterFreqInput {
    pub text: String,
}

impl LetterFreqInput {
    pub fn new(text: impl Into<String>) -> Self {
        LetterFreqInput { text: text.into() }
    }
}

/// Vowel counts (in [`VOWELS`] order) plus the consonant total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterTally {
    pub vowel_counts: [usize; 6],
    pub consonants: usize,
}

impl LetterTally {
    /// Count for a single vowel, or `None` if `vowel` is not one of [`VOWELS`].
    pub fn count(&self, vowel: char) -> Option<usize> {
        VOWELS
            .iter()
            .position(|&v| v == vowel.to_ascii_lowercase())
            .map(|i| self.vowel_counts[i])
    }

    /// Sum of all vowel counts
    pub fn vowels(&self) -> usize {
        self.vowel_counts.iter().sum()
    }

    /// Number of alphabetic characters seen
    pub fn total_letters(&self) -> usize {
        self.vowels() + self.consonants
    }

    fn record(&mut self, letter: char) {
        let lower = letter.to_ascii_lowercase();
        match VOWELS.iter().position(|&v| v == lower) {
            Some(i) => self.vowel_counts[i] += 1,
            None => self.consonants += 1,
        }
    }
}

/// True for `a-z` and `A-Z` only.
pub fn is_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Tally the vowels and consonants in `input.text`.
pub fn calculate(input: &LetterFreqInput) -> LetterTally {
    let mut tally = LetterTally::default();
    for letter in input.text.chars().filter(|&c| is_alphabetic(c)) {
        tally.record(letter);
    }
    tracing::debug!(
        vowels = tally.vowels(),
        consonants = tally.consonants,
        "counted letters"
    );
    tally
}

/// Render the two aligned rows and the consonant line.
///
/// ```text
///  a,  e,  i,  o,  u,  y
///  0,  1,  0,  2,  0,  0
/// There are 7 consonants.
/// ```
pub fn render_table(tally: &LetterTally, column_width: usize) -> String {
    let header = VOWELS
        .iter()
        .map(|v| format::right(v, column_width))
        .collect::<Vec<_>>()
        .join(", ");
    let counts = tally
        .vowel_counts
        .iter()
        .map(|n| format::right(n, column_width))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{}\n{}\nThere are {} consonants.\n",
        header, counts, tally.consonants
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(text: &str) -> LetterTally {
        calculate(&LetterFreqInput::new(text))
    }

    #[test]
    fn test_hello_world() {
        let t = tally("Hello, World! 123");
        assert_eq!(t.vowel_counts, [0, 1, 0, 2, 0, 0]);
        assert_eq!(t.consonants, 7);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tally(""), LetterTally::default());
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(tally("AEIOUY"), tally("aeiouy"));
        assert_eq!(tally("Yy").count('y'), Some(2));
    }

    #[test]
    fn test_non_letters_skipped() {
        let t = tally("1234 !?,. \t café");
        // 'é' is outside the ASCII ranges
        assert_eq!(t.total_letters(), 3);
        assert_eq!(t.count('a'), Some(1));
        assert_eq!(t.consonants, 2);
    }

    #[test]
    fn test_totals_match_letter_count() {
        for text in ["The quick brown fox jumps over the lazy dog", "xyzzy", "!!!", "Mississippi 2024"] {
            let t = tally(text);
            let letters = text.chars().filter(|c| c.is_ascii_alphabetic()).count();
            assert_eq!(t.total_letters(), letters, "text: {text}");
        }
    }

    #[test]
    fn test_order_independent() {
        assert_eq!(tally("banana"), tally("ananab"));
    }

    #[test]
    fn test_count_unknown_letter() {
        assert_eq!(tally("abc").count('b'), None);
    }

    #[test]
    fn test_render_table() {
        let rendered = render_table(&tally("Hello, World! 123"), COLUMN_WIDTH);
        assert_eq!(
            rendered,
            " a,  e,  i,  o,  u,  y\n 0,  1,  0,  2,  0,  0\nThere are 7 consonants.\n"
        );
    }

    #[test]
    fn test_render_wide_counts() {
        let text = "a".repeat(120);
        let rendered = render_table(&tally(&text), COLUMN_WIDTH);
        assert!(rendered.lines().nth(1).unwrap().starts_with("120,  0"));
    }
}
