//! Whitespace stripping char filter.
//!
//! Poem paragraphs arrive with line breaks, ASCII spaces and full-width
//! ideographic spaces (U+3000) between lines. None of them carry meaning
//! for segmentation, so they are removed before the text is tokenized.
//!
//! # Examples
//!
//! ```
//! use yixiang::analysis::char_filter::normalize_paragraphs;
//!
//! let text = normalize_paragraphs(&["明月幾時有，\n", "把酒\u{3000}問青天。"]);
//! assert_eq!(text, "明月幾時有，把酒問青天。");
//! ```

use super::{CharFilter, Transformation};

/// Ideographic (full-width) space.
const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// A char filter that deletes every whitespace character.
///
/// Punctuation and every other character class are left untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct WhitespaceStripCharFilter;

impl WhitespaceStripCharFilter {
    /// Create a new whitespace stripping filter.
    pub fn new() -> Self {
        WhitespaceStripCharFilter
    }

    fn is_stripped(c: char) -> bool {
        c.is_whitespace() || c == IDEOGRAPHIC_SPACE || c == '\n'
    }

    /// True when filtering would leave nothing of `text`.
    pub fn strips_to_empty(text: &str) -> bool {
        text.chars().all(Self::is_stripped)
    }
}

impl CharFilter for WhitespaceStripCharFilter {
    fn filter(&self, input: &str) -> (String, Vec<Transformation>) {
        let mut output = String::with_capacity(input.len());
        let mut transformations = Vec::new();
        // Start of the current run of stripped characters.
        let mut run_start: Option<usize> = None;

        for (idx, c) in input.char_indices() {
            if Self::is_stripped(c) {
                run_start.get_or_insert(idx);
                continue;
            }
            if let Some(start) = run_start.take() {
                transformations.push(Transformation::new(start, idx, output.len(), output.len()));
            }
            output.push(c);
        }

        if let Some(start) = run_start {
            transformations.push(Transformation::new(
                start,
                input.len(),
                output.len(),
                output.len(),
            ));
        }

        (output, transformations)
    }

    fn name(&self) -> &'static str {
        "whitespace_strip"
    }
}

/// Concatenate a work's paragraphs in order and strip all whitespace.
///
/// Pure and total: an empty slice yields an empty string.
pub fn normalize_paragraphs<S: AsRef<str>>(paragraphs: &[S]) -> String {
    let joined: String = paragraphs.iter().map(|p| p.as_ref()).collect();
    WhitespaceStripCharFilter.filter(&joined).0
}
