//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the text before it reaches the tokenizer. Each
//! filter returns the rewritten text together with the [`Transformation`]s
//! it applied, so analyzers can map token offsets back onto the input.
//!
//! # Available Filters
//!
//! - [`whitespace_strip::WhitespaceStripCharFilter`] - Removes whitespace,
//!   ideographic spaces and newlines

/// Represents a change in the text, mapping a range in the original text
/// to a range in the new text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transformation {
    pub original_start: usize,
    pub original_end: usize,
    pub new_start: usize,
    pub new_end: usize,
}

impl Transformation {
    pub fn new(
        original_start: usize,
        original_end: usize,
        new_start: usize,
        new_end: usize,
    ) -> Self {
        Self {
            original_start,
            original_end,
            new_start,
            new_end,
        }
    }
}

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    ///
    /// Returns the filtered text and the transformations that occurred.
    fn filter(&self, input: &str) -> (String, Vec<Transformation>);

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod whitespace_strip;

pub use whitespace_strip::{WhitespaceStripCharFilter, normalize_paragraphs};
