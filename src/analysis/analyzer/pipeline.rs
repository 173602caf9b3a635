//! Pipeline analyzer that combines tokenizers and filters.
//!
//! The PipelineAnalyzer applies processing in this order:
//! 1. Char Filters: Normalizes raw text
//! 2. Tokenizer: Splits text into tagged tokens
//! 3. Token Filters: Applied sequentially in the order they were added
//!
//! Token offsets are reported against the raw input, not the char-filtered
//! text.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::char_filter::{CharFilter, Transformation};
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    char_filters: Vec<Arc<dyn CharFilter>>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            char_filters: Vec::new(),
            filters: Vec::new(),
        }
    }

    /// Add a char filter to the pipeline.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Get the custom name of this analyzer.
    pub fn pipeline_name(&self) -> &str {
        &self.name
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Run the char filters only, returning the text the tokenizer sees.
    pub fn normalize(&self, text: &str) -> String {
        self.apply_char_filters(text).0
    }

    /// Run char filters and tokenizer, skipping the token filters.
    pub fn segment(&self, text: &str) -> Result<TokenStream> {
        let (filtered_text, transformations) = self.apply_char_filters(text);
        let tokens = self.tokenizer.tokenize(&filtered_text)?;
        Ok(Self::restore_offsets(tokens, transformations))
    }

    fn apply_char_filters(&self, text: &str) -> (String, Vec<Vec<Transformation>>) {
        let mut filtered_text = text.to_string();
        let mut filter_transformations = Vec::with_capacity(self.char_filters.len());

        for char_filter in &self.char_filters {
            let (new_text, transformations) = char_filter.filter(&filtered_text);
            filtered_text = new_text;
            filter_transformations.push(transformations);
        }

        (filtered_text, filter_transformations)
    }

    fn restore_offsets(tokens: TokenStream, transformations: Vec<Vec<Transformation>>) -> TokenStream {
        if transformations.iter().all(Vec::is_empty) {
            return tokens;
        }

        let collected: Vec<_> = tokens
            .map(|mut token| {
                // Map Final -> Filter N -> ... -> Filter 1 -> Original.
                for t in transformations.iter().rev() {
                    token.start_offset = Self::correct_offset(token.start_offset, t, false);
                    token.end_offset = Self::correct_offset(token.end_offset, t, true);
                }
                token
            })
            .collect();
        Box::new(collected.into_iter())
    }

    /// Maps an offset in the filtered text back to the text before the filter.
    ///
    /// An end offset sitting exactly on a deletion stays before the deleted
    /// span; a start offset moves past it.
    fn correct_offset(offset: usize, transformations: &[Transformation], is_end: bool) -> usize {
        let mut corrected = offset;
        // Transformations are ordered by position.
        for t in transformations {
            let original_len = t.original_end - t.original_start;
            let new_len = t.new_end - t.new_start;

            let past = if is_end && new_len == 0 {
                offset > t.new_end
            } else {
                offset >= t.new_end
            };

            if past {
                corrected = corrected + original_len - new_len;
            } else if offset >= t.new_start && new_len > 0 {
                let offset_in_new = offset - t.new_start;
                return t.original_start + (offset_in_new * original_len) / new_len;
            } else {
                break;
            }
        }
        corrected
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.segment(text)?;

        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "char_filters",
                &self
                    .char_filters
                    .iter()
                    .map(|f| f.name())
                    .collect::<Vec<_>>(),
            )
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
