//! Analyzer implementations that combine char filters, a tokenizer and
//! token filters.
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Filter 1 → ... → Filter N → Tokens
//! ```
//!
//! - [`PipelineAnalyzer`](pipeline::PipelineAnalyzer) - Custom tokenizer + filter chains
//! - [`ImageryAnalyzer`](imagery::ImageryAnalyzer) - The imagery extraction pipeline

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so that one analyzer can be shared by
/// the workers of a parallel extraction.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod imagery;
pub mod pipeline;

pub use imagery::ImageryAnalyzer;
pub use pipeline::PipelineAnalyzer;
