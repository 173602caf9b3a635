//! Tokenizer implementations for text analysis.
//!
//! Tokenizers segment normalized text into words and tag each word with a
//! part of speech. The pipeline only depends on this trait, so any engine
//! (or a canned mock in tests) can be plugged in.
//!
//! # Available Tokenizers
//!
//! - [`jieba::JiebaTokenizer`] - Dictionary-based Chinese segmentation with POS tags
//!
//! # Examples
//!
//! Implementing a custom tokenizer:
//!
//! ```
//! use yixiang::analysis::token::{Token, TokenStream};
//! use yixiang::analysis::tokenizer::Tokenizer;
//! use yixiang::error::Result;
//!
//! /// Emits every character as a noun.
//! struct CharTokenizer;
//!
//! impl Tokenizer for CharTokenizer {
//!     fn tokenize(&self, text: &str) -> Result<TokenStream> {
//!         let tokens: Vec<Token> = text
//!             .char_indices()
//!             .enumerate()
//!             .map(|(i, (start, c))| {
//!                 Token::with_offsets(c.to_string(), i, start, start + c.len_utf8())
//!                     .with_pos_tag("n")
//!             })
//!             .collect();
//!         Ok(Box::new(tokens.into_iter()))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "char"
//!     }
//! }
//!
//! let tokens: Vec<_> = CharTokenizer.tokenize("明月").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that segment text into POS-tagged tokens.
///
/// Implementations must be deterministic for identical input. The trait
/// requires `Send + Sync` so one tokenizer can serve a parallel extraction.
pub trait Tokenizer: Send + Sync {
    /// Segment the given text into a stream of tagged tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod jieba;

pub use jieba::JiebaTokenizer;
