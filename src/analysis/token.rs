//! Token types and utilities for text analysis.
//!
//! A [`Token`] is a segmented word paired with its part-of-speech tag. The
//! tag only lives as long as the analysis pipeline: once filtering is done
//! the extractor keeps the text and discards everything else.
//!
//! # Examples
//!
//! ```
//! use yixiang::analysis::token::Token;
//!
//! let token = Token::new("明月", 0).with_pos_tag("n");
//! assert_eq!(token.text, "明月");
//! assert_eq!(token.pos_tag(), Some("n"));
//! assert_eq!(token.char_len(), 2);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single segmented word.
///
/// # Fields
///
/// - `text` - The token's text content
/// - `position` - Position in the token stream (0-based)
/// - `start_offset` / `end_offset` - Byte offsets in the analyzed text
/// - `pos_tag` - Part-of-speech tag assigned by the tokenizer, if any
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the original token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Part-of-speech tag, opaque to the pipeline
    pub pos_tag: Option<String>,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            pos_tag: None,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            pos_tag: None,
        }
    }

    /// Set the part-of-speech tag.
    pub fn with_pos_tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.pos_tag = Some(tag.into());
        self
    }

    /// Get the part-of-speech tag.
    pub fn pos_tag(&self) -> Option<&str> {
        self.pos_tag.as_deref()
    }

    /// Length of the token in characters (not bytes).
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Consume the token, keeping only its text.
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.pos_tag {
            Some(tag) => write!(f, "{}/{}", self.text, tag),
            None => write!(f, "{}", self.text),
        }
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}
