//! Token filter implementations for token transformation.
//!
//! Filters receive the tokenizer's stream and drop tokens that are not
//! imagery candidates. The imagery pipeline chains three of them, and a
//! token survives only if every filter keeps it:
//!
//! ```text
//! Tokenizer → Stop Words → Min Length → POS Whitelist → Imagery tokens
//! ```
//!
//! # Available Filters
//!
//! - [`stop::StopFilter`] - Removes stop words
//! - [`length::MinLengthFilter`] - Removes tokens shorter than a character count
//! - [`pos::PosFilter`] - Keeps tokens whose POS tag is whitelisted
//!
//! # Examples
//!
//! ```
//! use yixiang::analysis::token::Token;
//! use yixiang::analysis::token_filter::Filter;
//! use yixiang::analysis::token_filter::length::MinLengthFilter;
//!
//! let filter = MinLengthFilter::new(2);
//! let tokens = vec![Token::new("潮州", 0), Token::new("路", 1)];
//! let kept: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
//!
//! assert_eq!(kept.len(), 1);
//! assert_eq!(kept[0].text, "潮州");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod length;
pub mod pos;
pub mod stop;

pub use length::MinLengthFilter;
pub use pos::PosFilter;
pub use stop::StopFilter;
