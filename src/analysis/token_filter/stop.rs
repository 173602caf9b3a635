//! Stop filter implementation.
//!
//! Removes tokens whose text appears in a [`StopWordSet`]. Matching is exact:
//! no case folding or script conversion happens here.
//!
//! # Examples
//!
//! ```
//! use yixiang::analysis::stop_words::StopWordSet;
//! use yixiang::analysis::token::Token;
//! use yixiang::analysis::token_filter::Filter;
//! use yixiang::analysis::token_filter::stop::StopFilter;
//!
//! let filter = StopFilter::new(StopWordSet::from_words(["不思量"]));
//! let tokens = vec![Token::new("十年", 0), Token::new("不思量", 1)];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "十年");
//! ```

use crate::analysis::stop_words::StopWordSet;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes stop words from the token stream.
#[derive(Clone, Debug, Default)]
pub struct StopFilter {
    stop_words: StopWordSet,
}

impl StopFilter {
    /// Create a new stop filter over the given set.
    pub fn new(stop_words: StopWordSet) -> Self {
        StopFilter { stop_words }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(StopWordSet::from_words(words))
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// The underlying stop-word set.
    pub fn stop_words(&self) -> &StopWordSet {
        &self.stop_words
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !self.is_stop_word(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
