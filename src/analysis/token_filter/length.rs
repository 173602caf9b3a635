//! Minimum length filter implementation.

use super::Filter;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A filter that drops tokens shorter than `min_chars` characters.
///
/// Length is counted in characters, so a single CJK character (3 bytes in
/// UTF-8) is length 1.
#[derive(Clone, Debug)]
pub struct MinLengthFilter {
    min_chars: usize,
}

impl MinLengthFilter {
    /// Create a new filter keeping tokens of at least `min_chars` characters.
    pub fn new(min_chars: usize) -> Self {
        MinLengthFilter { min_chars }
    }

    /// Get the minimum length.
    pub fn min_chars(&self) -> usize {
        self.min_chars
    }
}

impl Default for MinLengthFilter {
    /// Imagery words are two characters or longer.
    fn default() -> Self {
        Self::new(2)
    }
}

impl Filter for MinLengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let min_chars = self.min_chars;
        let kept: Vec<Token> = tokens.filter(|t| t.char_len() >= min_chars).collect();
        Ok(Box::new(kept.into_iter()))
    }

    fn name(&self) -> &'static str {
        "min_length"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_single_characters() {
        let filter = MinLengthFilter::default();
        let tokens = vec![
            Token::new("路", 0),
            Token::new("潮州", 1),
            Token::new("九重天", 2),
            Token::new("", 3),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "潮州");
        assert_eq!(result[1].text, "九重天");
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        // "路" is three bytes but one character.
        let filter = MinLengthFilter::new(2);
        let tokens = vec![Token::new("路", 0), Token::new("ab", 1)];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "ab");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(MinLengthFilter::default().name(), "min_length");
    }
}
