//! Part-of-speech whitelist filter implementation.

use ahash::AHashSet;

use super::Filter;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A filter that keeps tokens whose POS tag is in a whitelist.
///
/// Tags are opaque strings compared exactly. Tokens without a tag never
/// pass, and an empty whitelist drops everything.
#[derive(Clone, Debug, Default)]
pub struct PosFilter {
    tags: AHashSet<String>,
}

impl PosFilter {
    /// Create a new filter from the allowed tags.
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PosFilter {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if a tag is allowed.
    pub fn allows(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Check whether a token passes the whitelist.
    pub fn accepts(&self, token: &Token) -> bool {
        token.pos_tag().is_some_and(|tag| self.allows(tag))
    }
}

impl Filter for PosFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let kept: Vec<Token> = tokens.filter(|t| self.accepts(t)).collect();
        Ok(Box::new(kept.into_iter()))
    }

    fn name(&self) -> &'static str {
        "pos"
    }
}
