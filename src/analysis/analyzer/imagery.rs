//! Imagery analyzer.
//!
//! Builds the analysis chain used to pull imagery words out of a poem:
//!
//! ```text
//! strip whitespace → segment with POS → drop stop words
//!                  → drop single characters → keep whitelisted POS
//! ```
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use yixiang::analysis::analyzer::Analyzer;
//! use yixiang::analysis::analyzer::imagery::ImageryAnalyzer;
//! use yixiang::analysis::stop_words::StopWordSet;
//! use yixiang::analysis::token::{Token, TokenStream};
//! use yixiang::analysis::tokenizer::Tokenizer;
//! use yixiang::error::Result;
//!
//! struct Canned;
//!
//! impl Tokenizer for Canned {
//!     fn tokenize(&self, _text: &str) -> Result<TokenStream> {
//!         Ok(Box::new(vec![
//!             Token::new("潮州", 0).with_pos_tag("ns"),
//!             Token::new("路", 1).with_pos_tag("n"),
//!         ].into_iter()))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "canned"
//!     }
//! }
//!
//! let analyzer = ImageryAnalyzer::new(Arc::new(Canned), StopWordSet::new(), &["n", "ns"]);
//! let words: Vec<String> = analyzer.analyze("潮州路").unwrap().map(|t| t.text).collect();
//! assert_eq!(words, vec!["潮州"]);
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::WhitespaceStripCharFilter;
use crate::analysis::stop_words::StopWordSet;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::{MinLengthFilter, PosFilter, StopFilter};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// Minimum imagery word length in characters.
pub const MIN_IMAGERY_CHARS: usize = 2;

/// Why a segmented token was or was not kept.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenVerdict {
    pub token: Token,
    pub stop_word: bool,
    pub too_short: bool,
    pub pos_rejected: bool,
}

impl TokenVerdict {
    /// A token is kept only when no filter rejected it.
    pub fn kept(&self) -> bool {
        !(self.stop_word || self.too_short || self.pos_rejected)
    }
}

/// Analyzer producing imagery tokens from raw poem text.
#[derive(Clone, Debug)]
pub struct ImageryAnalyzer {
    inner: PipelineAnalyzer,
    stop: StopFilter,
    length: MinLengthFilter,
    pos: PosFilter,
}

impl ImageryAnalyzer {
    /// Create an imagery analyzer over a tokenizer, stop words and POS whitelist.
    pub fn new<S: AsRef<str>>(
        tokenizer: Arc<dyn Tokenizer>,
        stop_words: StopWordSet,
        pos_tags: &[S],
    ) -> Self {
        let stop = StopFilter::new(stop_words);
        let length = MinLengthFilter::new(MIN_IMAGERY_CHARS);
        let pos = PosFilter::new(pos_tags.iter().map(|t| t.as_ref().to_string()));

        let inner = PipelineAnalyzer::new(tokenizer)
            .add_char_filter(Arc::new(WhitespaceStripCharFilter::new()))
            .add_filter(Arc::new(stop.clone()))
            .add_filter(Arc::new(length.clone()))
            .add_filter(Arc::new(pos.clone()))
            .with_name("imagery");

        ImageryAnalyzer {
            inner,
            stop,
            length,
            pos,
        }
    }

    /// The whitespace-stripped text handed to the tokenizer.
    pub fn normalize(&self, text: &str) -> String {
        self.inner.normalize(text)
    }

    /// Segment the text and report, per token, which filters rejected it.
    pub fn explain(&self, text: &str) -> Result<Vec<TokenVerdict>> {
        let verdicts = self
            .inner
            .segment(text)?
            .map(|token| TokenVerdict {
                stop_word: self.stop.is_stop_word(&token.text),
                too_short: token.char_len() < self.length.min_chars(),
                pos_rejected: !self.pos.accepts(&token),
                token,
            })
            .collect();
        Ok(verdicts)
    }

    /// Name of the underlying tokenizer.
    pub fn tokenizer_name(&self) -> &'static str {
        self.inner.tokenizer().name()
    }
}

impl Analyzer for ImageryAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "imagery"
    }
}
