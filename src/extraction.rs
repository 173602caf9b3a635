//! Imagery token extraction.
//!
//! Runs every work through the [`ImageryAnalyzer`] and gathers the
//! surviving words into one global stream and one stream per author.
//!
//! Each work is handled independently and yields a [`WorkOutcome`]: either
//! its tokens or the reason it was skipped. A failing work never aborts the
//! batch. Outcomes are reduced in input order, so a parallel run produces
//! exactly the same streams as a sequential one.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use yixiang::analysis::stop_words::StopWordSet;
//! use yixiang::analysis::token::{Token, TokenStream};
//! use yixiang::analysis::tokenizer::Tokenizer;
//! use yixiang::corpus::Work;
//! use yixiang::error::Result;
//! use yixiang::extraction::ImageryExtractor;
//!
//! /// Tags every two characters as a noun.
//! struct Pairs;
//!
//! impl Tokenizer for Pairs {
//!     fn tokenize(&self, text: &str) -> Result<TokenStream> {
//!         let chars: Vec<char> = text.chars().collect();
//!         let tokens: Vec<Token> = chars
//!             .chunks(2)
//!             .enumerate()
//!             .map(|(i, c)| Token::new(c.iter().collect::<String>(), i).with_pos_tag("n"))
//!             .collect();
//!         Ok(Box::new(tokens.into_iter()))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "pairs"
//!     }
//! }
//!
//! let extractor = ImageryExtractor::new(Arc::new(Pairs), StopWordSet::new(), &["n"]);
//! let works = vec![Work::new("苏轼", ["明月青天"]), Work::new("韩愈", ["潮州路"])];
//!
//! let extraction = extractor.extract(&works);
//! assert_eq!(extraction.tokens, vec!["明月", "青天", "潮州"]);
//! assert_eq!(extraction.by_author.get("韩愈").unwrap(), &["潮州".to_string()][..]);
//! ```

pub mod author_index;

pub use author_index::AuthorTokenIndex;

use std::sync::Arc;

use log::{info, warn};
use rayon::prelude::*;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::imagery::ImageryAnalyzer;
use crate::analysis::char_filter::WhitespaceStripCharFilter;
use crate::analysis::stop_words::StopWordSet;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::Tokenizer;
use crate::corpus::Work;

/// Result of extracting one work.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorkOutcome {
    /// Surviving imagery words in segmentation order.
    Extracted(Vec<String>),
    /// Segmentation failed; the work contributes nothing.
    Skipped(String),
}

/// Aggregated extraction output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Every work's tokens concatenated in work order.
    pub tokens: Vec<String>,
    /// Tokens grouped by author, authors in first-seen order.
    pub by_author: AuthorTokenIndex,
    /// Number of works skipped because segmentation failed.
    pub skipped: usize,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Extracts imagery tokens from works.
#[derive(Clone, Debug)]
pub struct ImageryExtractor {
    analyzer: ImageryAnalyzer,
    parallel: bool,
    threads: Option<usize>,
}

impl ImageryExtractor {
    /// Create a sequential extractor.
    pub fn new<S: AsRef<str>>(
        tokenizer: Arc<dyn Tokenizer>,
        stop_words: StopWordSet,
        pos_tags: &[S],
    ) -> Self {
        Self::from_analyzer(ImageryAnalyzer::new(tokenizer, stop_words, pos_tags))
    }

    /// Create a sequential extractor around an existing analyzer.
    pub fn from_analyzer(analyzer: ImageryAnalyzer) -> Self {
        ImageryExtractor {
            analyzer,
            parallel: false,
            threads: None,
        }
    }

    /// Process works on a rayon worker pool.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Size of the worker pool; `None` uses rayon's global pool.
    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }

    /// Extract the imagery tokens of a single work.
    pub fn extract_work(&self, work: &Work) -> WorkOutcome {
        // The analyzer strips whitespace itself; only blank works stop here.
        let text = work.paragraphs.concat();
        if WhitespaceStripCharFilter::strips_to_empty(&text) {
            return WorkOutcome::Extracted(Vec::new());
        }

        match self.analyzer.analyze(&text) {
            Ok(tokens) => WorkOutcome::Extracted(tokens.map(Token::into_text).collect()),
            Err(e) => WorkOutcome::Skipped(e.to_string()),
        }
    }

    /// Extract every work and aggregate globally and per author.
    pub fn extract(&self, works: &[Work]) -> Extraction {
        let mut extraction = Extraction::default();
        if works.is_empty() {
            return extraction;
        }

        let outcomes = if self.parallel {
            self.extract_parallel(works)
        } else {
            works.iter().map(|work| self.extract_work(work)).collect()
        };

        for (idx, (work, outcome)) in works.iter().zip(outcomes).enumerate() {
            match outcome {
                WorkOutcome::Extracted(tokens) => {
                    extraction.tokens.extend(tokens.iter().cloned());
                    extraction.by_author.append(&work.author, tokens);
                }
                WorkOutcome::Skipped(reason) => {
                    warn!("Skipping work #{} by {}: {}", idx, work.author, reason);
                    extraction.skipped += 1;
                }
            }
        }

        info!(
            "Extracted {} imagery tokens from {} works across {} authors",
            extraction.tokens.len(),
            works.len() - extraction.skipped,
            extraction.by_author.len()
        );
        extraction
    }

    fn extract_parallel(&self, works: &[Work]) -> Vec<WorkOutcome> {
        // Indexed collect keeps input order.
        let run = || {
            works
                .par_iter()
                .map(|work| self.extract_work(work))
                .collect::<Vec<_>>()
        };

        match self.threads {
            Some(threads) => match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
                Ok(pool) => pool.install(run),
                Err(e) => {
                    warn!("Failed to build a {threads}-thread pool ({e}); using the global pool");
                    run()
                }
            },
            None => run(),
        }
    }
}

/// Extract imagery tokens from works in one call.
///
/// Returns the global token stream and the per-author index.
pub fn extract_imagery_tokens<S: AsRef<str>>(
    works: &[Work],
    stop_words: &StopWordSet,
    pos_tags: &[S],
    tokenizer: Arc<dyn Tokenizer>,
) -> (Vec<String>, AuthorTokenIndex) {
    let extraction = ImageryExtractor::new(tokenizer, stop_words.clone(), pos_tags).extract(works);
    (extraction.tokens, extraction.by_author)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::TokenStream;
    use crate::error::{Result, YixiangError};

    /// Emits two-character nouns; fails on text containing "错".
    struct PairTokenizer;

    impl Tokenizer for PairTokenizer {
        fn tokenize(&self, text: &str) -> Result<TokenStream> {
            if text.contains('错') {
                return Err(YixiangError::analysis("unsegmentable"));
            }
            let chars: Vec<char> = text.chars().collect();
            let tokens: Vec<Token> = chars
                .chunks(2)
                .enumerate()
                .map(|(i, c)| Token::new(c.iter().collect::<String>(), i).with_pos_tag("n"))
                .collect();
            Ok(Box::new(tokens.into_iter()))
        }

        fn name(&self) -> &'static str {
            "pair"
        }
    }

    fn extractor() -> ImageryExtractor {
        ImageryExtractor::new(Arc::new(PairTokenizer), StopWordSet::new(), &["n"])
    }

    #[test]
    fn test_empty_input() {
        let extraction = extractor().extract(&[]);
        assert!(extraction.tokens.is_empty());
        assert!(extraction.by_author.is_empty());
    }

    #[test]
    fn test_empty_work_contributes_nothing() {
        let works = vec![
            Work::new("苏轼", Vec::<String>::new()),
            Work::new("苏轼", [" \u{3000}\n"]),
            Work::new("韩愈", ["潮州"]),
        ];

        let extraction = extractor().extract(&works);
        assert_eq!(extraction.tokens, vec!["潮州"]);
        assert_eq!(extraction.by_author.get("苏轼").unwrap().len(), 0);
        assert_eq!(extraction.skipped, 0);
    }

    /// Fails on every call.
    struct FailingTokenizer;

    impl Tokenizer for FailingTokenizer {
        fn tokenize(&self, _text: &str) -> Result<TokenStream> {
            Err(YixiangError::analysis("tokenizer called"))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[test]
    fn test_blank_work_never_reaches_tokenizer() {
        let extractor = ImageryExtractor::new(Arc::new(FailingTokenizer), StopWordSet::new(), &["n"]);

        assert_eq!(
            extractor.extract_work(&Work::new("苏轼", ["\u{3000}", " \n"])),
            WorkOutcome::Extracted(Vec::new())
        );
        assert!(matches!(
            extractor.extract_work(&Work::new("苏轼", ["明月"])),
            WorkOutcome::Skipped(_)
        ));
    }

    #[test]
    fn test_failed_work_is_skipped() {
        let works = vec![
            Work::new("苏轼", ["明月"]),
            Work::new("韩愈", ["错误"]),
            Work::new("苏轼", ["青天"]),
        ];

        let extraction = extractor().extract(&works);
        assert_eq!(extraction.tokens, vec!["明月", "青天"]);
        assert_eq!(extraction.skipped, 1);
        assert!(extraction.by_author.get("韩愈").is_none());
    }

    #[test]
    fn test_extract_work_outcome() {
        let extractor = extractor();
        assert_eq!(
            extractor.extract_work(&Work::new("A", ["明月", "青天路"])),
            WorkOutcome::Extracted(vec!["明月".to_string(), "青天".to_string()])
        );
        assert!(matches!(
            extractor.extract_work(&Work::new("A", ["错"])),
            WorkOutcome::Skipped(_)
        ));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let works: Vec<Work> = (0..64)
            .map(|i| {
                let author = ["苏轼", "韩愈", "王安石"][i % 3];
                let text = ["明月青天", "十年生死", "潮州江南", "错字"][i % 4];
                Work::new(author, [text])
            })
            .collect();

        let sequential = extractor().extract(&works);
        let parallel = extractor().parallel(true).threads(Some(4)).extract(&works);

        assert_eq!(sequential, parallel);
        assert_eq!(sequential.skipped, 16);
    }

    #[test]
    fn test_extract_imagery_tokens() {
        let works = vec![Work::new("A", ["明月之上"])];
        let stop_words = StopWordSet::from_words(["之上"]);

        let (tokens, by_author) =
            extract_imagery_tokens(&works, &stop_words, &["n"], Arc::new(PairTokenizer));

        assert_eq!(tokens, vec!["明月"]);
        assert_eq!(by_author.total_tokens(), 1);
    }
}
