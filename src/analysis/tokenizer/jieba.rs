use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use jieba_rs::Jieba;

use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, YixiangError};

use super::Tokenizer;

/// Chinese segmenter backed by the jieba dictionary.
///
/// Tags follow the jieba/ICTCLAS scheme (`n`, `nr`, `ns`, `a`, `v`, ...).
pub struct JiebaTokenizer {
    inner: Jieba,
    hmm: bool,
}

impl JiebaTokenizer {
    /// Create a tokenizer with the bundled dictionary and HMM enabled.
    pub fn new() -> Self {
        Self {
            inner: Jieba::new(),
            hmm: true,
        }
    }

    /// Create a tokenizer and extend its dictionary with a user dictionary.
    ///
    /// The file uses jieba's `word [freq] [tag]` line format.
    pub fn with_user_dict<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        let mut tokenizer = Self::new();
        tokenizer.inner.load_dict(&mut reader).map_err(|e| {
            YixiangError::analysis(format!(
                "Failed to load user dictionary {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(tokenizer)
    }

    /// Enable or disable HMM discovery of out-of-vocabulary words.
    pub fn hmm(mut self, hmm: bool) -> Self {
        self.hmm = hmm;
        self
    }
}

impl Default for JiebaTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for JiebaTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut offset = 0;

        // jieba returns contiguous slices of the input, so offsets are a running sum.
        for (position, tag) in self.inner.tag(text, self.hmm).into_iter().enumerate() {
            let end = offset + tag.word.len();
            tokens.push(Token::with_offsets(tag.word, position, offset, end).with_pos_tag(tag.tag));
            offset = end;
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "jieba"
    }
}
