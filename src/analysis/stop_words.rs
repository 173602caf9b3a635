//! Stop-word set loading.
//!
//! The stop-word list is optional: a missing or unreadable file only
//! weakens filtering, so [`load_stop_words`] never fails and reports the
//! problem through the log instead.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use ahash::AHashSet;
use log::{info, warn};

/// A deduplicated, read-only set of stop words.
///
/// Cloning is cheap; clones share the same underlying set, so one set can
/// serve every extraction call (including parallel ones).
#[derive(Clone, Debug, Default)]
pub struct StopWordSet {
    words: Arc<AHashSet<String>>,
}

impl StopWordSet {
    /// Create an empty stop-word set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stop-word set from a list of words, stored verbatim.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopWordSet {
            words: Arc::new(words.into_iter().map(Into::into).collect()),
        }
    }

    /// Parse a newline-delimited list: lines are trimmed, blank lines dropped.
    pub fn parse(content: &str) -> Self {
        Self::from_words(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty()),
        )
    }

    /// Check if a word is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Load a stop-word set from a UTF-8 file with one word per line.
///
/// A missing file or any read failure yields an empty set with a warning.
pub fn load_stop_words<P: AsRef<Path>>(path: P) -> StopWordSet {
    let path = path.as_ref();
    if !path.exists() {
        warn!(
            "Stop-word file not found at {}; continuing with an empty stop-word set",
            path.display()
        );
        return StopWordSet::new();
    }

    match fs::read_to_string(path) {
        Ok(content) => {
            let stop_words = StopWordSet::parse(&content);
            info!("Loaded {} stop words from {}", stop_words.len(), path.display());
            stop_words
        }
        Err(e) => {
            warn!("Failed to read stop words from {}: {}", path.display(), e);
            StopWordSet::new()
        }
    }
}
