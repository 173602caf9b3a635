//! Frequency counting and ranking.
//!
//! A [`FrequencyTable`] counts exact token occurrences and keeps its entries
//! ranked: count descending, ties in order of first occurrence. Ranking is a
//! stable sort over first-occurrence order, so identical input always
//! produces identical tables, tie order included.
//!
//! # Examples
//!
//! ```
//! use yixiang::frequency::rank;
//!
//! let tokens = ["明月", "青天", "明月", "潮州"];
//! let table = rank(&tokens, 2);
//!
//! assert_eq!(table.get("明月"), Some(2));
//! assert_eq!(table.words().collect::<Vec<_>>(), vec!["明月", "青天"]);
//! ```

use ahash::AHashMap;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::extraction::{AuthorTokenIndex, Extraction};

/// One ranked entry of a frequency table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub frequency: usize,
}

/// Word counts ranked by frequency, ties kept in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    entries: Vec<WordFrequency>,
}

impl FrequencyTable {
    /// Count tokens into a full, ranked table.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<WordFrequency> = Vec::new();
        let mut positions: AHashMap<String, usize> = AHashMap::new();

        for token in tokens {
            let word = token.as_ref();
            match positions.get(word) {
                Some(&idx) => entries[idx].frequency += 1,
                None => {
                    positions.insert(word.to_string(), entries.len());
                    entries.push(WordFrequency {
                        word: word.to_string(),
                        frequency: 1,
                    });
                }
            }
        }

        // Stable: equal counts keep first-occurrence order.
        entries.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        FrequencyTable { entries }
    }

    /// The `n` highest-ranked entries (fewer if the table is smaller).
    pub fn top(&self, n: usize) -> Self {
        FrequencyTable {
            entries: self.entries.iter().take(n).cloned().collect(),
        }
    }

    /// Shorten the table to at most `n` entries.
    pub fn truncate(&mut self, n: usize) {
        self.entries.truncate(n);
    }

    /// Count for a word, if present.
    pub fn get(&self, word: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.word == word)
            .map(|e| e.frequency)
    }

    /// Ranked entries.
    pub fn entries(&self) -> &[WordFrequency] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordFrequency> {
        self.entries.iter()
    }

    /// Words in rank order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.word.as_str())
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.frequency).sum()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a WordFrequency;
    type IntoIter = std::slice::Iter<'a, WordFrequency>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// One author's frequency table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorFrequency {
    pub author: String,
    pub table: FrequencyTable,
}

/// Rank a token stream and keep the top `top_n` entries.
///
/// An empty stream yields an empty table and a warning.
pub fn rank<S: AsRef<str>>(tokens: &[S], top_n: usize) -> FrequencyTable {
    if tokens.is_empty() {
        warn!("Global token list is empty; nothing to count");
        return FrequencyTable::default();
    }

    let mut table = FrequencyTable::from_tokens(tokens);
    table.truncate(top_n);
    info!("Ranked top {} of {} tokens", table.len(), tokens.len());
    table
}

/// Full (untruncated) frequency table for every author, in index order.
///
/// Authors whose stream is empty get an empty table.
pub fn rank_by_author(index: &AuthorTokenIndex) -> Vec<AuthorFrequency> {
    index
        .iter()
        .map(|(author, tokens)| AuthorFrequency {
            author: author.to_string(),
            table: FrequencyTable::from_tokens(tokens),
        })
        .collect()
}

/// Ranked tables handed to the presentation layer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyReport {
    pub top_n: usize,
    pub total_tokens: usize,
    pub global: FrequencyTable,
    pub authors: Vec<AuthorFrequency>,
}

impl FrequencyReport {
    /// Build the global and per-author top-N tables.
    ///
    /// Authors that contributed no tokens are left out.
    pub fn build(extraction: &Extraction, top_n: usize) -> Self {
        let global = rank(&extraction.tokens, top_n);
        let authors = rank_by_author(&extraction.by_author)
            .into_iter()
            .filter(|entry| !entry.table.is_empty())
            .map(|entry| {
                info!(
                    "Counted {} tokens for {}",
                    entry.table.total(),
                    entry.author
                );
                AuthorFrequency {
                    table: entry.table.top(top_n),
                    author: entry.author,
                }
            })
            .collect();

        FrequencyReport {
            top_n,
            total_tokens: extraction.tokens.len(),
            global,
            authors,
        }
    }

    /// Table for one author.
    pub fn author(&self, author: &str) -> Option<&FrequencyTable> {
        self.authors
            .iter()
            .find(|entry| entry.author == author)
            .map(|entry| &entry.table)
    }

    pub fn is_empty(&self) -> bool {
        self.global.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_desc_then_first_seen() {
        let tokens = ["潮州", "明月", "青天", "明月", "青天", "江南", "明月"];
        let table = FrequencyTable::from_tokens(tokens);

        let ranked: Vec<(&str, usize)> =
            table.iter().map(|e| (e.word.as_str(), e.frequency)).collect();
        assert_eq!(
            ranked,
            vec![("明月", 3), ("青天", 2), ("潮州", 1), ("江南", 1)]
        );
    }

    #[test]
    fn test_rank_truncates() {
        let tokens = ["a1", "b1", "c1", "a1"];
        assert_eq!(rank(&tokens, 2).len(), 2);
        assert_eq!(rank(&tokens, 3).len(), 3);
        // Never pads.
        assert_eq!(rank(&tokens, 10).len(), 3);
        assert_eq!(rank(&tokens, 0).len(), 0);
    }

    #[test]
    fn test_rank_empty() {
        let tokens: [&str; 0] = [];
        assert!(rank(&tokens, 5).is_empty());
    }

    #[test]
    fn test_rank_by_author_keeps_order_and_empty_authors() {
        let mut index = AuthorTokenIndex::new();
        index.append("韩愈", vec!["潮州".to_string(), "潮州".to_string()]);
        index.append("柳宗元", Vec::new());
        index.append("苏轼", vec!["明月".to_string()]);

        let tables = rank_by_author(&index);
        let authors: Vec<&str> = tables.iter().map(|t| t.author.as_str()).collect();

        assert_eq!(authors, vec!["韩愈", "柳宗元", "苏轼"]);
        assert_eq!(tables[0].table.get("潮州"), Some(2));
        assert!(tables[1].table.is_empty());
    }

    #[test]
    fn test_report_omits_empty_authors() {
        let mut by_author = AuthorTokenIndex::new();
        by_author.append("苏轼", vec!["明月".to_string(), "青天".to_string(), "明月".to_string()]);
        by_author.append("曾巩", Vec::new());
        let extraction = Extraction {
            tokens: vec!["明月".into(), "青天".into(), "明月".into()],
            by_author,
            skipped: 0,
        };

        let report = FrequencyReport::build(&extraction, 1);

        assert_eq!(report.total_tokens, 3);
        assert_eq!(report.global.words().collect::<Vec<_>>(), vec!["明月"]);
        assert_eq!(report.authors.len(), 1);
        assert_eq!(report.author("苏轼").unwrap().len(), 1);
        assert!(report.author("曾巩").is_none());
    }

    #[test]
    fn test_serializes_as_list() {
        let table = FrequencyTable::from_tokens(["明月"]);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"[{"word":"明月","frequency":1}]"#);
    }
}
