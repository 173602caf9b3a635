//! Author-keyed token accumulation.

use ahash::AHashMap;

/// Ordered mapping from author to that author's imagery tokens.
///
/// Authors iterate in order of first appearance, and each author's tokens
/// stay in the order they were appended.
#[derive(Clone, Debug, Default)]
pub struct AuthorTokenIndex {
    entries: Vec<(String, Vec<String>)>,
    positions: AHashMap<String, usize>,
}

impl AuthorTokenIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append tokens to an author's entry, creating it on first sight.
    pub fn append<I>(&mut self, author: &str, tokens: I)
    where
        I: IntoIterator<Item = String>,
    {
        let idx = match self.positions.get(author) {
            Some(&idx) => idx,
            None => {
                self.entries.push((author.to_string(), Vec::new()));
                self.positions.insert(author.to_string(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        self.entries[idx].1.extend(tokens);
    }

    /// Tokens recorded for an author.
    pub fn get(&self, author: &str) -> Option<&[String]> {
        self.positions
            .get(author)
            .map(|&idx| self.entries[idx].1.as_slice())
    }

    /// Iterate authors and their tokens in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(author, tokens)| (author.as_str(), tokens.as_slice()))
    }

    /// Authors in first-seen order.
    pub fn authors(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(author, _)| author.as_str())
    }

    /// Number of authors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of tokens across all authors.
    pub fn total_tokens(&self) -> usize {
        self.entries.iter().map(|(_, tokens)| tokens.len()).sum()
    }
}

impl PartialEq for AuthorTokenIndex {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for AuthorTokenIndex {}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_insert_if_absent_else_append() {
        let mut index = AuthorTokenIndex::new();
        index.append("苏轼", strings(&["明月", "青天"]));
        index.append("韩愈", strings(&["潮州"]));
        index.append("苏轼", strings(&["十年"]));

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("苏轼").unwrap(), &strings(&["明月", "青天", "十年"])[..]);
        assert_eq!(index.get("韩愈").unwrap(), &strings(&["潮州"])[..]);
        assert!(index.get("柳宗元").is_none());
        assert_eq!(index.total_tokens(), 4);
    }

    #[test]
    fn test_first_seen_author_order() {
        let mut index = AuthorTokenIndex::new();
        index.append("王安石", Vec::new());
        index.append("曾巩", strings(&["江南"]));
        index.append("王安石", strings(&["春风"]));

        let authors: Vec<&str> = index.authors().collect();
        assert_eq!(authors, vec!["王安石", "曾巩"]);
    }

    #[test]
    fn test_empty_append_creates_entry() {
        let mut index = AuthorTokenIndex::new();
        index.append("欧阳修", Vec::new());

        assert_eq!(index.len(), 1);
        assert_eq!(index.get("欧阳修").unwrap().len(), 0);
    }
}
