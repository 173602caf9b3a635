//! Integration tests for imagery extraction and ranking.

use std::sync::Arc;

use yixiang::analysis::token::{Token, TokenStream};
use yixiang::extraction::extract_imagery_tokens;
use yixiang::prelude::*;

/// Greedy dictionary segmenter: known words get their tag, everything else
/// falls out as single characters tagged `x`.
struct DictTokenizer {
    words: Vec<(&'static str, &'static str)>,
}

impl DictTokenizer {
    fn new(words: Vec<(&'static str, &'static str)>) -> Self {
        DictTokenizer { words }
    }
}

impl Tokenizer for DictTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut rest = text;
        let mut offset = 0;

        while let Some(ch) = rest.chars().next() {
            let (word, tag) = self
                .words
                .iter()
                .find(|(w, _)| rest.starts_with(*w))
                .map(|(w, t)| (w.to_string(), *t))
                .unwrap_or_else(|| (ch.to_string(), "x"));
            let len = word.len();
            tokens.push(
                Token::with_offsets(word, tokens.len(), offset, offset + len).with_pos_tag(tag),
            );
            rest = &rest[len..];
            offset += len;
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "dict"
    }
}

fn poem_tokenizer() -> Arc<dyn Tokenizer> {
    Arc::new(DictTokenizer::new(vec![
        ("明月", "n"),
        ("青天", "n"),
        ("十年", "n"),
        ("生死", "n"),
        ("潮州", "n"),
        ("路", "n"),
        ("茫茫", "a"),
        ("东坡", "nr"),
        ("不知", "d"),
        ("我们", "n"),
    ]))
}

fn sample_works() -> Vec<Work> {
    vec![
        Work::new("A", ["明月青天"]),
        Work::new("A", ["十年生死"]),
        Work::new("B", ["潮州路"]),
    ]
}

#[test]
fn test_worked_example() -> Result<()> {
    let (tokens, by_author) =
        extract_imagery_tokens(&sample_works(), &StopWordSet::new(), &["n"], poem_tokenizer());

    assert_eq!(tokens, vec!["明月", "青天", "十年", "生死", "潮州"]);
    assert_eq!(by_author.get("A").unwrap(), &["明月", "青天", "十年", "生死"]);
    assert_eq!(by_author.get("B").unwrap(), &["潮州"]);
    assert_eq!(by_author.authors().collect::<Vec<_>>(), vec!["A", "B"]);

    let ranked: Vec<(String, usize)> = rank(&tokens, 3)
        .iter()
        .map(|e| (e.word.clone(), e.frequency))
        .collect();
    assert_eq!(
        ranked,
        vec![
            ("明月".to_string(), 1),
            ("青天".to_string(), 1),
            ("十年".to_string(), 1)
        ]
    );
    Ok(())
}

#[test]
fn test_every_token_passes_all_filters() {
    let stop_words = StopWordSet::from_words(["生死"]);
    let works = vec![
        Work::new("苏轼", ["十年生死两茫茫，", "不知东坡明月路"]),
        Work::new("韩愈", ["潮州路", "我们"]),
    ];

    let extraction =
        ImageryExtractor::new(poem_tokenizer(), stop_words.clone(), &["n", "a"]).extract(&works);

    assert!(!extraction.tokens.is_empty());
    for token in &extraction.tokens {
        assert!(!stop_words.contains(token), "{token} is a stop word");
        assert!(token.chars().count() > 1, "{token} is too short");
    }
    // "东坡" is nr and "不知" is d: both outside the whitelist.
    assert!(!extraction.tokens.iter().any(|t| t == "东坡" || t == "不知"));
    assert!(extraction.tokens.iter().any(|t| t == "茫茫"));
}

#[test]
fn test_author_streams_partition_global_stream() {
    let works = vec![
        Work::new("甲", ["明月青天"]),
        Work::new("乙", ["潮州路"]),
        Work::new("甲", ["十年生死"]),
        Work::new("丙", ["路"]),
        Work::new("乙", ["明月"]),
    ];

    let extraction =
        ImageryExtractor::new(poem_tokenizer(), StopWordSet::new(), &["n"]).extract(&works);

    assert_eq!(extraction.by_author.total_tokens(), extraction.tokens.len());
    assert_eq!(
        extraction.by_author.get("甲").unwrap(),
        &["明月", "青天", "十年", "生死"]
    );
    assert_eq!(extraction.by_author.get("乙").unwrap(), &["潮州", "明月"]);
    // A work with no surviving tokens still records its author.
    assert_eq!(extraction.by_author.get("丙").unwrap(), &[] as &[String]);
}

#[test]
fn test_work_order_changes_global_stream() {
    let mut works = sample_works();
    works.reverse();

    let (tokens, by_author) =
        extract_imagery_tokens(&works, &StopWordSet::new(), &["n"], poem_tokenizer());

    assert_eq!(tokens, vec!["潮州", "十年", "生死", "明月", "青天"]);
    assert_eq!(by_author.authors().collect::<Vec<_>>(), vec!["B", "A"]);
}

#[test]
fn test_counts_are_conserved() {
    let works: Vec<Work> = (0..40)
        .map(|i| {
            let text = match i % 4 {
                0 => "明月青天",
                1 => "十年生死明月",
                2 => "潮州路",
                _ => "茫茫明月",
            };
            Work::new(format!("author{}", i % 3), [text])
        })
        .collect();

    let extraction =
        ImageryExtractor::new(poem_tokenizer(), StopWordSet::new(), &["n", "a"]).extract(&works);
    let table = FrequencyTable::from_tokens(&extraction.tokens);

    assert_eq!(table.total(), extraction.tokens.len());
    assert_eq!(table.get("明月"), Some(30));

    let report = FrequencyReport::build(&extraction, 100);
    let author_total: usize = report.authors.iter().map(|a| a.table.total()).sum();
    assert_eq!(author_total, extraction.tokens.len());
}

#[test]
fn test_top_n_is_min_of_n_and_distinct() {
    let tokens = ["明月", "青天", "明月", "潮州", "十年"];
    for n in 0..8 {
        assert_eq!(rank(&tokens, n).len(), n.min(4));
    }
}

#[test]
fn test_ranking_is_deterministic() {
    let works = sample_works();
    let extractor = ImageryExtractor::new(poem_tokenizer(), StopWordSet::new(), &["n"]);

    let first = FrequencyReport::build(&extractor.extract(&works), 3);
    let second = FrequencyReport::build(&extractor.extract(&works), 3);
    assert_eq!(first, second);
}

#[test]
fn test_parallel_matches_sequential() {
    let works: Vec<Work> = (0..200)
        .map(|i| {
            let text = if i % 2 == 0 { "明月青天潮州" } else { "十年生死茫茫" };
            Work::new(format!("author{}", i % 7), [text])
        })
        .collect();

    let sequential =
        ImageryExtractor::new(poem_tokenizer(), StopWordSet::new(), &["n", "a"]).extract(&works);
    let parallel = ImageryExtractor::new(poem_tokenizer(), StopWordSet::new(), &["n", "a"])
        .parallel(true)
        .threads(Some(4))
        .extract(&works);

    assert_eq!(sequential, parallel);
}

#[test]
fn test_missing_stop_word_file_degrades_to_empty_set() {
    let dir = tempfile::tempdir().unwrap();
    let stop_words = load_stop_words(dir.path().join("absent.txt"));
    assert!(stop_words.is_empty());

    let (tokens, _) = extract_imagery_tokens(&sample_works(), &stop_words, &["n"], poem_tokenizer());
    assert_eq!(tokens.len(), 5);
}

#[test]
fn test_empty_input_yields_empty_output() {
    let (tokens, by_author) =
        extract_imagery_tokens(&[], &StopWordSet::new(), &["n"], poem_tokenizer());
    assert!(tokens.is_empty());
    assert!(by_author.is_empty());

    let empty: [&str; 0] = [];
    assert!(rank(&empty, 30).is_empty());
}
