//! Pipeline configuration.
//!
//! Defaults reproduce the classic run: Tang and Song corpus directories,
//! the Eight Masters of Tang and Song (in both simplified and traditional
//! spellings), nouns and adjectives, top 30.
//!
//! # Example
//!
//! ```
//! use yixiang::config::PipelineConfig;
//!
//! let config: PipelineConfig = serde_json::from_str(r#"{"top_n": 10}"#).unwrap();
//! assert_eq!(config.top_n, 10);
//! assert_eq!(config.pos_tags, vec!["n", "nr", "ns", "nt", "a"]);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, YixiangError};

/// Default corpus directories.
pub const DEFAULT_DATA_DIRS: &[&str] = &["./chinese-poetry/全唐诗", "./chinese-poetry/宋词"];

/// Default stop-word list location.
pub const DEFAULT_STOP_WORDS_PATH: &str = "assets/chinese_stop_words.txt";

/// The Eight Masters of Tang and Song, simplified and traditional forms.
pub const TANG_SONG_EIGHT_MASTERS: &[&str] = &[
    "韩愈", "柳宗元", "欧阳修", "苏洵", "苏轼", "苏辙", "曾巩", "王安石", "韓愈", "歐陽修",
    "蘇洵", "蘇軾", "蘇轍", "曾鞏",
];

/// Nouns (common, person, place, organization) and adjectives.
pub const DEFAULT_POS_TAGS: &[&str] = &["n", "nr", "ns", "nt", "a"];

/// Default number of ranked entries per table.
pub const DEFAULT_TOP_N: usize = 30;

/// Configuration for one extraction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Directories searched recursively for `*.json` work files.
    pub data_dirs: Vec<PathBuf>,

    /// Newline-delimited stop-word list; optional.
    pub stop_words_path: PathBuf,

    /// Authors to keep, matched exactly.
    pub authors: Vec<String>,

    /// POS tags accepted as imagery.
    pub pos_tags: Vec<String>,

    /// Entries per ranked table.
    pub top_n: usize,

    /// Extract works on a worker pool.
    pub parallel: bool,

    /// Worker pool size; defaults to the number of CPUs.
    pub threads: Option<usize>,

    /// Let jieba guess out-of-vocabulary words with its HMM.
    pub hmm: bool,

    /// Extra segmentation dictionary in jieba format.
    pub user_dict_path: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            data_dirs: DEFAULT_DATA_DIRS.iter().map(PathBuf::from).collect(),
            stop_words_path: PathBuf::from(DEFAULT_STOP_WORDS_PATH),
            authors: TANG_SONG_EIGHT_MASTERS.iter().map(|s| s.to_string()).collect(),
            pos_tags: DEFAULT_POS_TAGS.iter().map(|s| s.to_string()).collect(),
            top_n: DEFAULT_TOP_N,
            parallel: false,
            threads: None,
            hmm: true,
            user_dict_path: None,
        }
    }
}

impl PipelineConfig {
    /// Load a configuration from a JSON file; absent keys take defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: PipelineConfig = serde_json::from_str(&content).map_err(|e| {
            YixiangError::config(format!("Invalid config {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make a run meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.pos_tags.is_empty() {
            return Err(YixiangError::config("pos_tags must not be empty"));
        }
        if self.threads == Some(0) {
            return Err(YixiangError::config("threads must be at least 1"));
        }
        Ok(())
    }

    /// Worker pool size used for parallel runs.
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.data_dirs.len(), 2);
        assert_eq!(config.top_n, 30);
        assert!(config.authors.contains(&"蘇軾".to_string()));
        assert!(config.authors.contains(&"苏轼".to_string()));
        assert!(!config.parallel);
        assert!(config.hmm);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file_partial() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("yixiang.json");
        fs::write(
            &path,
            r#"{"authors": ["李白"], "pos_tags": ["n"], "parallel": true, "threads": 2, "hmm": false}"#,
        )
        .unwrap();

        let config = PipelineConfig::from_file(&path).unwrap();
        assert_eq!(config.authors, vec!["李白"]);
        assert_eq!(config.pos_tags, vec!["n"]);
        assert_eq!(config.effective_threads(), 2);
        assert!(!config.hmm);
        assert_eq!(config.top_n, DEFAULT_TOP_N);
    }

    #[test]
    fn test_from_file_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");

        fs::write(&path, r#"{"top_n": "many"}"#).unwrap();
        assert!(matches!(PipelineConfig::from_file(&path), Err(YixiangError::Config(_))));

        fs::write(&path, r#"{"pos_tags": []}"#).unwrap();
        assert!(matches!(PipelineConfig::from_file(&path), Err(YixiangError::Config(_))));

        assert!(matches!(
            PipelineConfig::from_file(dir.path().join("missing.json")),
            Err(YixiangError::Io(_))
        ));
    }
}
