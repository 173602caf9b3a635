//! Command line argument parsing for Yixiang CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::PipelineConfig;
use crate::error::Result;

/// Yixiang - imagery vocabulary analysis for classical Chinese poetry
#[derive(Parser, Debug, Clone)]
#[command(name = "yixiang")]
#[command(about = "Imagery vocabulary frequency analysis for classical Chinese poetry")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct YixiangArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl YixiangArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Load the corpus, extract imagery and print frequency tables
    Analyze(AnalyzeArgs),

    /// Show how a piece of text is segmented and filtered
    Segment(SegmentArgs),
}

/// Options shared by every command that runs the analysis pipeline.
#[derive(Args, Debug, Clone, Default)]
pub struct PipelineOptions {
    /// JSON configuration file
    #[arg(short, long, value_name = "CONFIG_FILE", env = "YIXIANG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Stop-word list, one word per line
    #[arg(long, value_name = "FILE", env = "YIXIANG_STOP_WORDS")]
    pub stop_words: Option<PathBuf>,

    /// POS tags kept as imagery (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub pos: Vec<String>,

    /// Additional jieba user dictionary
    #[arg(long, value_name = "FILE")]
    pub user_dict: Option<PathBuf>,

    /// Disable HMM discovery of unknown words during segmentation
    #[arg(long)]
    pub no_hmm: bool,
}

impl PipelineOptions {
    /// Start from the config file (or defaults) and apply the flags on top.
    pub fn load_config(&self) -> Result<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::from_file(path)?,
            None => PipelineConfig::default(),
        };

        if let Some(stop_words) = &self.stop_words {
            config.stop_words_path = stop_words.clone();
        }
        if !self.pos.is_empty() {
            config.pos_tags = self.pos.clone();
        }
        if let Some(user_dict) = &self.user_dict {
            config.user_dict_path = Some(user_dict.clone());
        }
        if self.no_hmm {
            config.hmm = false;
        }

        Ok(config)
    }
}

/// Arguments for a full analysis run
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Corpus directories (default: from config)
    #[arg(value_name = "DATA_DIR")]
    pub data_dirs: Vec<PathBuf>,

    #[command(flatten)]
    pub pipeline: PipelineOptions,

    /// Author to include; repeat for several (default: from config)
    #[arg(short, long = "author", value_name = "AUTHOR")]
    pub authors: Vec<String>,

    /// Number of entries per ranked table
    #[arg(short = 'n', long)]
    pub top_n: Option<usize>,

    /// Extract works in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker threads for parallel extraction
    #[arg(short, long)]
    pub threads: Option<usize>,
}

impl AnalyzeArgs {
    /// Resolve the configuration for this run.
    pub fn resolve_config(&self) -> Result<PipelineConfig> {
        let mut config = self.pipeline.load_config()?;

        if !self.data_dirs.is_empty() {
            config.data_dirs = self.data_dirs.clone();
        }
        if !self.authors.is_empty() {
            config.authors = self.authors.clone();
        }
        if let Some(top_n) = self.top_n {
            config.top_n = top_n;
        }
        if self.parallel {
            config.parallel = true;
        }
        if self.threads.is_some() {
            config.threads = self.threads;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Arguments for inspecting segmentation
#[derive(Parser, Debug, Clone)]
pub struct SegmentArgs {
    /// Text to segment
    #[arg(value_name = "TEXT")]
    pub text: String,

    #[command(flatten)]
    pub pipeline: PipelineOptions,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable tables
    Human,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}
