//! # Yixiang
//!
//! Imagery vocabulary extraction for classical Chinese poetry.
//!
//! ## Features
//!
//! - Recursive loading of JSON work records and exact author filtering
//! - Text normalization, POS-tagged segmentation and imagery filtering
//! - Global and per-author frequency tables with stable tie ordering
//! - Optional parallel extraction with order-preserving reassembly

pub mod analysis;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod extraction;
pub mod frequency;

pub mod prelude {
    pub use crate::analysis::stop_words::{StopWordSet, load_stop_words};
    pub use crate::analysis::tokenizer::Tokenizer;
    pub use crate::config::PipelineConfig;
    pub use crate::corpus::{Work, filter_works_by_author, load_works_from_dirs};
    pub use crate::error::{Result, YixiangError};
    pub use crate::extraction::{AuthorTokenIndex, Extraction, ImageryExtractor};
    pub use crate::frequency::{FrequencyReport, FrequencyTable, rank, rank_by_author};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
