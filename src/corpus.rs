//! Corpus acquisition.
//!
//! Works are read from directory trees of JSON files, each holding a list
//! of poem records, and narrowed down to a configured set of authors.
//!
//! # Core Components
//!
//! - [`work::Work`] - An author and the ordered paragraphs of one poem
//! - [`loader`] - Recursive discovery and parsing of `*.json` record files
//! - [`author_filter`] - Exact-match author selection

pub mod author_filter;
pub mod loader;
pub mod work;

pub use author_filter::filter_works_by_author;
pub use loader::{load_works_from_dirs, load_works_from_file};
pub use work::{UNKNOWN_AUTHOR, Work};
