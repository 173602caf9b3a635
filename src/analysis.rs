//! Text analysis module for Yixiang.
//!
//! This module provides the analysis pipeline that turns a work's raw text
//! into imagery tokens: char filters normalize the text, a tokenizer
//! segments it with part-of-speech tags, and token filters drop stop words,
//! single characters and unwanted parts of speech.

pub mod analyzer;
pub mod char_filter;
pub mod stop_words;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
