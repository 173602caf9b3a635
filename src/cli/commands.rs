//! Command implementations for Yixiang CLI.

use std::sync::Arc;
use std::time::Instant;

use log::{debug, info};

use crate::analysis::analyzer::imagery::ImageryAnalyzer;
use crate::analysis::stop_words::load_stop_words;
use crate::analysis::tokenizer::{JiebaTokenizer, Tokenizer};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::PipelineConfig;
use crate::corpus::{filter_works_by_author, load_works_from_dirs};
use crate::error::Result;
use crate::extraction::ImageryExtractor;
use crate::frequency::FrequencyReport;

/// Execute a CLI command.
pub fn execute_command(args: YixiangArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze(analyze_args, &args),
        Command::Segment(segment_args) => segment(segment_args, &args),
    }
}

/// Build the jieba tokenizer, loading the user dictionary when configured.
fn build_tokenizer(config: &PipelineConfig) -> Result<Arc<dyn Tokenizer>> {
    let tokenizer = match &config.user_dict_path {
        Some(path) => {
            info!("Loading user dictionary from {}", path.display());
            JiebaTokenizer::with_user_dict(path)?
        }
        None => JiebaTokenizer::new(),
    };
    Ok(Arc::new(tokenizer.hmm(config.hmm)))
}

/// Load, filter, extract, rank, print.
fn analyze(args: &AnalyzeArgs, cli_args: &YixiangArgs) -> Result<()> {
    let config = args.resolve_config()?;
    let start = Instant::now();
    debug!("Resolved configuration: {config:?}");

    let works = load_works_from_dirs(&config.data_dirs);
    if works.is_empty() {
        eprintln!("No works were loaded; check the corpus directories.");
        return Ok(());
    }

    let works = filter_works_by_author(works, &config.authors);
    if works.is_empty() {
        eprintln!("None of the configured authors appear in the corpus.");
        return Ok(());
    }

    let stop_words = load_stop_words(&config.stop_words_path);
    let tokenizer = build_tokenizer(&config)?;

    if cli_args.verbosity() > 1 {
        eprintln!(
            "Extracting imagery from {} works with {}...",
            works.len(),
            tokenizer.name()
        );
    }

    let extractor = ImageryExtractor::new(tokenizer, stop_words, &config.pos_tags)
        .parallel(config.parallel)
        .threads(config.parallel.then(|| config.effective_threads()));
    let extraction = extractor.extract(&works);

    if extraction.is_empty() {
        eprintln!("No imagery words survived filtering.");
        return Ok(());
    }
    if extraction.skipped > 0 && cli_args.verbosity() > 0 {
        eprintln!("Skipped {} works that failed to segment.", extraction.skipped);
    }

    let report = FrequencyReport::build(&extraction, config.top_n);
    output_report(&report, cli_args)?;

    if cli_args.verbosity() > 1 {
        eprintln!("Analysis completed in {:.2?}", start.elapsed());
    }
    Ok(())
}

/// Show the segmentation of one text and each token's filter verdict.
fn segment(args: &SegmentArgs, cli_args: &YixiangArgs) -> Result<()> {
    let config = args.pipeline.load_config()?;
    config.validate()?;

    let stop_words = load_stop_words(&config.stop_words_path);
    let tokenizer = build_tokenizer(&config)?;
    let analyzer = ImageryAnalyzer::new(tokenizer, stop_words, &config.pos_tags);

    let result = SegmentationResult {
        normalized: analyzer.normalize(&args.text),
        tokens: analyzer.explain(&args.text)?,
    };
    output_segmentation(&result, cli_args)
}
