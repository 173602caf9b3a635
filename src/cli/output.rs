//! Output formatting for CLI commands.

use std::io::Write;

use serde::Serialize;

use crate::analysis::analyzer::imagery::TokenVerdict;
use crate::cli::args::{OutputFormat, YixiangArgs};
use crate::error::Result;
use crate::frequency::{FrequencyReport, FrequencyTable};

/// Segmentation trace of one text.
#[derive(Debug, Serialize)]
pub struct SegmentationResult {
    pub normalized: String,
    pub tokens: Vec<TokenVerdict>,
}

/// Print a frequency report to stdout in the requested format.
pub fn output_report(report: &FrequencyReport, args: &YixiangArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, report, args.output_format, args.pretty)
}

/// Print a segmentation trace to stdout in the requested format.
pub fn output_segmentation(result: &SegmentationResult, args: &YixiangArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_segmentation(&mut out, result, args.output_format, args.pretty)
}

/// Render a frequency report.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &FrequencyReport,
    format: OutputFormat,
    pretty: bool,
) -> Result<()> {
    match format {
        OutputFormat::Human => write_report_human(out, report),
        OutputFormat::Json => write_json(out, report, pretty),
        OutputFormat::Csv => write_report_csv(out, report),
    }
}

/// Render a segmentation trace.
pub fn write_segmentation<W: Write>(
    out: &mut W,
    result: &SegmentationResult,
    format: OutputFormat,
    pretty: bool,
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            writeln!(out, "Normalized: {}", result.normalized)?;
            writeln!(out, "{:<8}\t{:<6}\t{}", "Word", "POS", "Verdict")?;
            for verdict in &result.tokens {
                writeln!(
                    out,
                    "{:<8}\t{:<6}\t{}",
                    verdict.token.text,
                    verdict.token.pos_tag().unwrap_or("-"),
                    describe_verdict(verdict)
                )?;
            }
            Ok(())
        }
        OutputFormat::Json => write_json(out, result, pretty),
        OutputFormat::Csv => {
            writeln!(out, "word,pos,kept,stop_word,too_short,pos_rejected")?;
            for v in &result.tokens {
                writeln!(
                    out,
                    "{},{},{},{},{},{}",
                    csv_field(&v.token.text),
                    csv_field(v.token.pos_tag().unwrap_or("")),
                    v.kept(),
                    v.stop_word,
                    v.too_short,
                    v.pos_rejected
                )?;
            }
            Ok(())
        }
    }
}

fn describe_verdict(verdict: &TokenVerdict) -> String {
    if verdict.kept() {
        return "kept".to_string();
    }
    let mut reasons = Vec::new();
    if verdict.stop_word {
        reasons.push("stop word");
    }
    if verdict.too_short {
        reasons.push("too short");
    }
    if verdict.pos_rejected {
        reasons.push("POS");
    }
    format!("dropped ({})", reasons.join(", "))
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_table_human<W: Write>(out: &mut W, title: &str, table: &FrequencyTable) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{title}")?;
    writeln!(out, "{:<8}\t{:>9}", "Word", "Frequency")?;
    for entry in table {
        writeln!(out, "{:<8}\t{:>9}", entry.word, entry.frequency)?;
    }
    writeln!(out, "{}", "-".repeat(title.chars().count()))?;
    Ok(())
}

fn write_report_human<W: Write>(out: &mut W, report: &FrequencyReport) -> Result<()> {
    write_table_human(
        out,
        &format!("--- Global Top {} imagery words ---", report.top_n),
        &report.global,
    )?;

    for entry in &report.authors {
        write_table_human(
            out,
            &format!(
                "--- Author: {} (Top {} imagery words) ---",
                entry.author, report.top_n
            ),
            &entry.table,
        )?;
    }
    Ok(())
}

fn write_report_csv<W: Write>(out: &mut W, report: &FrequencyReport) -> Result<()> {
    writeln!(out, "scope,word,frequency")?;
    for entry in &report.global {
        writeln!(out, "global,{},{}", csv_field(&entry.word), entry.frequency)?;
    }
    for author in &report.authors {
        for entry in &author.table {
            writeln!(
                out,
                "{},{},{}",
                csv_field(&author.author),
                csv_field(&entry.word),
                entry.frequency
            )?;
        }
    }
    Ok(())
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
