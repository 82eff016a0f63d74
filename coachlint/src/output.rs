//! Terminal and JSON rendering of analysis results.

use crate::analyzer::aggregation::{AnalysisSummary, FileAnalysis};
use crate::feedback::{CodeFeedback, CodeQualityMetric};
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use serde::Serialize;
use std::io::Write;

/// Print the main header with box-drawing characters.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_header(writer: &mut impl Write) -> std::io::Result<()> {
    writeln!(writer)?;
    writeln!(
        writer,
        "{}",
        "╔════════════════════════════════════════╗".cyan()
    )?;
    writeln!(
        writer,
        "{}",
        "║  Coachlint Code Feedback               ║".cyan().bold()
    )?;
    writeln!(
        writer,
        "{}",
        "╚════════════════════════════════════════╝".cyan()
    )?;
    writeln!(writer)?;
    Ok(())
}

fn metric_color(metric: CodeQualityMetric) -> Color {
    match metric {
        CodeQualityMetric::Excellent | CodeQualityMetric::Good => Color::Green,
        CodeQualityMetric::Satisfactory => Color::Yellow,
        CodeQualityMetric::NeedsImprovement | CodeQualityMetric::Poor => Color::Red,
    }
}

fn colorize_metric(metric: CodeQualityMetric) -> colored::ColoredString {
    match metric {
        CodeQualityMetric::Excellent | CodeQualityMetric::Good => metric.name().green().bold(),
        CodeQualityMetric::Satisfactory => metric.name().yellow().bold(),
        CodeQualityMetric::NeedsImprovement | CodeQualityMetric::Poor => metric.name().red().bold(),
    }
}

/// Print the feedback for one analyzed input.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_feedback(
    writer: &mut impl Write,
    label: &str,
    feedback: &CodeFeedback,
) -> std::io::Result<()> {
    writeln!(
        writer,
        "{}  [{}]",
        label.bold().underline(),
        colorize_metric(feedback.quality_score)
    )?;

    if feedback.total_issues() == 0 {
        writeln!(writer, "{}", "✓ All clean! No issues found.".green())?;
        writeln!(writer)?;
        return Ok(());
    }

    if !feedback.semantic_errors.is_empty() {
        writeln!(writer, "\n{}", "Semantic errors".bold())?;
        for error in &feedback.semantic_errors {
            writeln!(writer, "  {} {error}", "•".red())?;
        }
    }

    if !feedback.style_issues.is_empty() {
        writeln!(writer, "\n{}", "Style issues".bold())?;
        for issue in &feedback.style_issues {
            writeln!(writer, "  {} {issue}", "•".yellow())?;
        }
    }

    if !feedback.improvement_suggestions.is_empty() {
        writeln!(writer, "\n{}", "Suggestions".bold())?;
        for suggestion in &feedback.improvement_suggestions {
            writeln!(writer, "  {} {suggestion}", "→".cyan())?;
        }
    }

    writeln!(writer)?;
    Ok(())
}

/// Print the per-file summary table and the aggregate rollup.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_summary(
    writer: &mut impl Write,
    files: &[FileAnalysis],
    summary: &AnalysisSummary,
) -> std::io::Result<()> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["File", "Score", "Semantic", "Style"]);

    if cfg!(test) {
        table.set_width(120);
    }

    for file in files {
        table.add_row(vec![
            Cell::new(&file.file_name).add_attribute(Attribute::Bold),
            Cell::new(file.quality_score.name()).fg(metric_color(file.quality_score)),
            Cell::new(file.semantic_errors),
            Cell::new(file.style_issues),
        ]);
    }

    writeln!(writer, "{}", "Summary".bold().underline())?;
    writeln!(writer, "{table}")?;
    writeln!(
        writer,
        "Overall quality: {} (average {:.2} across {} file{})",
        colorize_metric(summary.overall_quality),
        summary.average_score,
        summary.analyzed_files,
        if summary.analyzed_files == 1 { "" } else { "s" }
    )?;
    Ok(())
}

/// One entry of the JSON report: the input label plus the flattened
/// feedback record.
#[derive(Serialize)]
pub struct JsonFileEntry<'a> {
    /// Display name of the analyzed input.
    pub file_name: &'a str,
    /// The feedback record, flattened into the entry.
    #[serde(flatten)]
    pub feedback: &'a CodeFeedback,
}

/// JSON report for a multi-input run.
#[derive(Serialize)]
pub struct JsonReport<'a> {
    /// Per-input feedback entries.
    pub files: Vec<JsonFileEntry<'a>>,
    /// The aggregate rollup.
    pub summary: &'a AnalysisSummary,
}

/// Serialize a single feedback record as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json_feedback(
    writer: &mut impl Write,
    feedback: &CodeFeedback,
) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, feedback)?;
    writeln!(writer)?;
    Ok(())
}

/// Serialize the multi-file report as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json_report(writer: &mut impl Write, report: &JsonReport<'_>) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)?;
    Ok(())
}
