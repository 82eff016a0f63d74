//! Shared CLI entry point.
//!
//! Both binaries delegate here so their behavior stays identical: argument
//! parsing, config discovery, input collection, rendering, and the exit-code
//! gate all live in one place.

use crate::analyzer::aggregation::{self, FileAnalysis};
use crate::analyzer::CodeAnalyzer;
use crate::cli::Cli;
use crate::config::Config;
use crate::feedback::{CodeFeedback, CodeQualityMetric};
use crate::output;
use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{Read, Write};
use std::path::PathBuf;

/// Parses `args` (argv without the program name) and runs the analysis,
/// printing to stdout. Returns the process exit code.
///
/// # Errors
///
/// Returns an error for unreadable inputs or an unknown `--fail-below` tier.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    let cli = Cli::parse_from(std::iter::once("coachlint".to_owned()).chain(args));
    run(&cli, &mut std::io::stdout())
}

/// Runs the analysis against an arbitrary writer. Returns the exit code.
///
/// # Errors
///
/// Returns an error for unreadable inputs, an unknown `--fail-below` tier,
/// or a failed write.
pub fn run(cli: &Cli, writer: &mut impl Write) -> Result<i32> {
    let config_root = cli
        .paths
        .first()
        .map_or_else(|| PathBuf::from("."), Clone::clone);
    let config = Config::load_from_path(&config_root);
    let analyzer = CodeAnalyzer::from_config(&config);

    let fail_below = match cli
        .fail_below
        .as_ref()
        .or(config.coachlint.fail_below.as_ref())
    {
        Some(name) => Some(
            CodeQualityMetric::from_name(name)
                .with_context(|| format!("unknown quality tier '{name}'"))?,
        ),
        None => None,
    };

    let inputs = collect_inputs(&cli.paths)?;
    let results: Vec<(String, CodeFeedback)> = inputs
        .into_iter()
        .map(|(label, source)| {
            let feedback = analyzer.analyze_code(&source);
            (label, feedback)
        })
        .collect();

    let files: Vec<FileAnalysis> = results
        .iter()
        .map(|(label, feedback)| FileAnalysis::from_feedback(label.clone(), feedback))
        .collect();
    let summary = aggregation::summarize(&files);

    if cli.json {
        if let [(_, feedback)] = results.as_slice() {
            if !cli.summary {
                output::write_json_feedback(writer, feedback)?;
                return Ok(exit_code(fail_below, &results));
            }
        }
        let report = output::JsonReport {
            files: results
                .iter()
                .map(|(label, feedback)| output::JsonFileEntry {
                    file_name: label.as_str(),
                    feedback,
                })
                .collect(),
            summary: &summary,
        };
        output::write_json_report(writer, &report)?;
    } else {
        output::print_header(writer)?;
        for (label, feedback) in &results {
            output::print_feedback(writer, label, feedback)?;
        }
        if cli.summary {
            output::print_summary(writer, &files, &summary)?;
        }
    }

    Ok(exit_code(fail_below, &results))
}

fn exit_code(fail_below: Option<CodeQualityMetric>, results: &[(String, CodeFeedback)]) -> i32 {
    match fail_below {
        Some(threshold)
            if results
                .iter()
                .any(|(_, feedback)| feedback.quality_score < threshold) =>
        {
            1
        }
        _ => 0,
    }
}

fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<(String, String)>> {
    if paths.is_empty() {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("failed to read source from stdin")?;
        return Ok(vec![("<stdin>".to_owned(), source)]);
    }

    let mut inputs = Vec::with_capacity(paths.len());
    for path in paths {
        if path.is_dir() {
            bail!(
                "{} is a directory; coachlint analyzes individual files",
                path.display()
            );
        }
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        inputs.push((path.display().to_string(), source));
    }
    Ok(inputs)
}
