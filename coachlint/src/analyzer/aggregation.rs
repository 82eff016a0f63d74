//! Aggregation of per-file feedback into an overall picture.
//!
//! Mirrors the coaching platform's project-level rollup: per-file issue
//! counts, a quality distribution, and a weighted average mapped back onto
//! the quality scale.

use crate::feedback::{CodeFeedback, CodeQualityMetric};
use serde::Serialize;

/// Condensed result of analyzing one file.
#[derive(Debug, Clone, Serialize)]
pub struct FileAnalysis {
    /// Display name of the analyzed input.
    pub file_name: String,
    /// Quality tier for this file.
    pub quality_score: CodeQualityMetric,
    /// Number of semantic errors found.
    pub semantic_errors: usize,
    /// Number of style issues found.
    pub style_issues: usize,
}

impl FileAnalysis {
    /// Builds a per-file record from a full feedback value.
    #[must_use]
    pub fn from_feedback(file_name: impl Into<String>, feedback: &CodeFeedback) -> Self {
        Self {
            file_name: file_name.into(),
            quality_score: feedback.quality_score,
            semantic_errors: feedback.semantic_errors.len(),
            style_issues: feedback.style_issues.len(),
        }
    }
}

/// Number of files in each quality tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QualityDistribution {
    /// Files scored EXCELLENT.
    pub excellent: usize,
    /// Files scored GOOD.
    pub good: usize,
    /// Files scored SATISFACTORY.
    pub satisfactory: usize,
    /// Files scored `NEEDS_IMPROVEMENT`.
    pub needs_improvement: usize,
    /// Files scored POOR.
    pub poor: usize,
}

impl QualityDistribution {
    fn record(&mut self, metric: CodeQualityMetric) {
        match metric {
            CodeQualityMetric::Excellent => self.excellent += 1,
            CodeQualityMetric::Good => self.good += 1,
            CodeQualityMetric::Satisfactory => self.satisfactory += 1,
            CodeQualityMetric::NeedsImprovement => self.needs_improvement += 1,
            CodeQualityMetric::Poor => self.poor += 1,
        }
    }
}

/// Rollup over a set of analyzed files.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    /// Number of files that went into the rollup.
    pub analyzed_files: usize,
    /// Per-tier file counts.
    pub quality_distribution: QualityDistribution,
    /// Mean of the tier weights (5 for EXCELLENT down to 1 for POOR).
    pub average_score: f64,
    /// The average mapped back onto the quality scale. SATISFACTORY when
    /// nothing was analyzed.
    pub overall_quality: CodeQualityMetric,
}

/// Summarizes a batch of per-file analyses.
#[must_use]
pub fn summarize(files: &[FileAnalysis]) -> AnalysisSummary {
    if files.is_empty() {
        return AnalysisSummary {
            analyzed_files: 0,
            quality_distribution: QualityDistribution::default(),
            average_score: 0.0,
            overall_quality: CodeQualityMetric::Satisfactory,
        };
    }

    let mut distribution = QualityDistribution::default();
    let mut total = 0usize;
    for file in files {
        distribution.record(file.quality_score);
        total += usize::from(file.quality_score.value());
    }

    let average_score = total as f64 / files.len() as f64;
    AnalysisSummary {
        analyzed_files: files.len(),
        quality_distribution: distribution,
        average_score,
        overall_quality: CodeQualityMetric::from_average(average_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, metric: CodeQualityMetric) -> FileAnalysis {
        FileAnalysis {
            file_name: name.to_owned(),
            quality_score: metric,
            semantic_errors: 0,
            style_issues: 0,
        }
    }

    #[test]
    fn test_empty_batch_defaults_to_satisfactory() {
        let summary = summarize(&[]);
        assert_eq!(summary.analyzed_files, 0);
        assert_eq!(summary.overall_quality, CodeQualityMetric::Satisfactory);
        assert_eq!(summary.quality_distribution, QualityDistribution::default());
    }

    #[test]
    fn test_distribution_and_average() {
        let files = vec![
            file("a.py", CodeQualityMetric::Excellent),
            file("b.py", CodeQualityMetric::Excellent),
            file("c.py", CodeQualityMetric::Poor),
        ];
        let summary = summarize(&files);
        assert_eq!(summary.analyzed_files, 3);
        assert_eq!(summary.quality_distribution.excellent, 2);
        assert_eq!(summary.quality_distribution.poor, 1);
        assert!((summary.average_score - 11.0 / 3.0).abs() < 1e-9);
        assert_eq!(summary.overall_quality, CodeQualityMetric::Good);
    }

    #[test]
    fn test_single_excellent_file_stays_excellent() {
        let summary = summarize(&[file("a.py", CodeQualityMetric::Excellent)]);
        assert_eq!(summary.overall_quality, CodeQualityMetric::Excellent);
        assert!((summary.average_score - 5.0).abs() < f64::EPSILON);
    }
}
