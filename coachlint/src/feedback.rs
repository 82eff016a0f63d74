//! Analysis output types: the feedback record and the quality scale.

use serde::Serialize;

/// Ordinal code-quality scale. Ordering follows quality: `POOR` is the
/// smallest value, `EXCELLENT` the largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CodeQualityMetric {
    /// Seven or more issues.
    Poor = 1,
    /// Five to six issues.
    NeedsImprovement = 2,
    /// Three to four issues.
    Satisfactory = 3,
    /// One to two issues.
    Good = 4,
    /// No issues at all.
    Excellent = 5,
}

impl CodeQualityMetric {
    /// Numeric weight of the tier (5 for `EXCELLENT` down to 1 for `POOR`).
    #[must_use]
    pub fn value(self) -> u8 {
        self as u8
    }

    /// The tier name as it appears in serialized output.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Excellent => "EXCELLENT",
            Self::Good => "GOOD",
            Self::Satisfactory => "SATISFACTORY",
            Self::NeedsImprovement => "NEEDS_IMPROVEMENT",
            Self::Poor => "POOR",
        }
    }

    /// Parses a tier name (case-insensitive). Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_uppercase().as_str() {
            "EXCELLENT" => Some(Self::Excellent),
            "GOOD" => Some(Self::Good),
            "SATISFACTORY" => Some(Self::Satisfactory),
            "NEEDS_IMPROVEMENT" => Some(Self::NeedsImprovement),
            "POOR" => Some(Self::Poor),
            _ => None,
        }
    }

    /// Maps an average of tier weights back onto the scale.
    #[must_use]
    pub fn from_average(average: f64) -> Self {
        if average >= 4.5 {
            Self::Excellent
        } else if average >= 3.5 {
            Self::Good
        } else if average >= 2.5 {
            Self::Satisfactory
        } else if average >= 1.5 {
            Self::NeedsImprovement
        } else {
            Self::Poor
        }
    }
}

impl std::fmt::Display for CodeQualityMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The analyzer's output record. One per invocation, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeFeedback {
    /// Naming and comparison anti-patterns, in discovery order.
    pub semantic_errors: Vec<String>,
    /// Whitespace/statement-density issues, in line order.
    pub style_issues: Vec<String>,
    /// Quality tier derived from the total issue count.
    pub quality_score: CodeQualityMetric,
    /// One suggestion per issue, semantic errors first, category-prefixed.
    pub improvement_suggestions: Vec<String>,
}

impl CodeFeedback {
    /// Total number of detected issues across both lists.
    #[must_use]
    pub fn total_issues(&self) -> usize {
        self.semantic_errors.len() + self.style_issues.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_ordering() {
        assert!(CodeQualityMetric::Poor < CodeQualityMetric::NeedsImprovement);
        assert!(CodeQualityMetric::Good < CodeQualityMetric::Excellent);
        assert_eq!(CodeQualityMetric::Excellent.value(), 5);
        assert_eq!(CodeQualityMetric::Poor.value(), 1);
    }

    #[test]
    fn test_metric_name_round_trip() {
        for metric in [
            CodeQualityMetric::Excellent,
            CodeQualityMetric::Good,
            CodeQualityMetric::Satisfactory,
            CodeQualityMetric::NeedsImprovement,
            CodeQualityMetric::Poor,
        ] {
            assert_eq!(CodeQualityMetric::from_name(metric.name()), Some(metric));
        }
        assert_eq!(CodeQualityMetric::from_name("needs_improvement"), Some(CodeQualityMetric::NeedsImprovement));
        assert_eq!(CodeQualityMetric::from_name("stellar"), None);
    }

    #[test]
    fn test_from_average_thresholds() {
        assert_eq!(CodeQualityMetric::from_average(5.0), CodeQualityMetric::Excellent);
        assert_eq!(CodeQualityMetric::from_average(4.5), CodeQualityMetric::Excellent);
        assert_eq!(CodeQualityMetric::from_average(4.49), CodeQualityMetric::Good);
        assert_eq!(CodeQualityMetric::from_average(2.5), CodeQualityMetric::Satisfactory);
        assert_eq!(CodeQualityMetric::from_average(1.5), CodeQualityMetric::NeedsImprovement);
        assert_eq!(CodeQualityMetric::from_average(1.0), CodeQualityMetric::Poor);
    }

    #[test]
    fn test_quality_score_serializes_as_tier_name() {
        #[allow(clippy::unwrap_used)]
        let json = serde_json::to_string(&CodeQualityMetric::NeedsImprovement).unwrap();
        assert_eq!(json, "\"NEEDS_IMPROVEMENT\"");
    }
}
