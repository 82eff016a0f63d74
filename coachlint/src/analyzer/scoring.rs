//! Scoring and suggestion synthesis.

use crate::feedback::CodeQualityMetric;

/// Maps the total issue count onto the quality scale.
pub(super) fn evaluate_quality(total_issues: usize) -> CodeQualityMetric {
    match total_issues {
        0 => CodeQualityMetric::Excellent,
        1..=2 => CodeQualityMetric::Good,
        3..=4 => CodeQualityMetric::Satisfactory,
        5..=6 => CodeQualityMetric::NeedsImprovement,
        _ => CodeQualityMetric::Poor,
    }
}

/// One suggestion per issue: semantic errors first, then style issues, each
/// prefixed with its category.
pub(super) fn generate_suggestions(
    semantic_errors: &[String],
    style_issues: &[String],
) -> Vec<String> {
    let mut suggestions = Vec::with_capacity(semantic_errors.len() + style_issues.len());
    for error in semantic_errors {
        suggestions.push(format!("Consider fixing: {error}"));
    }
    for issue in style_issues {
        suggestions.push(format!("Style improvement: {issue}"));
    }
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(evaluate_quality(0), CodeQualityMetric::Excellent);
        assert_eq!(evaluate_quality(1), CodeQualityMetric::Good);
        assert_eq!(evaluate_quality(2), CodeQualityMetric::Good);
        assert_eq!(evaluate_quality(3), CodeQualityMetric::Satisfactory);
        assert_eq!(evaluate_quality(4), CodeQualityMetric::Satisfactory);
        assert_eq!(evaluate_quality(5), CodeQualityMetric::NeedsImprovement);
        assert_eq!(evaluate_quality(6), CodeQualityMetric::NeedsImprovement);
        assert_eq!(evaluate_quality(7), CodeQualityMetric::Poor);
        assert_eq!(evaluate_quality(100), CodeQualityMetric::Poor);
    }

    #[test]
    fn test_tier_never_improves_with_more_issues() {
        let mut previous = CodeQualityMetric::Excellent;
        for total in 0..20 {
            let tier = evaluate_quality(total);
            assert!(tier <= previous, "tier improved at {total} issues");
            previous = tier;
        }
    }

    #[test]
    fn test_suggestions_preserve_order_and_prefixes() {
        let semantic = vec!["first".to_owned(), "second".to_owned()];
        let style = vec!["third".to_owned()];
        let suggestions = generate_suggestions(&semantic, &style);
        assert_eq!(
            suggestions,
            vec![
                "Consider fixing: first",
                "Consider fixing: second",
                "Style improvement: third",
            ]
        );
    }
}
