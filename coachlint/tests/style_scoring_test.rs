//! Style scanning and tier mapping through the public API.
#![allow(clippy::unwrap_used)]

use coachlint::{CodeAnalyzer, CodeQualityMetric};

#[test]
fn test_tab_reports_one_issue_with_line_number() {
    let analyzer = CodeAnalyzer::new();
    let feedback = analyzer.analyze_code("alpha = 1\nbeta\t= 2\n");

    assert_eq!(
        feedback.style_issues,
        vec!["Line 2 contains tabs instead of spaces"]
    );
    assert!(feedback.semantic_errors.is_empty());
    assert_eq!(feedback.quality_score, CodeQualityMetric::Good);
}

#[test]
fn test_semicolon_in_string_literal_not_flagged() {
    let analyzer = CodeAnalyzer::new();
    let feedback = analyzer.analyze_code("text = 'a;b'\n");

    assert!(feedback.style_issues.is_empty());
    assert_eq!(feedback.quality_score, CodeQualityMetric::Excellent);
}

#[test]
fn test_semicolon_statements_flagged_per_line() {
    let analyzer = CodeAnalyzer::new();
    let feedback = analyzer.analyze_code("alpha = 1; beta = 2\ngamma = 3; delta = 4\n");

    assert_eq!(
        feedback.style_issues,
        vec![
            "Line 1 contains multiple statements",
            "Line 2 contains multiple statements",
        ]
    );
}

#[test]
fn test_three_issues_map_to_satisfactory() {
    let analyzer = CodeAnalyzer::new();
    let feedback = analyzer.analyze_code("foo = 1\nbar = 2\ntemp = 3\n");

    assert_eq!(feedback.total_issues(), 3);
    assert_eq!(feedback.quality_score, CodeQualityMetric::Satisfactory);
}

#[test]
fn test_five_issues_map_to_needs_improvement() {
    let analyzer = CodeAnalyzer::new();
    let feedback = analyzer.analyze_code("foo = 1\nbar = 2\nbaz = 3\ntemp = 4\ntmp = 5\n");

    assert_eq!(feedback.total_issues(), 5);
    assert_eq!(feedback.quality_score, CodeQualityMetric::NeedsImprovement);
}

#[test]
fn test_seven_issues_map_to_poor() {
    let analyzer = CodeAnalyzer::new();
    let source = "foo = 1\nbar = 2\nbaz = 3\ntemp = 4\ntmp = 5\nalpha\t= 6\nbeta\t= 7\n";
    let feedback = analyzer.analyze_code(source);

    assert_eq!(feedback.total_issues(), 7);
    assert_eq!(feedback.quality_score, CodeQualityMetric::Poor);
}

#[test]
fn test_suggestions_carry_category_prefixes() {
    let analyzer = CodeAnalyzer::new();
    let feedback = analyzer.analyze_code("foo = 1\nalpha\t= 2\n");

    assert_eq!(
        feedback.improvement_suggestions,
        vec![
            "Consider fixing: Variable name 'foo' is too generic",
            "Style improvement: Line 2 contains tabs instead of spaces",
        ]
    );
}
