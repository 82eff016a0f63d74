//! Style pass: raw-line scan, independent of the AST.

/// Scans source lines (1-indexed) for tabs and for `;`-separated statements.
/// The quote check is a deliberately crude guard against flagging semicolons
/// inside string literals.
pub(super) fn check_style_issues(code: &str) -> Vec<String> {
    let mut issues = Vec::new();
    for (i, line) in code.split('\n').enumerate() {
        let line_number = i + 1;

        if line.contains('\t') {
            issues.push(format!("Line {line_number} contains tabs instead of spaces"));
        }

        if line.contains(';') && !(line.contains('"') || line.contains('\'')) {
            issues.push(format!("Line {line_number} contains multiple statements"));
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::check_style_issues;

    #[test]
    fn test_tab_detection_reports_line_number() {
        let issues = check_style_issues("x = 1\ny\t= 2\n");
        assert_eq!(issues, vec!["Line 2 contains tabs instead of spaces"]);
    }

    #[test]
    fn test_semicolon_without_quotes_flagged() {
        let issues = check_style_issues("a = 1; b = 2");
        assert_eq!(issues, vec!["Line 1 contains multiple statements"]);
    }

    #[test]
    fn test_semicolon_inside_quoted_line_ignored() {
        assert!(check_style_issues("s = 'a;b'").is_empty());
        assert!(check_style_issues("s = \"a;b\"").is_empty());
    }

    #[test]
    fn test_tab_and_semicolon_on_one_line_both_fire() {
        let issues = check_style_issues("a = 1;\tb = 2");
        assert_eq!(
            issues,
            vec![
                "Line 1 contains tabs instead of spaces",
                "Line 1 contains multiple statements",
            ]
        );
    }
}
