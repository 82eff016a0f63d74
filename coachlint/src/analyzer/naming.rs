//! Variable-name convention checks.

use super::CodeAnalyzer;
use ruff_python_ast::{self as ast, Expr, Stmt};

/// Checks a variable or parameter name against the naming conventions and
/// appends diagnostics in rule order. `context` is the statement the name
/// occurs in; its subtree decides whether a single-letter name sits in a
/// valid loop/exception context.
pub(super) fn check_variable_name(
    analyzer: &CodeAnalyzer,
    name: &str,
    context: &Stmt,
    errors: &mut Vec<String>,
) {
    // '_' is the conventional placeholder for intentionally unused values.
    if name == "_" {
        return;
    }

    let mut chars = name.chars();
    if let (Some(letter), None) = (chars.next(), chars.next()) {
        if analyzer.is_valid_single_letter(letter) {
            if !is_in_valid_context(name, context) {
                errors.push(format!(
                    "Single-letter variable '{name}' should only be used in loops or exception handling"
                ));
            }
        } else {
            errors.push(format!(
                "Single-letter variable '{name}' is not a conventional choice"
            ));
        }
        return;
    }

    // Only underscore names with no cased characters (e.g. "_2") can satisfy
    // all three conditions at once.
    if !is_fully_lower(name) && name.contains('_') && !name.chars().any(char::is_uppercase) {
        errors.push(format!(
            "Variable '{name}' should use snake_case naming convention"
        ));
    }

    if name.starts_with('_')
        && !name.starts_with("__")
        && !name[1..].chars().any(char::is_uppercase)
        && name.chars().count() == 2
    {
        errors.push(format!("Single underscore variable '{name}' is too short"));
    }

    if analyzer.is_generic(&name.to_lowercase()) {
        errors.push(format!("Variable name '{name}' is too generic"));
    }
}

/// Python `str.islower` semantics: at least one cased character and none
/// uppercase.
fn is_fully_lower(name: &str) -> bool {
    let mut has_cased = false;
    for c in name.chars() {
        if c.is_uppercase() {
            return false;
        }
        if c.is_lowercase() {
            has_cased = true;
        }
    }
    has_cased
}

/// Searches the subtree rooted at `stmt` for a `for` loop whose target is
/// `name` or an exception handler binding `name`.
fn is_in_valid_context(name: &str, stmt: &Stmt) -> bool {
    let mut stack: Vec<&Stmt> = vec![stmt];
    while let Some(current) = stack.pop() {
        match current {
            Stmt::For(node) => {
                if !node.is_async {
                    if let Expr::Name(target) = &*node.target {
                        if target.id.as_str() == name {
                            return true;
                        }
                    }
                }
                stack.extend(&node.body);
                stack.extend(&node.orelse);
            }
            Stmt::Try(node) => {
                for ast::ExceptHandler::ExceptHandler(handler) in &node.handlers {
                    if handler
                        .name
                        .as_ref()
                        .is_some_and(|ident| ident.as_str() == name)
                    {
                        return true;
                    }
                    stack.extend(&handler.body);
                }
                stack.extend(&node.body);
                stack.extend(&node.orelse);
                stack.extend(&node.finalbody);
            }
            Stmt::FunctionDef(node) => stack.extend(&node.body),
            Stmt::ClassDef(node) => stack.extend(&node.body),
            Stmt::If(node) => {
                stack.extend(&node.body);
                for clause in &node.elif_else_clauses {
                    stack.extend(&clause.body);
                }
            }
            Stmt::While(node) => {
                stack.extend(&node.body);
                stack.extend(&node.orelse);
            }
            Stmt::With(node) => stack.extend(&node.body),
            Stmt::Match(node) => {
                for case in &node.cases {
                    stack.extend(&case.body);
                }
            }
            _ => {}
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::is_fully_lower;

    #[test]
    fn test_is_fully_lower() {
        assert!(is_fully_lower("snake_case"));
        assert!(is_fully_lower("a1"));
        assert!(!is_fully_lower("CamelCase"));
        assert!(!is_fully_lower("_2"));
        assert!(!is_fully_lower("__"));
    }
}
