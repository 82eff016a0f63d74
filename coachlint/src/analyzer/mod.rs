//! The core analysis engine.
//!
//! [`CodeAnalyzer`] turns one source string into one [`CodeFeedback`] record
//! through four sequential passes: parse, semantic walk, style scan, and
//! scoring. The analyzer holds only its rule configuration; all per-invocation
//! state lives on the stack, so a single instance can serve concurrent calls.

pub mod aggregation;
mod naming;
mod scoring;
mod semantic;
mod style;

use crate::config::Config;
use crate::constants::{get_generic_names, get_python_builtins, get_valid_single_letters};
use crate::feedback::{CodeFeedback, CodeQualityMetric};
use crate::utils::{humanize_parse_error, LineIndex};
use rustc_hash::FxHashSet;

/// Rule configuration for the analyzer.
pub struct CodeAnalyzer {
    /// Names that must not be shadowed by assignment targets.
    reserved_names: FxHashSet<String>,
    /// Single-letter names acceptable in loop/exception contexts.
    valid_single_letters: FxHashSet<char>,
    /// Lowercased names considered too generic to carry meaning.
    generic_names: FxHashSet<String>,
}

impl Default for CodeAnalyzer {
    fn default() -> Self {
        Self {
            reserved_names: get_python_builtins()
                .iter()
                .map(|name| (*name).to_owned())
                .collect(),
            valid_single_letters: get_valid_single_letters().clone(),
            generic_names: get_generic_names()
                .iter()
                .map(|name| (*name).to_owned())
                .collect(),
        }
    }
}

impl CodeAnalyzer {
    /// Creates an analyzer with the default rule sets (Python builtin
    /// namespace, conventional single letters, common placeholder names).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an analyzer from a loaded configuration, applying any rule-set
    /// overrides it carries.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut analyzer = Self::default();
        if let Some(reserved) = &config.coachlint.reserved_names {
            analyzer.reserved_names = reserved.iter().cloned().collect();
        }
        if let Some(extra) = &config.coachlint.extra_reserved_names {
            analyzer.reserved_names.extend(extra.iter().cloned());
        }
        if let Some(letters) = &config.coachlint.allowed_single_letters {
            analyzer.valid_single_letters = letters
                .iter()
                .filter_map(|entry| {
                    let mut chars = entry.chars();
                    match (chars.next(), chars.next()) {
                        (Some(letter), None) => Some(letter),
                        _ => None,
                    }
                })
                .collect();
        }
        if let Some(generic) = &config.coachlint.generic_names {
            analyzer.generic_names = generic.iter().map(|name| name.to_lowercase()).collect();
        }
        analyzer
    }

    /// Builder-style method to replace the reserved-name set.
    #[must_use]
    pub fn with_reserved_names(mut self, names: Vec<String>) -> Self {
        self.reserved_names = names.into_iter().collect();
        self
    }

    /// Builder-style method to extend the reserved-name set.
    #[must_use]
    pub fn with_extra_reserved_names(mut self, names: Vec<String>) -> Self {
        self.reserved_names.extend(names);
        self
    }

    /// Builder-style method to replace the single-letter whitelist.
    #[must_use]
    pub fn with_single_letters(mut self, letters: Vec<char>) -> Self {
        self.valid_single_letters = letters.into_iter().collect();
        self
    }

    /// Builder-style method to replace the generic-name set.
    #[must_use]
    pub fn with_generic_names(mut self, names: Vec<String>) -> Self {
        self.generic_names = names.into_iter().map(|name| name.to_lowercase()).collect();
        self
    }

    pub(crate) fn is_reserved(&self, name: &str) -> bool {
        self.reserved_names.contains(name)
    }

    pub(crate) fn is_valid_single_letter(&self, letter: char) -> bool {
        self.valid_single_letters.contains(&letter)
    }

    pub(crate) fn is_generic(&self, lowercase_name: &str) -> bool {
        self.generic_names.contains(lowercase_name)
    }

    /// Analyzes a single source string and always returns a populated
    /// feedback record.
    ///
    /// Unparsable input does not error: it produces a `POOR`-tier record whose
    /// only semantic entry is the syntax error, with byte offsets in the
    /// parser message rewritten to line numbers.
    #[must_use]
    pub fn analyze_code(&self, code: &str) -> CodeFeedback {
        match ruff_python_parser::parse_module(code) {
            Ok(parsed) => {
                let module = parsed.into_syntax();
                let semantic_errors = semantic::check_semantic_errors(self, &module);
                let style_issues = style::check_style_issues(code);
                let quality_score =
                    scoring::evaluate_quality(semantic_errors.len() + style_issues.len());
                let improvement_suggestions =
                    scoring::generate_suggestions(&semantic_errors, &style_issues);
                CodeFeedback {
                    semantic_errors,
                    style_issues,
                    quality_score,
                    improvement_suggestions,
                }
            }
            Err(error) => {
                let line_index = LineIndex::new(code);
                let message = humanize_parse_error(&format!("{error}"), &line_index);
                CodeFeedback {
                    semantic_errors: vec![format!("Syntax error: {message}")],
                    style_issues: Vec::new(),
                    quality_score: CodeQualityMetric::Poor,
                    improvement_suggestions: vec![
                        "Fix the syntax error before proceeding".to_owned()
                    ],
                }
            }
        }
    }
}
