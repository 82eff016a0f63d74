//! Coachlint: rule-based static analysis for Python study code.
//!
//! The crate's heart is [`CodeAnalyzer`], a pure function from a source string
//! to a [`CodeFeedback`] record: semantic anti-patterns, style issues, an
//! ordinal quality score, and per-issue improvement suggestions. It never
//! fails — unparsable input short-circuits to a populated low-score record.
//!
//! The surrounding modules provide the CLI surface (`cli`, `entry_point`),
//! configuration loading (`config`), report rendering (`output`), and
//! multi-file aggregation (`analyzer::aggregation`).

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod constants;
pub mod entry_point;
pub mod feedback;
pub mod output;
pub mod utils;

pub use analyzer::CodeAnalyzer;
pub use feedback::{CodeFeedback, CodeQualityMetric};
