//! Small shared utilities.

use regex::Regex;
use ruff_text_size::TextSize;
use std::sync::LazyLock;

/// A utility struct to convert byte offsets to line numbers.
///
/// The AST parser reports locations as byte offsets, but diagnostics are more
/// readable with 1-based line numbers.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Stores the byte index of the start of each line.
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Creates a new `LineIndex` by scanning the source code for newlines.
    /// Uses byte iteration since '\n' is always a single byte in UTF-8.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, byte) in source.as_bytes().iter().enumerate() {
            if *byte == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self { line_starts }
    }

    /// Converts a `TextSize` (byte offset) to a 1-indexed line number.
    #[must_use]
    pub fn line_index(&self, offset: TextSize) -> usize {
        let offset = offset.to_usize();
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line + 1,
            Err(line) => line,
        }
    }
}

static BYTE_RANGE_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"at byte range (\d+)\.\.(\d+)").ok());

/// Rewrites `at byte range N..M` fragments of a parser error message into
/// `at line L`, so syntax-error feedback reads like the interpreter's own.
#[must_use]
pub fn humanize_parse_error(message: &str, line_index: &LineIndex) -> String {
    let Some(re) = BYTE_RANGE_RE.as_ref() else {
        return message.to_owned();
    };
    re.replace_all(message, |caps: &regex::Captures<'_>| {
        let start = caps[1].parse::<u32>().unwrap_or(0);
        format!("at line {}", line_index.line_index(TextSize::from(start)))
    })
    .into_owned()
}
