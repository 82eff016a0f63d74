//! Command line interface definition.

use clap::Parser;
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.coachlint.toml):
  Create this file in your project root to set defaults.

  [coachlint]
  # Replace the reserved-name set (defaults to the Python builtins)
  reserved_names = [\"list\", \"dict\"]
  # Or extend it without replacing
  extra_reserved_names = [\"frobnicate\"]

  # Single-letter names allowed in loops/exception handlers
  allowed_single_letters = [\"i\", \"j\", \"k\", \"e\"]

  # Names flagged as too generic (case-insensitive)
  generic_names = [\"foo\", \"bar\", \"baz\", \"temp\", \"tmp\"]

  # CI/CD: exit 1 when any input scores below this tier
  fail_below = \"SATISFACTORY\"
";

/// Command line interface configuration using `clap`.
/// This struct defines the arguments and flags accepted by the program.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Coachlint - rule-based feedback on Python study code: naming, semantics, style, and a quality score",
    long_about = None,
    after_help = CONFIG_HELP
)]
pub struct Cli {
    /// Python files to analyze. With no paths, a single snippet is read
    /// from stdin.
    pub paths: Vec<PathBuf>,

    /// Output raw JSON instead of the human-readable report.
    #[arg(long)]
    pub json: bool,

    /// Show the per-file summary table and aggregate rollup.
    #[arg(long)]
    pub summary: bool,

    /// Exit with code 1 if any input scores below this tier
    /// (EXCELLENT, GOOD, SATISFACTORY, NEEDS_IMPROVEMENT, POOR).
    #[arg(long, value_name = "TIER")]
    pub fail_below: Option<String>,
}
