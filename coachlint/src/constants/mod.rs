//! Shared constant sets and limits.

mod builtins;
mod sets;

pub use builtins::get_python_builtins;
pub use sets::{get_generic_names, get_valid_single_letters};

/// Name of the configuration file discovered by walking up from the
/// analyzed path.
pub const CONFIG_FILENAME: &str = ".coachlint.toml";
