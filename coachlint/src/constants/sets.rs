use rustc_hash::FxHashSet;
use std::sync::OnceLock;

/// Returns the single-letter names that are acceptable in loop or
/// exception-handler contexts.
pub fn get_valid_single_letters() -> &'static FxHashSet<char> {
    static SET: OnceLock<FxHashSet<char>> = OnceLock::new();
    SET.get_or_init(|| {
        let mut set = FxHashSet::default();
        for letter in [
            'i', 'j', 'k', // loop indices
            'x', 'y', 'z', // coordinates
            'n', 'm', // sizes/lengths
            'e', // exception variable
        ] {
            set.insert(letter);
        }
        set
    })
}

/// Returns names considered too generic to carry meaning.
pub fn get_generic_names() -> &'static FxHashSet<&'static str> {
    static SET: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| {
        let mut set = FxHashSet::default();
        for name in ["foo", "bar", "baz", "temp", "tmp"] {
            set.insert(name);
        }
        set
    })
}
