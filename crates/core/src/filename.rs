//! Filename sanitization for exported files.

use regex::Regex;
use std::sync::LazyLock;

/// Anything that is not safe to put in a filename on every platform.
static UNSAFE_FILENAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_.-]").unwrap());

/// Replace every character outside `[A-Za-z0-9_.-]` with an underscore.
pub fn sanitize_filename(name: &str) -> String {
    UNSAFE_FILENAME_CHARS.replace_all(name, "_").into_owned()
}
