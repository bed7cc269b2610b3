//! Unified diffs for dry runs

use similar::TextDiff;

/// Render a unified diff of `old` against `new` for `path`.
///
/// Returns an empty string when the contents are identical.
pub fn unified(path: &str, old: &str, new: &str) -> String {
    if old == new {
        return String::new();
    }

    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(2)
        .header(&format!("a/{path}"), &format!("b/{path}"))
        .to_string()
}
